//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are
//! `kernel::error::AppError` rendered by the crates.

mod config;

use anyhow::Context;
use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method, header},
};
use axum_server::tls_rustls::RustlsConfig;
use csrf::{CsrfAppState, csrf_router, with_csrf_protection};
use platform::headers::with_security_headers;
use platform::rate_limit::InMemoryRateLimitStore;
use portal::{PgCustomerRepository, portal_router};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,portal=info,csrf=info,platform=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env(cfg!(debug_assertions)).context("Invalid configuration")?;

    if config.csrf_signing_key.is_none() {
        tracing::warn!("CSRF_SIGNING_KEY not set, using a random key for this process");
    }

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    tracing::info!("Migrations completed");

    let limiter = Arc::new(InMemoryRateLimitStore::new());
    spawn_rate_limit_purge(limiter.clone(), config.login_rate_limit.window);

    let app = build_router(&config, pool, limiter);

    // Plain HTTP listener
    let http_addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = TcpListener::bind(http_addr)
        .await
        .with_context(|| format!("Failed to bind {http_addr}"))?;
    tracing::info!("Listening on http://{}", http_addr);

    let http = {
        let app = app.clone();
        async move {
            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .context("HTTP server failed")
        }
    };

    let Some(tls) = config.tls.as_ref() else {
        return http.await;
    };

    // HTTPS listener on the same router
    let rustls = RustlsConfig::from_pem_file(&tls.cert, &tls.key)
        .await
        .context("Failed to load TLS certificate or key")?;
    let https_addr = SocketAddr::from(([0, 0, 0, 0], config.https_port));
    tracing::info!("Listening on https://{}", https_addr);

    let https = async move {
        axum_server::bind_rustls(https_addr, rustls)
            .serve(app.into_make_service_with_connect_info::<SocketAddr>())
            .await
            .context("HTTPS server failed")
    };

    tokio::try_join!(http, https)?;

    Ok(())
}

fn build_router(
    config: &ServerConfig,
    pool: PgPool,
    limiter: Arc<InMemoryRateLimitStore>,
) -> Router {
    let csrf_state = CsrfAppState::new(config.csrf_config());

    let portal = portal_router(
        PgCustomerRepository::new(pool),
        limiter,
        config.portal_config(),
    );

    // CORS configuration
    let allowed_origins: Vec<HeaderValue> = config
        .frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static("x-csrf-token"),
        ]))
        .allow_credentials(true);

    let app = Router::new()
        .merge(csrf_router(csrf_state.clone()))
        .merge(with_csrf_protection(portal, csrf_state))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    with_security_headers(app)
}

/// Drop expired login windows once per window length
fn spawn_rate_limit_purge(store: Arc<InMemoryRateLimitStore>, window: Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(window);
        // First tick completes immediately
        ticker.tick().await;
        loop {
            ticker.tick().await;
            match store.purge_expired(window) {
                Ok(purged) => {
                    tracing::debug!(windows_purged = purged, "Purged expired login windows");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Login window purge failed");
                }
            }
        }
    });
}
