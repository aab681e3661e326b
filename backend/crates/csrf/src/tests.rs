//! Unit tests for CSRF crate

#[cfg(test)]
mod service_tests {
    use crate::domain::services::*;

    const KEY: [u8; 32] = [7u8; 32];

    #[test]
    fn test_generate_secret_is_well_formed() {
        let secret = generate_secret(18);
        assert_eq!(secret.len(), 24);
        assert!(is_well_formed_secret(&secret, 18));
        assert!(!is_well_formed_secret(&secret, 16));
    }

    #[test]
    fn test_generate_secret_unique() {
        assert_ne!(generate_secret(18), generate_secret(18));
    }

    #[test]
    fn test_malformed_secret_rejected() {
        assert!(!is_well_formed_secret("", 18));
        assert!(!is_well_formed_secret("not base64 at all!", 18));
        assert!(!is_well_formed_secret("c2hvcnQ", 18));
    }

    #[test]
    fn test_mint_then_verify() {
        let secret = generate_secret(18);
        let token = mint_token(&KEY, &secret, 8);
        assert!(verify_token(&KEY, &secret, &token));
        assert!(!token.contains(&secret));
    }

    #[test]
    fn test_tokens_are_salted() {
        let secret = generate_secret(18);
        let first = mint_token(&KEY, &secret, 8);
        let second = mint_token(&KEY, &secret, 8);
        assert_ne!(first, second);
        assert!(verify_token(&KEY, &secret, &first));
        assert!(verify_token(&KEY, &secret, &second));
    }

    #[test]
    fn test_token_bound_to_secret() {
        let token = mint_token(&KEY, &generate_secret(18), 8);
        assert!(!verify_token(&KEY, &generate_secret(18), &token));
    }

    #[test]
    fn test_token_bound_to_server_key() {
        let secret = generate_secret(18);
        let token = mint_token(&KEY, &secret, 8);
        assert!(!verify_token(&[8u8; 32], &secret, &token));
    }

    #[test]
    fn test_garbage_tokens_rejected() {
        let secret = generate_secret(18);
        let valid = mint_token(&KEY, &secret, 8);
        let (salt, mac) = valid.split_once('.').unwrap();

        let garbage = vec![
            String::new(),
            "nodot".to_string(),
            ".".to_string(),
            format!(".{mac}"),
            format!("{salt}."),
            format!("{salt}.%%%"),
            format!("{valid}x"),
        ];
        for token in &garbage {
            assert!(!verify_token(&KEY, &secret, token), "accepted {token:?}");
        }
    }
}

#[cfg(test)]
mod use_case_tests {
    use crate::application::config::CsrfConfig;
    use crate::application::issue_token::IssueTokenUseCase;
    use crate::application::verify_token::{VerifyTokenInput, VerifyTokenUseCase};
    use crate::domain::services::generate_secret;
    use crate::error::CsrfError;
    use std::sync::Arc;

    fn config() -> Arc<CsrfConfig> {
        Arc::new(CsrfConfig::development())
    }

    #[test]
    fn test_issue_without_secret_creates_one() {
        let output = IssueTokenUseCase::new(config()).execute(None);
        assert!(output.new_secret.is_some());
        assert!(!output.token.is_empty());
    }

    #[test]
    fn test_issue_reuses_existing_secret() {
        let secret = generate_secret(18);
        let output = IssueTokenUseCase::new(config()).execute(Some(secret));
        assert!(output.new_secret.is_none());
    }

    #[test]
    fn test_issue_replaces_malformed_secret() {
        let output = IssueTokenUseCase::new(config()).execute(Some("tampered".to_string()));
        assert!(output.new_secret.is_some());
    }

    #[test]
    fn test_issued_token_verifies() {
        let config = config();
        let issued = IssueTokenUseCase::new(config.clone()).execute(None);

        let result = VerifyTokenUseCase::new(config).execute(VerifyTokenInput {
            secret: issued.new_secret,
            token: Some(issued.token),
        });
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_verify_missing_secret() {
        let result = VerifyTokenUseCase::new(config()).execute(VerifyTokenInput {
            secret: None,
            token: Some("a.b".to_string()),
        });
        assert_eq!(result, Err(CsrfError::MissingSecret));
    }

    #[test]
    fn test_verify_missing_token() {
        let result = VerifyTokenUseCase::new(config()).execute(VerifyTokenInput {
            secret: Some(generate_secret(18)),
            token: Some(String::new()),
        });
        assert_eq!(result, Err(CsrfError::MissingToken));
    }

    #[test]
    fn test_verify_token_from_other_config() {
        let issued = IssueTokenUseCase::new(config()).execute(None);

        // Different random signing key
        let result = VerifyTokenUseCase::new(config()).execute(VerifyTokenInput {
            secret: issued.new_secret,
            token: Some(issued.token),
        });
        assert_eq!(result, Err(CsrfError::InvalidToken));
    }
}

#[cfg(test)]
mod config_tests {
    use crate::application::config::{CsrfConfig, SameSite};

    #[test]
    fn test_default_config() {
        let config = CsrfConfig::default();
        assert_eq!(config.cookie_name, "_csrf");
        assert_eq!(config.secret_bytes_len, 18);
        assert!(config.cookie_secure);
        assert_eq!(config.cookie_same_site, SameSite::Lax);
    }

    #[test]
    fn test_default_signing_key_is_random() {
        let a = CsrfConfig::default();
        let b = CsrfConfig::default();
        assert_ne!(a.signing_key, [0u8; 32]);
        assert_ne!(a.signing_key, b.signing_key);
    }

    #[test]
    fn test_fixed_signing_key() {
        let config = CsrfConfig::with_signing_key([3u8; 32]);
        assert_eq!(config.signing_key, [3u8; 32]);
        assert!(config.cookie_secure);
    }

    #[test]
    fn test_random_signing_keys_differ() {
        let a = CsrfConfig::with_random_secret();
        let b = CsrfConfig::with_random_secret();
        assert_ne!(a.signing_key, b.signing_key);
        assert_ne!(a.signing_key, [0u8; 32]);
    }

    #[test]
    fn test_cookie_config() {
        let cookie = CsrfConfig::development().cookie_config();
        let header = cookie.build_set_cookie("abc");
        assert!(header.starts_with("_csrf=abc"));
        assert!(header.contains("HttpOnly"));
        assert!(header.contains("SameSite=Lax"));
        assert!(header.contains("Path=/"));
        assert!(!header.contains("Secure"));
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::{CsrfError, INVALID_CSRF_TOKEN};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_all_variants_forbidden_with_same_message() {
        for err in [
            CsrfError::MissingSecret,
            CsrfError::MissingToken,
            CsrfError::InvalidToken,
        ] {
            assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
            assert_eq!(err.to_app_error().message(), INVALID_CSRF_TOKEN);
        }
    }

    #[tokio::test]
    async fn test_error_body() {
        let response = CsrfError::InvalidToken.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "Invalid CSRF token." }));
    }
}

#[cfg(test)]
mod http_tests {
    use crate::{CsrfAppState, CsrfConfig, csrf_router, with_csrf_protection};
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::routing::post;
    use tower::ServiceExt;

    fn app() -> Router {
        let state = CsrfAppState::new(CsrfConfig::development());
        let protected = Router::new().route("/echo", post(|| async { "ok" }).get(|| async { "ok" }));
        csrf_router(state.clone()).merge(with_csrf_protection(protected, state))
    }

    /// Returns (cookie pair, token)
    async fn fetch_token(app: &Router) -> (String, String) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/csrf-token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap()
            .split(';')
            .next()
            .unwrap()
            .to_string();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let token = json["csrfToken"].as_str().unwrap().to_string();

        (cookie, token)
    }

    async fn post_echo(app: &Router, headers: &[(&str, &str)]) -> StatusCode {
        let mut builder = Request::builder().method("POST").uri("/echo");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        app.clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_token_endpoint_sets_cookie() {
        let app = app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/csrf-token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "no-store"
        );
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(cookie.starts_with("_csrf="));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
    }

    #[tokio::test]
    async fn test_token_endpoint_keeps_existing_cookie() {
        let app = app();
        let (cookie, _) = fetch_token(&app).await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/csrf-token")
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn test_post_without_token_forbidden() {
        let app = app();
        assert_eq!(post_echo(&app, &[]).await, StatusCode::FORBIDDEN);

        let (cookie, _) = fetch_token(&app).await;
        assert_eq!(
            post_echo(&app, &[("cookie", &cookie)]).await,
            StatusCode::FORBIDDEN
        );
    }

    #[tokio::test]
    async fn test_post_with_token_but_no_cookie_forbidden() {
        let app = app();
        let (_, token) = fetch_token(&app).await;
        assert_eq!(
            post_echo(&app, &[("x-csrf-token", &token)]).await,
            StatusCode::FORBIDDEN
        );
    }

    #[tokio::test]
    async fn test_post_with_valid_pair_allowed_repeatedly() {
        let app = app();
        let (cookie, token) = fetch_token(&app).await;
        let headers = [("cookie", cookie.as_str()), ("x-csrf-token", token.as_str())];

        assert_eq!(post_echo(&app, &headers).await, StatusCode::OK);
        assert_eq!(post_echo(&app, &headers).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_alternate_token_headers() {
        let app = app();
        let (cookie, token) = fetch_token(&app).await;

        for name in ["csrf-token", "x-xsrf-token", "xsrf-token"] {
            let headers = [("cookie", cookie.as_str()), (name, token.as_str())];
            assert_eq!(post_echo(&app, &headers).await, StatusCode::OK, "{name}");
        }
    }

    #[tokio::test]
    async fn test_token_from_other_client_forbidden() {
        let app = app();
        let (cookie_a, _) = fetch_token(&app).await;
        let (_, token_b) = fetch_token(&app).await;

        let headers = [("cookie", cookie_a.as_str()), ("x-csrf-token", token_b.as_str())];
        assert_eq!(post_echo(&app, &headers).await, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_safe_methods_pass_through() {
        let app = app();
        let response = app
            .oneshot(Request::builder().uri("/echo").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
