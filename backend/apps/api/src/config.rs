//! Server Configuration
//!
//! Everything the binary needs, read once from the environment.

use csrf::CsrfConfig;
use platform::config::{
    ConfigError, env_flag, env_list, env_or, env_path, env_required, env_string,
};
use platform::crypto::from_base64;
use platform::rate_limit::RateLimitConfig;
use portal::PortalConfig;
use std::path::PathBuf;

const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

/// PEM files for the HTTPS listener
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsPaths {
    pub cert: PathBuf,
    pub key: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
    pub https_port: u16,
    /// HTTPS is served only when the PEM paths are configured
    pub tls: Option<TlsPaths>,
    pub database_url: String,
    pub database_max_connections: u32,
    pub frontend_origins: Vec<String>,
    /// `None` means a random key for this process
    pub csrf_signing_key: Option<[u8; 32]>,
    pub cookie_secure: bool,
    pub password_pepper: Option<Vec<u8>>,
    pub login_rate_limit: RateLimitConfig,
    /// Believe X-Forwarded-For from the peer (reverse proxy deployments)
    pub trust_proxy: bool,
}

impl ServerConfig {
    /// Load from the process environment
    ///
    /// Outside debug builds a CSRF signing key is mandatory and cookies
    /// default to `Secure`.
    pub fn from_env(debug: bool) -> Result<Self, ConfigError> {
        let tls = match (env_path("TLS_CERT_PATH"), env_path("TLS_KEY_PATH")) {
            (Some(cert), Some(key)) => Some(TlsPaths { cert, key }),
            (Some(_), None) => return Err(ConfigError::Missing("TLS_KEY_PATH".to_string())),
            (None, Some(_)) => return Err(ConfigError::Missing("TLS_CERT_PATH".to_string())),
            (None, None) => None,
        };

        let csrf_signing_key = match env_string("CSRF_SIGNING_KEY") {
            Some(encoded) => Some(decode_signing_key(&encoded)?),
            None if debug => None,
            None => return Err(ConfigError::Missing("CSRF_SIGNING_KEY".to_string())),
        };

        let window_secs: u64 = env_or("LOGIN_RATE_LIMIT_WINDOW_SECS", 900)?;
        if window_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "LOGIN_RATE_LIMIT_WINDOW_SECS".to_string(),
                value: "0".to_string(),
            });
        }

        Ok(Self {
            http_port: env_or("PORT", 5000)?,
            https_port: env_or("HTTPS_PORT", 5001)?,
            tls,
            database_url: env_required("DATABASE_URL")?,
            database_max_connections: env_or("DATABASE_MAX_CONNECTIONS", 5)?,
            frontend_origins: env_list("FRONTEND_ORIGINS", DEFAULT_FRONTEND_ORIGINS),
            csrf_signing_key,
            cookie_secure: env_flag("COOKIE_SECURE", !debug)?,
            password_pepper: env_string("PASSWORD_PEPPER").map(String::into_bytes),
            login_rate_limit: RateLimitConfig::new(env_or("LOGIN_RATE_LIMIT_MAX", 5)?, window_secs),
            trust_proxy: env_flag("TRUST_PROXY", false)?,
        })
    }

    pub fn csrf_config(&self) -> CsrfConfig {
        let base = match self.csrf_signing_key {
            Some(signing_key) => CsrfConfig::with_signing_key(signing_key),
            None => CsrfConfig::with_random_secret(),
        };
        CsrfConfig {
            cookie_secure: self.cookie_secure,
            ..base
        }
    }

    pub fn portal_config(&self) -> PortalConfig {
        PortalConfig {
            password_pepper: self.password_pepper.clone(),
            login_rate_limit: self.login_rate_limit.clone(),
            trust_proxy: self.trust_proxy,
        }
    }
}

fn decode_signing_key(encoded: &str) -> Result<[u8; 32], ConfigError> {
    let invalid = || ConfigError::Invalid {
        key: "CSRF_SIGNING_KEY".to_string(),
        value: "<redacted>".to_string(),
    };
    let bytes = from_base64(encoded).map_err(|_| invalid())?;
    bytes.try_into().map_err(|_| invalid())
}
