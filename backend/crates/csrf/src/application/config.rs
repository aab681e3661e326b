//! Application Configuration
//!
//! Configuration for the CSRF application layer.

use platform::cookie::CookieConfig;
use platform::crypto::random_bytes;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// CSRF application configuration
#[derive(Debug, Clone)]
pub struct CsrfConfig {
    /// Cookie holding the per-client secret
    pub cookie_name: String,
    /// Secret length in bytes (before base64)
    pub secret_bytes_len: usize,
    /// Per-token salt length in bytes (before base64)
    pub salt_bytes_len: usize,
    /// Server key for token MACs (32 bytes)
    pub signing_key: [u8; 32],
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
}

impl Default for CsrfConfig {
    /// Secure defaults with a random signing key for this process
    fn default() -> Self {
        Self::with_signing_key(random_signing_key())
    }
}

fn random_signing_key() -> [u8; 32] {
    let mut signing_key = [0u8; 32];
    signing_key.copy_from_slice(&random_bytes(32));
    signing_key
}

impl CsrfConfig {
    /// Create config with a fixed server key (tokens survive restarts)
    pub fn with_signing_key(signing_key: [u8; 32]) -> Self {
        Self {
            cookie_name: "_csrf".to_string(),
            secret_bytes_len: 18,
            salt_bytes_len: 8,
            signing_key,
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
        }
    }

    /// Create config with a random signing key
    pub fn with_random_secret() -> Self {
        Self::with_signing_key(random_signing_key())
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Cookie attributes for the secret cookie (session lifetime)
    pub fn cookie_config(&self) -> CookieConfig {
        CookieConfig {
            name: self.cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
        }
    }
}
