//! Application Configuration

use platform::rate_limit::RateLimitConfig;

/// Portal application configuration
#[derive(Debug, Clone, Default)]
pub struct PortalConfig {
    /// Application-wide secret appended before hashing
    pub password_pepper: Option<Vec<u8>>,
    /// Login attempts per client and window
    pub login_rate_limit: RateLimitConfig,
    /// Key the login limiter on the first X-Forwarded-For entry
    pub trust_proxy: bool,
}

impl PortalConfig {
    /// Owned pepper for the blocking-pool hash tasks
    pub fn pepper(&self) -> Option<Vec<u8>> {
        self.password_pepper.clone()
    }
}
