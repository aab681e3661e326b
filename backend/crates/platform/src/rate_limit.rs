//! Rate Limiting Infrastructure
//!
//! Fixed-window counters keyed by an arbitrary client key. A window starts
//! on the first hit for a key and resets only when it expires.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use thiserror::Error;
use tokio::time::Instant;

/// Rate limit configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests allowed in the window
    pub max_requests: u32,
    /// Time window duration
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 5,
            window: Duration::from_secs(15 * 60),
        }
    }
}

impl RateLimitConfig {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window: Duration::from_secs(window_secs),
        }
    }
}

/// Rate limit check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitResult {
    pub allowed: bool,
    pub limit: u32,
    pub remaining: u32,
    /// Time until the current window ends
    pub reset_after: Duration,
}

#[derive(Debug, Error)]
pub enum RateLimitError {
    #[error("Rate limit store unavailable: {0}")]
    StoreUnavailable(String),
}

/// Trait for rate limit storage backends
#[trait_variant::make(RateLimitStore: Send)]
pub trait LocalRateLimitStore {
    /// Count one hit for `key` and report whether it is within the limit
    async fn check_and_increment(
        &self,
        key: &str,
        config: &RateLimitConfig,
    ) -> Result<RateLimitResult, RateLimitError>;
}

#[derive(Debug, Clone, Copy)]
struct Window {
    count: u32,
    started_at: Instant,
}

/// Process-local store
///
/// Counters live behind one mutex, so concurrent hits from the same client
/// are counted exactly once each.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRateLimitStore {
    windows: Arc<Mutex<HashMap<String, Window>>>,
}

impl InMemoryRateLimitStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop windows older than `window`. Returns how many were removed.
    pub fn purge_expired(&self, window: Duration) -> Result<usize, RateLimitError> {
        let now = Instant::now();
        let mut windows = self
            .windows
            .lock()
            .map_err(|e| RateLimitError::StoreUnavailable(e.to_string()))?;

        let before = windows.len();
        windows.retain(|_, w| now.duration_since(w.started_at) < window);
        Ok(before - windows.len())
    }

    /// Number of tracked keys
    pub fn len(&self) -> usize {
        self.windows.lock().map(|w| w.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RateLimitStore for InMemoryRateLimitStore {
    async fn check_and_increment(
        &self,
        key: &str,
        config: &RateLimitConfig,
    ) -> Result<RateLimitResult, RateLimitError> {
        let now = Instant::now();
        let mut windows = self
            .windows
            .lock()
            .map_err(|e| RateLimitError::StoreUnavailable(e.to_string()))?;

        let window = windows.entry(key.to_string()).or_insert(Window {
            count: 0,
            started_at: now,
        });

        if now.duration_since(window.started_at) >= config.window {
            *window = Window {
                count: 0,
                started_at: now,
            };
        }

        window.count = window.count.saturating_add(1);

        Ok(RateLimitResult {
            allowed: window.count <= config.max_requests,
            limit: config.max_requests,
            remaining: config.max_requests.saturating_sub(window.count),
            reset_after: config
                .window
                .saturating_sub(now.duration_since(window.started_at)),
        })
    }
}
