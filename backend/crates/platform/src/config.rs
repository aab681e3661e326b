//! Environment Configuration Helpers
//!
//! Thin typed accessors over process environment variables. Values are read
//! once at startup; `.env` loading is left to the binary.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(String),

    #[error("{key} has an invalid value: {value:?}")]
    Invalid { key: String, value: String },
}

/// Non-empty value of `key`, trimmed
pub fn env_string(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Value of `key`, or an error naming the variable
pub fn env_required(key: &str) -> Result<String, ConfigError> {
    env_string(key).ok_or_else(|| ConfigError::Missing(key.to_string()))
}

/// Parsed value of `key`, or `default` when unset
pub fn env_or<T: FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    match env_string(key) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
            key: key.to_string(),
            value,
        }),
    }
}

/// Boolean flag accepting `true/false`, `1/0`, `yes/no`, `on/off`
pub fn env_flag(key: &str, default: bool) -> Result<bool, ConfigError> {
    let Some(value) = env_string(key) else {
        return Ok(default);
    };
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key: key.to_string(),
            value,
        }),
    }
}

pub fn env_path(key: &str) -> Option<PathBuf> {
    env_string(key).map(PathBuf::from)
}

/// Comma-separated list; empty entries are skipped
pub fn env_list(key: &str, default: &str) -> Vec<String> {
    env_string(key)
        .unwrap_or_else(|| default.to_string())
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_string_trims_and_skips_empty() {
        temp_env::with_vars(
            [("PLATFORM_TEST_A", Some("  value ")), ("PLATFORM_TEST_B", Some("   "))],
            || {
                assert_eq!(env_string("PLATFORM_TEST_A"), Some("value".to_string()));
                assert_eq!(env_string("PLATFORM_TEST_B"), None);
            },
        );
    }

    #[test]
    fn test_env_required() {
        temp_env::with_var_unset("PLATFORM_TEST_REQUIRED", || {
            assert_eq!(
                env_required("PLATFORM_TEST_REQUIRED"),
                Err(ConfigError::Missing("PLATFORM_TEST_REQUIRED".to_string()))
            );
        });
    }

    #[test]
    fn test_env_or() {
        temp_env::with_var("PLATFORM_TEST_PORT", Some("8443"), || {
            assert_eq!(env_or("PLATFORM_TEST_PORT", 5000u16), Ok(8443));
        });
        temp_env::with_var_unset("PLATFORM_TEST_PORT", || {
            assert_eq!(env_or("PLATFORM_TEST_PORT", 5000u16), Ok(5000));
        });
        temp_env::with_var("PLATFORM_TEST_PORT", Some("http"), || {
            assert!(matches!(
                env_or("PLATFORM_TEST_PORT", 5000u16),
                Err(ConfigError::Invalid { .. })
            ));
        });
    }

    #[test]
    fn test_env_flag() {
        for (raw, expected) in [("true", true), ("1", true), ("OFF", false), ("no", false)] {
            temp_env::with_var("PLATFORM_TEST_FLAG", Some(raw), || {
                assert_eq!(env_flag("PLATFORM_TEST_FLAG", !expected), Ok(expected));
            });
        }
        temp_env::with_var("PLATFORM_TEST_FLAG", Some("maybe"), || {
            assert!(env_flag("PLATFORM_TEST_FLAG", true).is_err());
        });
    }

    #[test]
    fn test_env_list() {
        temp_env::with_var(
            "PLATFORM_TEST_LIST",
            Some("http://a.test, ,http://b.test"),
            || {
                assert_eq!(
                    env_list("PLATFORM_TEST_LIST", ""),
                    vec!["http://a.test".to_string(), "http://b.test".to_string()]
                );
            },
        );
        temp_env::with_var_unset("PLATFORM_TEST_LIST", || {
            assert_eq!(env_list("PLATFORM_TEST_LIST", "x"), vec!["x".to_string()]);
        });
    }

    #[test]
    fn test_env_path() {
        temp_env::with_var("PLATFORM_TEST_PATH", Some("/etc/tls/cert.pem"), || {
            assert_eq!(
                env_path("PLATFORM_TEST_PATH"),
                Some(PathBuf::from("/etc/tls/cert.pem"))
            );
        });
    }
}
