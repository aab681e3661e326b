//! Full Name Value Object

use super::matches_pattern;
use crate::error::{PortalError, PortalResult};
use std::fmt;

const FULL_NAME_PATTERN: &str = r"^[a-zA-Z0-9]{3,20}$";

/// Customer full name: 3 to 20 ASCII letters or digits, no spaces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName(String);

impl FullName {
    pub fn new(raw: &str) -> PortalResult<Self> {
        if matches_pattern(FULL_NAME_PATTERN, raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(PortalError::InvalidFullName)
        }
    }

    /// Escape any markup before persistence
    pub fn sanitized(self) -> Self {
        Self(platform::sanitize::sanitize_text(&self.0))
    }

    /// Restore from a stored row without re-validating
    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
