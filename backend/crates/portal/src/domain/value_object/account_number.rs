//! Account Number Value Object
//!
//! Login lookup key. Not unique: several customers may share one.

use super::matches_pattern;
use crate::error::{PortalError, PortalResult};
use std::fmt;

const ACCOUNT_NUMBER_PATTERN: &str = r"^\d{10,12}$";

/// Bank account number: 10 to 12 ASCII digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountNumber(String);

impl AccountNumber {
    pub fn new(raw: &str) -> PortalResult<Self> {
        if matches_pattern(ACCOUNT_NUMBER_PATTERN, raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(PortalError::InvalidAccountNumber)
        }
    }

    pub fn sanitized(self) -> Self {
        Self(platform::sanitize::sanitize_text(&self.0))
    }

    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
