//! ID Number Value Object

use super::matches_pattern;
use crate::error::{PortalError, PortalResult};

const ID_NUMBER_PATTERN: &str = r"^\d{8,12}$";

/// National ID number: 8 to 12 ASCII digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdNumber(String);

impl IdNumber {
    pub fn new(raw: &str) -> PortalResult<Self> {
        if matches_pattern(ID_NUMBER_PATTERN, raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(PortalError::InvalidIdNumber)
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
