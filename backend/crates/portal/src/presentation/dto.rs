//! API DTOs (Data Transfer Objects)
//!
//! Absent fields deserialize as empty strings so that they fail field
//! validation with the field's own message.

use serde::{Deserialize, Serialize};

/// Register request
#[derive(Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub id_number: String,
    pub account_number: String,
    pub password: String,
}

/// Login request
#[derive(Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoginRequest {
    pub account_number: String,
    pub password: String,
}

/// Body of every portal response
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub const REGISTERED: Self = Self {
        message: "User registered successfully.",
    };
    pub const LOGGED_IN: Self = Self {
        message: "Login successful.",
    };
}
