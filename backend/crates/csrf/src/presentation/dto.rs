//! Data Transfer Objects

use serde::Serialize;

/// Response body for GET /csrf-token
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CsrfTokenResponse {
    pub csrf_token: String,
}
