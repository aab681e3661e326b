//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256, Base64, secure random)
//! - Password hashing (Argon2id)
//! - Cookie and client-address helpers
//! - Rate limiting infrastructure
//! - HTML sanitization of stored text
//! - Environment configuration helpers
//! - Security response headers

pub mod client;
pub mod config;
pub mod cookie;
pub mod crypto;
pub mod headers;
pub mod password;
pub mod rate_limit;
pub mod sanitize;
