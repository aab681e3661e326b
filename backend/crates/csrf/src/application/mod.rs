//! Application Layer - Use Cases

pub mod config;
pub mod issue_token;
pub mod verify_token;
