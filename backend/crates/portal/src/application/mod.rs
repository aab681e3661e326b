//! Application Layer - Use Cases
//!
//! Orchestrates domain logic and infrastructure.

pub mod config;
pub mod login;
pub mod register;
