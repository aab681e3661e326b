//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the smallest shared vocabulary:
//! - The unified error type and its HTTP rendering
//! - Typed entity IDs
//!
//! **Design Principle**: Only include things that are hard to change
//! and have consistent meaning across all crates.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
