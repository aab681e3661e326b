//! Domain Layer - Customer model and persistence contract

pub mod entity;
pub mod repository;
pub mod value_object;
