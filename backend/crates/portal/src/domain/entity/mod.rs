//! Domain Entities

pub mod customer;
