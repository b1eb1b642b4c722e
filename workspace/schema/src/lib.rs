//! Schema management for the ledger store.
//!
//! This crate owns the persisted shape of the ledger: the declarative table
//! registry, foreign-key-driven creation order, idempotent initialization,
//! reference-table seeding, and validation of existing installations.

pub mod error;
pub mod manager;
pub mod seed;
pub mod tables;

pub use error::SchemaError;
pub use manager::{Finding, ValidationResult};
