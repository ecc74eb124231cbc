//! Shared types and models for the Bazaar Directory platform
//!
//! This crate contains the domain models shared across the backend, plus the
//! pure contact-visibility logic applied to outbound business records.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
