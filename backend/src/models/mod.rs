//! Database models for the Bazaar Directory backend
//!
//! Re-exports models from the shared crate and adds backend-specific models

pub use shared::models::*;
