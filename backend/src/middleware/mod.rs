//! HTTP middleware for the Bazaar Directory backend

pub mod auth;

pub use auth::{auth_middleware, AuthUser, CurrentUser, OptionalViewer};
