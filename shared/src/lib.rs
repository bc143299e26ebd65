//! Baby Safety Shared Library
//!
//! This crate contains the API request/response types and validation
//! helpers shared between the backend and its clients.

pub mod types;
pub mod validation;

// Re-export commonly used items
pub use types::*;
