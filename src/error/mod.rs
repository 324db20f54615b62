//! Error handling
//!
//! Defines error types and handling for the credential service.

pub mod handlers;
pub mod types;

pub use types::*;
