//! Error types
//!
//! Defines the error taxonomy of the credential store and the aggregate
//! error surfaced by the request adapter.

use thiserror::Error;

/// Registration failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    /// Username or password missing or empty
    #[error("Missing username or password")]
    InvalidInput,

    /// An account with this username already exists
    #[error("Username already exists: {0}")]
    DuplicateIdentifier(String),
}

/// Verification failures
///
/// Unknown usernames and wrong passwords are deliberately reported the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// General service error that encompasses all error types
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Registration error: {0}")]
    Register(#[from] RegisterError),

    #[error("Verification error: {0}")]
    Verify(#[from] VerifyError),

    /// The inbound payload could not be decoded at all
    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl ServiceError {
    /// Client-facing message for this error.
    ///
    /// Never includes the offending username or any decoder detail.
    pub fn message(&self) -> &'static str {
        match self {
            ServiceError::Register(RegisterError::InvalidInput) => "Missing username or password",
            ServiceError::Register(RegisterError::DuplicateIdentifier(_)) => {
                "Username already exists"
            }
            ServiceError::Verify(VerifyError::InvalidCredentials) => "Invalid credentials",
            ServiceError::MalformedPayload(_) => "Malformed request payload",
            ServiceError::Config(_) => "Internal server error",
        }
    }
}
