//! Authentication result types
//!
//! Defines result structures returned by credential store operations.

/// Result of a successful registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationResult {
    pub username: String,
}

/// Result of a successful verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    pub username: String,
}
