//! Error handlers
//!
//! Maps service errors onto status codes and log levels.

use crate::error::types::{RegisterError, ServiceError, VerifyError};
use crate::protocol::responses::{BAD_REQUEST, INTERNAL_ERROR, UNAUTHORIZED};
use log::{debug, error};

/// Log a service error. Expected outcomes are already logged by the store.
pub fn handle_error(err: &ServiceError) {
    match err {
        ServiceError::Config(_) => error!("Credential service error: {}", err),
        _ => debug!("Rejected request: {}", err),
    }
}

/// Convert error to response status code
pub fn error_to_status_code(err: &ServiceError) -> u16 {
    match err {
        ServiceError::Register(RegisterError::InvalidInput) => BAD_REQUEST,
        ServiceError::Register(RegisterError::DuplicateIdentifier(_)) => BAD_REQUEST,
        ServiceError::Verify(VerifyError::InvalidCredentials) => UNAUTHORIZED,
        ServiceError::MalformedPayload(_) => BAD_REQUEST,
        ServiceError::Config(_) => INTERNAL_ERROR,
    }
}
