//! Request handlers for the credential service.
//!
//! Bridges a transport (HTTP or otherwise) and the credential store: decodes
//! the payload, invokes the store and maps the outcome onto a `Response`.

use std::sync::Arc;

use log::info;

use crate::auth::CredentialStore;
use crate::error::ServiceError;
use crate::error::handlers::{error_to_status_code, handle_error};
use crate::protocol::commands::Command;
use crate::protocol::parser::parse_payload;
use crate::protocol::responses::{CREATED, NOT_FOUND, OK, Response};

/// Adapter the transport layer calls into. Holds the injected store.
#[derive(Debug, Clone)]
pub struct RequestHandler {
    store: Arc<CredentialStore>,
}

impl RequestHandler {
    pub fn new(store: Arc<CredentialStore>) -> Self {
        Self { store }
    }

    /// The store this handler serves
    pub fn store(&self) -> &Arc<CredentialStore> {
        &self.store
    }

    /// Dispatches a command to its handler.
    ///
    /// # Arguments
    ///
    /// * `command` - Operation resolved by `parse_command`.
    /// * `payload` - Raw request body.
    pub fn handle(&self, command: Command, payload: &[u8]) -> Response {
        match command {
            Command::Signup => self.handle_signup(payload),
            Command::Login => self.handle_login(payload),
            Command::Unknown => Response::error(NOT_FOUND, "Unknown operation"),
        }
    }

    /// Registers the account described by the payload.
    ///
    /// Absent fields are read as empty, which the store rejects as invalid input.
    pub fn handle_signup(&self, payload: &[u8]) -> Response {
        let result = parse_payload(payload).and_then(|credentials| {
            self.store
                .register(credentials.username(), credentials.password())
                .map_err(ServiceError::from)
        });

        match result {
            Ok(created) => {
                info!("Signup succeeded for {}", created.username);
                Response::success(CREATED, "User created successfully")
            }
            Err(e) => error_response(&e),
        }
    }

    /// Verifies the credentials described by the payload.
    ///
    /// Absent fields never match a stored account.
    pub fn handle_login(&self, payload: &[u8]) -> Response {
        let result = parse_payload(payload).and_then(|credentials| {
            self.store
                .verify(credentials.username(), credentials.password())
                .map_err(ServiceError::from)
        });

        match result {
            Ok(_) => Response::success(OK, "Login successful"),
            Err(e) => error_response(&e),
        }
    }
}

fn error_response(err: &ServiceError) -> Response {
    handle_error(err);
    Response::error(error_to_status_code(err), err.message())
}
