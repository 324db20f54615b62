//! Request adapter
//!
//! Handles operation naming, payload decoding and response generation for
//! whichever transport fronts the credential store.

pub mod commands;
pub mod handlers;
pub mod parser;
pub mod responses;

pub use commands::{Command, parse_command};
pub use handlers::RequestHandler;
pub use parser::{CredentialPayload, parse_payload};
pub use responses::{Response, ResponseBody, ResponseStatus};
