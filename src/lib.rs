//! RAX Credential Store
//!
//! In-memory account registration and credential verification, with a
//! transport-independent request adapter.

pub mod auth;
pub mod config;
pub mod error;
pub mod protocol;
pub mod utils;

pub use crate::auth::{Account, CredentialStore};
pub use crate::config::StoreConfig;
pub use crate::error::{RegisterError, ServiceError, VerifyError};
pub use crate::protocol::RequestHandler;
