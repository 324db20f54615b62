//! Authentication system
//!
//! Owns the account table and the register/verify operations on it.

pub mod account;
pub mod results;
pub mod store;

pub use account::Account;
pub use results::{RegistrationResult, VerificationResult};
pub use store::CredentialStore;
