//! Credential store
//!
//! In-memory account table shared by every request. All reads and writes go
//! through one `RwLock`; registration performs its existence check and insert
//! under a single write guard so two callers can never both claim a username.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::hint::black_box;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, info, warn};

use super::account::Account;
use super::results::{RegistrationResult, VerificationResult};
use crate::config::StoreConfig;
use crate::error::{RegisterError, VerifyError};

/// Compared against when the username is unknown, so both failure paths do a comparison.
const PLACEHOLDER_SECRET: &str = "\0rax-credstore-placeholder\0";

/// Thread-safe username -> password table
#[derive(Default)]
pub struct CredentialStore {
    accounts: RwLock<HashMap<String, String>>,
}

impl fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialStore")
            .field("accounts", &self.len())
            .finish()
    }
}

/// Required registration fields must be non-empty. No trimming is applied.
fn is_valid_input(input: &str) -> bool {
    !input.is_empty()
}

/// Plain byte equality.
// TODO: swap for a constant-time comparison once secrets are hashed at rest.
fn secrets_match(stored: &str, supplied: &str) -> bool {
    stored.as_bytes() == supplied.as_bytes()
}

impl CredentialStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with a single account.
    ///
    /// An account with an empty username or password is not inserted.
    pub fn with_bootstrap(account: Account) -> Self {
        let store = Self::new();
        if let Err(e) = store.register(&account.username, &account.password) {
            warn!("Skipping bootstrap account: {}", e);
        }
        store
    }

    /// Creates a store seeded according to the loaded configuration
    pub fn from_config(config: &StoreConfig) -> Self {
        match config.bootstrap_account() {
            Some(account) => {
                info!("Seeding bootstrap account: {}", account.username);
                Self::with_bootstrap(account)
            }
            None => {
                info!("Bootstrap account disabled, starting with an empty store");
                Self::new()
            }
        }
    }

    /// Registers a new account.
    ///
    /// Fails with `InvalidInput` if either field is empty and with
    /// `DuplicateIdentifier` if the username is taken. Existing accounts are
    /// never modified.
    pub fn register(
        &self,
        username: &str,
        password: &str,
    ) -> Result<RegistrationResult, RegisterError> {
        if !is_valid_input(username) || !is_valid_input(password) {
            debug!("Rejected registration with missing username or password");
            return Err(RegisterError::InvalidInput);
        }

        let mut accounts = self.write();
        let inserted = match accounts.entry(username.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(password.to_string());
                true
            }
        };
        let total = accounts.len();
        drop(accounts);

        if !inserted {
            warn!("Registration rejected, username already exists: {}", username);
            return Err(RegisterError::DuplicateIdentifier(username.to_string()));
        }

        info!("Registered account: {} ({} accounts)", username, total);
        Ok(RegistrationResult {
            username: username.to_string(),
        })
    }

    /// Verifies a username/password pair.
    ///
    /// Any input is accepted; empty or unknown values simply do not match.
    /// Unknown usernames and wrong passwords both yield `InvalidCredentials`.
    pub fn verify(
        &self,
        username: &str,
        password: &str,
    ) -> Result<VerificationResult, VerifyError> {
        let matched = {
            let accounts = self.read();
            match accounts.get(username) {
                Some(stored) => secrets_match(stored, password),
                None => {
                    black_box(secrets_match(PLACEHOLDER_SECRET, password));
                    false
                }
            }
        };

        if matched {
            info!("Authenticated account: {}", username);
            Ok(VerificationResult {
                username: username.to_string(),
            })
        } else {
            warn!("Failed verification attempt");
            Err(VerifyError::InvalidCredentials)
        }
    }

    /// Number of stored accounts
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Returns whether an account exists for the exact username
    pub fn contains(&self, username: &str) -> bool {
        self.read().contains_key(username)
    }

    // Every mutation is a single insert, so a poisoned map is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
        self.accounts.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
        self.accounts.write().unwrap_or_else(PoisonError::into_inner)
    }
}
