//! Configuration management for the credential store
//!
//! Loaded once at startup from an optional `config.toml` with
//! `RAX_CREDSTORE__*` environment overrides.

use std::collections::HashMap;

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::auth::Account;
use crate::error::ServiceError;

const CONFIG_PATH: &str = "config";
const ENV_PREFIX: &str = "RAX_CREDSTORE";

/// Complete store configuration
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct StoreConfig {
    pub bootstrap: BootstrapConfig,
}

/// Account seeded into the store when it is created
#[derive(Deserialize, Clone)]
#[serde(default)]
pub struct BootstrapConfig {
    pub enabled: bool,
    pub username: String,
    pub password: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            username: "admin".to_string(),
            password: "password123".to_string(),
        }
    }
}

impl std::fmt::Debug for BootstrapConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootstrapConfig")
            .field("enabled", &self.enabled)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl StoreConfig {
    /// Load configuration from config.toml (if present) with environment overrides
    pub fn load() -> Result<Self, ServiceError> {
        Self::load_from(CONFIG_PATH, None)
    }

    /// Load configuration from `path` (extension optional, file optional).
    ///
    /// `env_vars` replaces the process environment as the override source when
    /// given; `None` reads the real environment.
    pub fn load_from(
        path: &str,
        env_vars: Option<HashMap<String, String>>,
    ) -> Result<Self, ServiceError> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .source(env_vars),
            )
            .build()?;

        let config: StoreConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an in-memory TOML document
    pub fn from_toml_str(toml: &str) -> Result<Self, ServiceError> {
        let settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;

        let config: StoreConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// The account to seed, if bootstrapping is enabled
    pub fn bootstrap_account(&self) -> Option<Account> {
        self.bootstrap
            .enabled
            .then(|| Account::new(&self.bootstrap.username, &self.bootstrap.password))
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if !self.bootstrap.enabled {
            return Ok(());
        }

        if self.bootstrap.username.is_empty() {
            return Err(config::ConfigError::Message(
                "bootstrap.username cannot be empty".into(),
            ));
        }

        if self.bootstrap.password.is_empty() {
            return Err(config::ConfigError::Message(
                "bootstrap.password cannot be empty".into(),
            ));
        }

        Ok(())
    }
}
