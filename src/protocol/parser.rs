//! Payload parsing
//!
//! Decodes the JSON body carried by signup and login requests.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ServiceError;

/// Decoded credential payload. Either field may be absent.
#[derive(Deserialize)]
pub struct CredentialPayload {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl CredentialPayload {
    /// Username, with an absent field read as empty
    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or_default()
    }

    /// Password, with an absent field read as empty
    pub fn password(&self) -> &str {
        self.password.as_deref().unwrap_or_default()
    }
}

/// Parses a raw request body into a `CredentialPayload`.
///
/// The body must be a JSON object; unknown fields are ignored and `null`
/// fields count as absent. Non-string field values are a decode error.
pub fn parse_payload(body: &[u8]) -> Result<CredentialPayload, ServiceError> {
    // Decoding into a map first rejects arrays, which serde would read positionally.
    let object: Map<String, Value> = serde_json::from_slice(body)?;
    Ok(serde_json::from_value(Value::Object(object))?)
}
