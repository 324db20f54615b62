//! Response handling
//!
//! Defines status codes and the response body returned to the transport.

use serde::Serialize;

/// Status codes used by the adapter
pub const OK: u16 = 200;
pub const CREATED: u16 = 201;
pub const BAD_REQUEST: u16 = 400;
pub const UNAUTHORIZED: u16 = 401;
pub const NOT_FOUND: u16 = 404;
pub const INTERNAL_ERROR: u16 = 500;

/// Outcome tag carried in every response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Structured response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseBody {
    pub status: ResponseStatus,
    pub message: String,
}

/// A status code paired with its body, ready for the transport to encode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: ResponseBody,
}

impl Response {
    pub fn success(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ResponseBody {
                status: ResponseStatus::Success,
                message: message.into(),
            },
        }
    }

    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ResponseBody {
                status: ResponseStatus::Error,
                message: message.into(),
            },
        }
    }

    /// Serialize the body as JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.body)
    }
}
