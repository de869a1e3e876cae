use std::collections::HashMap;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type returned by every remote call made through the SDK.
///
/// Transport failures (connect, timeout, TLS) are kept apart from
/// application failures, which carry the decoded error body sent by the API.
#[derive(Error, Debug)]
pub enum SdkError {
    /// The request never produced an HTTP response
    #[error("Transport error during {operation}")]
    Transport {
        operation: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-2xx status
    #[error("API error {status}: {}", details.message.as_deref().unwrap_or("no message"))]
    Api {
        status: StatusCode,
        details: ErrorDetails,
    },

    /// A 2xx body could not be decoded into the expected type
    #[error("Failed to decode response of {operation}")]
    Decode {
        operation: String,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// The OAuth token endpoint refused the credentials
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// The request could not be built locally
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Client configuration is unusable
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Local file access failed (settlement uploads)
    #[error("I/O error on {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl SdkError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        SdkError::InvalidRequest {
            message: message.into(),
        }
    }

    pub fn transport(operation: impl Into<String>, source: reqwest::Error) -> Self {
        SdkError::Transport {
            operation: operation.into(),
            source,
        }
    }

    /// HTTP status of an application error
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SdkError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Decoded error body of an application error
    pub fn details(&self) -> Option<&ErrorDetails> {
        match self {
            SdkError::Api { details, .. } => Some(details),
            _ => None,
        }
    }

    /// Field-level validation messages keyed by input field name
    pub fn field_errors(&self) -> Option<&HashMap<String, String>> {
        self.details().and_then(|d| d.errors.as_ref())
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, SdkError::Transport { .. })
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// True when an idempotency key was replayed while the first request is
    /// still processing or with a different payload.
    pub fn is_idempotency_conflict(&self) -> bool {
        self.status() == Some(StatusCode::CONFLICT)
    }
}

/// Error payload sent by the API on non-2xx responses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Unix timestamp, sent as a float by some endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<f64>,

    #[serde(
        rename = "errors",
        alias = "Errors",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub errors: Option<HashMap<String, String>>,
}

impl ErrorDetails {
    /// Builds details for a body that is not the documented JSON shape
    pub fn from_raw_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_else(|_| ErrorDetails {
            message: (!body.trim().is_empty()).then(|| body.trim().to_string()),
            ..Default::default()
        })
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.errors
            .as_ref()
            .and_then(|errors| errors.get(field))
            .map(String::as_str)
    }
}

/// Type alias for Result with SdkError to simplify function signatures
pub type SdkResult<T> = Result<T, SdkError>;
