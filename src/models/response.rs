use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{ErrorDetails, SdkError, SdkResult};

/// Outcome the API stored for a request sent with an idempotency key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IdempotencyResponse {
    /// HTTP status of the original call
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub status_code: Option<String>,

    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub content_length: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(rename = "RequestURL", default, skip_serializing_if = "Option::is_none")]
    pub request_url: Option<String>,

    /// Body of the original response: the resource, or an error payload
    #[serde(default)]
    pub resource: Value,
}

impl IdempotencyResponse {
    pub fn status(&self) -> Option<u16> {
        self.status_code.as_deref().and_then(|s| s.trim().parse().ok())
    }

    pub fn is_success(&self) -> bool {
        self.status().is_some_and(|s| (200..300).contains(&s))
    }

    /// Decodes the stored resource into the type of the original call
    pub fn resource_as<T: DeserializeOwned>(&self) -> SdkResult<T> {
        serde_json::from_value(self.resource.clone()).map_err(|e| SdkError::Decode {
            operation: "idempotency_response".into(),
            body: self.resource.to_string(),
            source: e,
        })
    }

    /// Error payload, when the original call failed
    pub fn error(&self) -> Option<ErrorDetails> {
        if self.is_success() || self.resource.is_null() {
            return None;
        }
        serde_json::from_value(self.resource.clone()).ok()
    }
}

/// Accepts `"200"` as well as `200`
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}
