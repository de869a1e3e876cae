use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SdkError;

pub const IDEMPOTENCY_HEADER: &str = "Idempotency-Key";

const MIN_LEN: usize = 16;
const MAX_LEN: usize = 36;

/// Client-chosen token that lets the API deduplicate a mutating request.
///
/// Replaying a create call with the same key returns the original outcome
/// instead of creating a second resource.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IdempotencyKey(String);

impl IdempotencyKey {
    pub fn new(key: impl Into<String>) -> Result<Self, SdkError> {
        let key = key.into();
        let len = key.chars().count();

        if !(MIN_LEN..=MAX_LEN).contains(&len) {
            return Err(SdkError::invalid_request(format!(
                "Idempotency key must be {}-{} characters long, got {}",
                MIN_LEN, MAX_LEN, len
            )));
        }
        if let Some(c) = key.chars().find(|c| !(c.is_ascii_alphanumeric() || *c == '-')) {
            return Err(SdkError::invalid_request(format!(
                "Idempotency key contains invalid character '{}'",
                c
            )));
        }

        Ok(Self(key))
    }

    /// Random UUID v4 key
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shortened form used in log lines
    pub(crate) fn masked(&self) -> String {
        format!("{}…", &self.0[..6])
    }
}

impl FromStr for IdempotencyKey {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for IdempotencyKey {
    type Error = SdkError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<IdempotencyKey> for String {
    fn from(key: IdempotencyKey) -> Self {
        key.0
    }
}

impl fmt::Display for IdempotencyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for IdempotencyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IdempotencyKey").field(&self.masked()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_generated_keys_are_valid_and_distinct() {
        let a = IdempotencyKey::generate();
        let b = IdempotencyKey::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 36);
        assert!(IdempotencyKey::new(a.as_str()).is_ok());
    }

    #[test]
    fn test_length_bounds() {
        assert!(IdempotencyKey::new("a".repeat(15)).is_err());
        assert!(IdempotencyKey::new("a".repeat(16)).is_ok());
        assert!(IdempotencyKey::new("a".repeat(36)).is_ok());
        assert!(IdempotencyKey::new("a".repeat(37)).is_err());
    }

    #[test]
    fn test_invalid_characters() {
        let err = IdempotencyKey::new("abcdefgh_ijklmnop").unwrap_err();
        assert!(err.to_string().contains("'_'"));
        assert!("abcdefgh ijklmnop".parse::<IdempotencyKey>().is_err());
    }

    #[test]
    fn test_debug_masks_key() {
        let key = IdempotencyKey::new("abcdef-1234567890").unwrap();
        let rendered = format!("{:?}", key);
        assert!(rendered.contains("abcdef"));
        assert!(!rendered.contains("1234567890"));
        assert_eq!(key.to_string(), "abcdef-1234567890");
    }

    #[test]
    fn test_serde_validates() {
        let key: IdempotencyKey = serde_json::from_str(r#""0123456789abcdef""#).unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), r#""0123456789abcdef""#);
        assert!(serde_json::from_str::<IdempotencyKey>(r#""short""#).is_err());
    }

    proptest! {
        #[test]
        fn prop_valid_alphabet_accepted(key in "[A-Za-z0-9-]{16,36}") {
            prop_assert!(IdempotencyKey::new(key).is_ok());
        }
    }
}
