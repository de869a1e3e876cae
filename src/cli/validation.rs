//! CLI argument validation functions
//!
//! This module provides custom validation functions for CLI arguments
//! that go beyond what clap can validate automatically.

use std::fs;
use std::path::PathBuf;

use crate::models::CurrencyIso;
use crate::rest::{IdempotencyKey, MAX_PER_PAGE};

/// Validate that a file path is accessible (exists and is readable)
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    readable_file(path_str, "Configuration")
}

/// Validate that a settlement CSV file exists and is readable
pub fn validate_upload_file_path(path_str: &str) -> Result<PathBuf, String> {
    readable_file(path_str, "Upload")
}

fn readable_file(path_str: &str, what: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("{} file does not exist: '{}'", what, path_str));
    }

    if !path.is_file() {
        return Err(format!("{} path is not a file: '{}'", what, path_str));
    }

    match fs::File::open(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(format!("Cannot read {} file '{}': {}", what.to_lowercase(), path_str, e)),
    }
}

/// Validate an idempotency key (16-36 characters of `[A-Za-z0-9-]`)
pub fn validate_idempotency_key(key_str: &str) -> Result<IdempotencyKey, String> {
    IdempotencyKey::new(key_str.trim()).map_err(|e| e.to_string())
}

/// Validate an ISO 4217 currency code, case-insensitive
pub fn validate_currency(code_str: &str) -> Result<CurrencyIso, String> {
    let code = code_str.trim().to_uppercase();
    serde_json::from_value(serde_json::Value::String(code))
        .map_err(|_| format!("Unsupported currency code: '{}'", code_str))
}

/// Validate page number is at least 1
pub fn validate_page(page_str: &str) -> Result<u32, String> {
    let page: u32 = page_str
        .parse()
        .map_err(|_| format!("Page must be a positive number, got: '{}'", page_str))?;

    if page == 0 {
        return Err("Page numbers start at 1".to_string());
    }

    Ok(page)
}

/// Validate page size is within the range the API accepts
pub fn validate_per_page(per_page_str: &str) -> Result<u32, String> {
    let per_page: u32 = per_page_str
        .parse()
        .map_err(|_| format!("Per-page must be a positive number, got: '{}'", per_page_str))?;

    if per_page == 0 || per_page > MAX_PER_PAGE {
        return Err(format!(
            "Per-page must be between 1 and {}, got: {}",
            MAX_PER_PAGE, per_page
        ));
    }

    Ok(per_page)
}
