//! Legacy card-search payload codec.
//!
//! The first-generation record store kept one card per trader, its
//! description holding a JSON object keyed by platform
//! (`{"XBL": ["GamerTag"], "PSN": [...], "PC": [...]}`) with optional
//! `verified`, `blacklisted` and `karma` fields bolted on later.

use serde_json::Value;
use thiserror::Error;

use tradewarden_core::{Platform, VerificationRecord};

#[derive(Debug, Error)]
pub enum CardError {
    #[error("card description is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("card description is not a JSON object")]
    NotAnObject,
}

/// Parse a legacy card description into a verification record.
///
/// A card without explicit flags is treated as fully verified: legacy cards
/// only ever existed for traders who finished registration.
pub fn record_from_card(handle: &str, description: &str) -> Result<VerificationRecord, CardError> {
    let value: Value = serde_json::from_str(description)?;
    let object = value.as_object().ok_or(CardError::NotAnObject)?;

    let mut record = VerificationRecord::new(handle);
    for (key, platform) in [
        ("XBL", Platform::Xbox),
        ("PSN", Platform::PlayStation),
        ("PC", Platform::Pc),
    ] {
        if let Some(entry) = object.get(key) {
            record = record.with_identity(platform, first_tag(entry).as_deref());
        }
    }

    record.verification_complete = object.get("verified").and_then(Value::as_bool).unwrap_or(true);
    record.is_blacklisted = object
        .get("blacklisted")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    record.reputation = object.get("karma").and_then(Value::as_i64).unwrap_or(0);
    Ok(record)
}

fn first_tag(entry: &Value) -> Option<String> {
    match entry {
        Value::Array(tags) => tags.first().and_then(Value::as_str).map(String::from),
        Value::String(tag) => Some(tag.clone()),
        _ => None,
    }
}
