//! Structured validation failures.
//!
//! A failed request yields a [`ValidationError`]: an ordered list of
//! `(field, message)` pairs, one per violated rule. The whole input either
//! validates or nothing downstream sees it; callers decide whether to show
//! all failures or only the first. The error serializes to JSON so a server
//! rejection can be rehydrated into the same field-level display the client
//! produces locally.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One violated rule on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    /// Path of the offending field in the input record.
    pub field: String,
    /// Human-readable rule message. Part of the wire contract, not localized.
    pub message: String,
}

impl FieldError {
    pub fn new<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The field was absent from the input.
    pub fn required(field: &str) -> Self {
        Self::new(field, "Required")
    }
}

/// Ordered collection of every rule the input violated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("validation failed: {}", join_fields(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn single<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self {
            errors: vec![FieldError::new(field, message)],
        }
    }

    /// Fields that failed, in rule-declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|err| err.field.as_str())
    }

    /// First message recorded for `field`, if that field failed.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|err| err.field == field)
            .map(|err| err.message.as_str())
    }

    /// JSON payload suitable for a server-function error string.
    pub fn to_server_message(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.to_string())
    }

    /// Recover a `ValidationError` embedded in a server error string.
    ///
    /// Server-function transports wrap the payload in their own prose, so
    /// this scans for the outermost JSON object before deserializing.
    pub fn from_server_message(raw: &str) -> Option<Self> {
        let start = raw.find('{')?;
        let end = raw.rfind('}')?;
        if end < start {
            return None;
        }
        serde_json::from_str(&raw[start..=end]).ok()
    }
}

fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(FieldError::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
