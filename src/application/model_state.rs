//! Field-level validation state supplied to handlers.
//!
//! The HTTP layer fills a `ModelState` while binding a request; handlers
//! only read it. A non-empty state means validation failed.

use std::collections::BTreeMap;

use serde::Serialize;

/// Validation errors keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ModelState {
    errors: BTreeMap<String, Vec<String>>,
}

impl ModelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error against `field`.
    pub fn add_model_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Records the standard "required" error if `value` is absent or blank.
    pub fn require(&mut self, field: &str, value: Option<&str>) {
        if value.map_or(true, |v| v.trim().is_empty()) {
            self.add_model_error(field, format!("The {} field is required.", field));
        }
    }

    /// Records the standard "required" error if `value` is absent.
    pub fn require_value<T>(&mut self, field: &str, value: Option<&T>) {
        if value.is_none() {
            self.add_model_error(field, format!("The {} field is required.", field));
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total number of errors across all fields.
    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Names of the fields that have errors, sorted.
    pub fn fields(&self) -> Vec<&str> {
        self.errors.keys().map(String::as_str).collect()
    }

    pub fn errors_for(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}
