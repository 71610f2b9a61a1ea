//! Form field map and submission state.
//!
//! Every screen owns a [`FormFields`] map and a [`SubmitState`]. Field edits
//! are pure overwrites; validation happens only at submit time, and a failed
//! validation must never reach the network.

use std::collections::BTreeMap;

use crate::error::{AgriError, Result};

/// Mutable field map owned by one screen's controller.
///
/// Values are kept as the raw strings the user typed; numeric coercion is
/// applied when the request body is built, not on edit.
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    values: BTreeMap<String, String>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites one entry. Pure and synchronous, no validation.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Clears every field, returning the form to its initial state.
    pub fn reset(&mut self) {
        self.values.clear();
    }

    /// Verifies that every named field is present and non-empty.
    ///
    /// Returns the fixed missing-fields validation error otherwise.
    pub fn require_all(&self, names: &[&str]) -> Result<()> {
        for name in names {
            match self.values.get(*name) {
                Some(value) if !value.trim().is_empty() => {}
                _ => return Err(AgriError::missing_fields()),
            }
        }
        Ok(())
    }

    /// Reads a field the backend contract requires as a number.
    pub fn numeric(&self, name: &str) -> Result<f64> {
        let raw = self.text(name)?;
        raw.trim()
            .parse::<f64>()
            .map_err(|_| AgriError::validation(format!("Field '{}' must be a number.", name)))
    }

    /// Reads a field the backend contract requires as an integer.
    pub fn integer(&self, name: &str) -> Result<i64> {
        let raw = self.text(name)?;
        raw.trim()
            .parse::<i64>()
            .map_err(|_| AgriError::validation(format!("Field '{}' must be an integer.", name)))
    }

    /// Reads a field as text, failing with the missing-fields error when the
    /// field is absent or blank.
    pub fn text(&self, name: &str) -> Result<String> {
        match self.values.get(name) {
            Some(value) if !value.trim().is_empty() => Ok(value.clone()),
            _ => Err(AgriError::missing_fields()),
        }
    }

    /// Snapshot of all fields, for screens that send the form as-is.
    pub fn as_map(&self) -> BTreeMap<String, String> {
        self.values.clone()
    }
}

/// Tri-state result slot of a screen.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitState<T> {
    Idle,
    Success(T),
    Error(String),
}

impl<T> SubmitState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

impl<T> Default for SubmitState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

/// Opaque handle identifying one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitToken(u64);

/// Request-generation counter enforcing "at most one outstanding request
/// publishes a result" per controller.
///
/// Each submit begins a new generation; a completion whose token is no
/// longer current is discarded, so a response racing a newer submit (or a
/// discarded screen) becomes a no-op.
#[derive(Debug, Clone, Default)]
pub struct SubmitGuard {
    current: u64,
}

impl SubmitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new generation, invalidating any outstanding token.
    pub fn begin(&mut self) -> SubmitToken {
        self.current += 1;
        SubmitToken(self.current)
    }

    /// Whether a completion holding this token may publish its result.
    pub fn is_current(&self, token: SubmitToken) -> bool {
        self.current == token.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MISSING_FIELDS_MESSAGE;

    #[test]
    fn require_all_accepts_filled_fields() {
        let mut fields = FormFields::new();
        fields.set("userId", "u1");
        fields.set("password", "hunter2");
        assert!(fields.require_all(&["userId", "password"]).is_ok());
    }

    #[test]
    fn require_all_rejects_empty_field() {
        let mut fields = FormFields::new();
        fields.set("userId", "u1");
        fields.set("password", "   ");
        let err = fields.require_all(&["userId", "password"]).unwrap_err();
        assert_eq!(err.user_message(), MISSING_FIELDS_MESSAGE);
    }

    #[test]
    fn require_all_rejects_absent_field() {
        let fields = FormFields::new();
        assert!(fields.require_all(&["userId"]).is_err());
    }

    #[test]
    fn numeric_coercion() {
        let mut fields = FormFields::new();
        fields.set("avg_temp", " 23.5 ");
        assert_eq!(fields.numeric("avg_temp").unwrap(), 23.5);

        fields.set("avg_temp", "warm");
        assert!(fields.numeric("avg_temp").unwrap_err().is_validation());
    }

    #[test]
    fn stale_token_is_discarded() {
        let mut guard = SubmitGuard::new();
        let first = guard.begin();
        let second = guard.begin();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }
}
