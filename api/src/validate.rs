//! Field extraction and rule evaluation over untyped input records.
//!
//! [`FieldCheck`] walks a parsed JSON body, pulling out typed fields and
//! recording a [`FieldError`] for everything that is absent, mistyped, or in
//! violation of a predicate. Rules are evaluated independently so the caller
//! gets every failure at once, in declaration order, rather than the first
//! one only. The checker is pure: no I/O, no state beyond the error list.

use serde_json::{Map, Value};

use crate::error::{FieldError, ValidationError};
use crate::status::DisasterStatus;
use crate::requests::StatusFilter;

pub(crate) const MSG_EXPECTED_TEXT: &str = "Expected text";
pub(crate) const MSG_EXPECTED_NUMBER: &str = "Expected a number";
pub(crate) const MSG_UNKNOWN_STATUS: &str = "Unknown disaster status";
pub(crate) const MSG_BAD_STATUS_FILTER: &str =
    "Expected a disaster status or an array of statuses";
pub(crate) const MSG_NOT_AN_OBJECT: &str = "Expected a JSON object";

/// Accumulating checker over one input record.
pub struct FieldCheck<'a> {
    object: Option<&'a Map<String, Value>>,
    errors: Vec<FieldError>,
}

impl<'a> FieldCheck<'a> {
    /// Begin checking `input`. A non-object input is itself a field error
    /// (on the pseudo-field `input`); every subsequent lookup then reports
    /// its own absence so callers still learn which fields they needed.
    pub fn new(input: &'a Value) -> Self {
        match input.as_object() {
            Some(object) => Self {
                object: Some(object),
                errors: Vec::new(),
            },
            None => Self {
                object: None,
                errors: vec![FieldError::new("input", MSG_NOT_AN_OBJECT)],
            },
        }
    }

    fn take(&mut self, field: &str) -> Option<&'a Value> {
        match self.object.and_then(|object| object.get(field)) {
            Some(Value::Null) | None => {
                self.errors.push(FieldError::required(field));
                None
            }
            Some(value) => Some(value),
        }
    }

    /// Required text field.
    pub fn text(&mut self, field: &str) -> Option<String> {
        let value = self.take(field)?;
        match value.as_str() {
            Some(text) => Some(text.to_string()),
            None => {
                self.errors.push(FieldError::new(field, MSG_EXPECTED_TEXT));
                None
            }
        }
    }

    /// Required numeric field.
    pub fn number(&mut self, field: &str) -> Option<f64> {
        let value = self.take(field)?;
        match value.as_f64() {
            Some(number) => Some(number),
            None => {
                self.errors.push(FieldError::new(field, MSG_EXPECTED_NUMBER));
                None
            }
        }
    }

    /// Required status field: must be a member of the closed set.
    pub fn status(&mut self, field: &str) -> Option<DisasterStatus> {
        let value = self.take(field)?;
        match value.as_str().and_then(DisasterStatus::parse) {
            Some(status) => Some(status),
            None => {
                self.errors.push(FieldError::new(field, MSG_UNKNOWN_STATUS));
                None
            }
        }
    }

    /// Required status filter: a single member or an array of members.
    /// Any other shape (numbers, objects, arrays with non-members) fails.
    pub fn status_filter(&mut self, field: &str) -> Option<StatusFilter> {
        let value = self.take(field)?;
        match value {
            Value::String(raw) => match DisasterStatus::parse(raw) {
                Some(status) => Some(StatusFilter::One(status)),
                None => {
                    self.errors.push(FieldError::new(field, MSG_UNKNOWN_STATUS));
                    None
                }
            },
            Value::Array(items) => {
                let parsed: Option<Vec<DisasterStatus>> = items
                    .iter()
                    .map(|item| item.as_str().and_then(DisasterStatus::parse))
                    .collect();
                match parsed {
                    Some(statuses) => Some(StatusFilter::Many(statuses)),
                    None => {
                        self.errors.push(FieldError::new(field, MSG_UNKNOWN_STATUS));
                        None
                    }
                }
            }
            _ => {
                self.errors
                    .push(FieldError::new(field, MSG_BAD_STATUS_FILTER));
                None
            }
        }
    }

    /// Record a rule violation on an already-extracted field unless `ok`.
    pub fn rule(&mut self, field: &str, ok: bool, message: &str) {
        if !ok {
            self.errors.push(FieldError::new(field, message));
        }
    }

    /// True when nothing failed so far.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consume the checker, yielding the accumulated failure.
    ///
    /// Only meaningful once some extraction or rule has failed; an empty
    /// error list here would mean the caller matched the wrong arm, so the
    /// invariant is kept visible rather than silently papered over.
    pub fn into_error(self) -> ValidationError {
        debug_assert!(
            !self.errors.is_empty(),
            "into_error on a clean FieldCheck"
        );
        ValidationError::new(self.errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_and_mistyped_fields_are_both_reported() {
        let input = json!({ "intensity": "very" });
        let mut check = FieldCheck::new(&input);
        let name = check.text("name");
        let intensity = check.number("intensity");

        assert_eq!(name, None);
        assert_eq!(intensity, None);

        let err = check.into_error();
        assert_eq!(err.message_for("name"), Some("Required"));
        assert_eq!(err.message_for("intensity"), Some(MSG_EXPECTED_NUMBER));
    }

    #[test]
    fn null_counts_as_absent() {
        let input = json!({ "id": null });
        let mut check = FieldCheck::new(&input);
        assert_eq!(check.text("id"), None);
        assert_eq!(check.into_error().message_for("id"), Some("Required"));
    }

    #[test]
    fn non_object_input_fails_on_the_input_field() {
        let input = json!("not a record");
        let mut check = FieldCheck::new(&input);
        assert_eq!(check.text("id"), None);

        let err = check.into_error();
        assert_eq!(err.message_for("input"), Some(MSG_NOT_AN_OBJECT));
        assert_eq!(err.message_for("id"), Some("Required"));
    }

    #[test]
    fn status_filter_accepts_member_and_member_array() {
        let single = json!({ "status": "active" });
        let mut check = FieldCheck::new(&single);
        assert_eq!(
            check.status_filter("status"),
            Some(StatusFilter::One(DisasterStatus::Active))
        );
        assert!(check.is_clean());

        let many = json!({ "status": ["active", "resolved"] });
        let mut check = FieldCheck::new(&many);
        assert_eq!(
            check.status_filter("status"),
            Some(StatusFilter::Many(vec![
                DisasterStatus::Active,
                DisasterStatus::Resolved,
            ]))
        );
        assert!(check.is_clean());
    }

    #[test]
    fn status_filter_rejects_other_shapes() {
        for input in [
            json!({ "status": 3 }),
            json!({ "status": { "not": "a status" } }),
            json!({ "status": true }),
        ] {
            let mut check = FieldCheck::new(&input);
            assert_eq!(check.status_filter("status"), None);
            assert_eq!(
                check.into_error().message_for("status"),
                Some(MSG_BAD_STATUS_FILTER)
            );
        }

        let bad_member = json!({ "status": ["active", "worse"] });
        let mut check = FieldCheck::new(&bad_member);
        assert_eq!(check.status_filter("status"), None);
        assert_eq!(
            check.into_error().message_for("status"),
            Some(MSG_UNKNOWN_STATUS)
        );
    }

    #[test]
    fn rules_keep_declaration_order() {
        let input = json!({ "name": "ab", "intensity": 101.0 });
        let mut check = FieldCheck::new(&input);
        let name = check.text("name");
        if let Some(name) = &name {
            check.rule("name", name.chars().count() >= 3, "too short");
        }
        let intensity = check.number("intensity");
        if let Some(intensity) = intensity {
            check.rule("intensity", (0.0..=100.0).contains(&intensity), "out of range");
        }

        let error = check.into_error();
        let fields: Vec<&str> = error.fields().collect();
        assert_eq!(fields, ["name", "intensity"]);
    }
}
