//! The seven validated request shapes.
//!
//! Each shape takes an untyped record (a parsed JSON body) and yields either
//! the typed request or a [`ValidationError`] listing every violated rule.
//! These are the input contract for the operations in [`crate::ops`]; the
//! same parsers run in the browser before submission and on the server
//! before anything reaches the store.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::status::DisasterStatus;
use crate::validate::FieldCheck;

pub(crate) const MSG_NAME_MIN: &str = "Name must be at least 3 characters";
pub(crate) const MSG_INTENSITY_RANGE: &str = "Intensity must be between 0 and 100";

fn intensity_in_range(intensity: f64) -> bool {
    (0.0..=100.0).contains(&intensity)
}

/// Create a disaster record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddDisaster {
    pub name: String,
    pub intensity: f64,
}

impl AddDisaster {
    pub fn parse(input: &Value) -> Result<Self, ValidationError> {
        let mut check = FieldCheck::new(input);

        let name = check.text("name");
        if let Some(name) = &name {
            check.rule("name", name.chars().count() >= 3, MSG_NAME_MIN);
        }

        let intensity = check.number("intensity");
        if let Some(intensity) = intensity {
            check.rule("intensity", intensity_in_range(intensity), MSG_INTENSITY_RANGE);
        }

        match (name, intensity) {
            (Some(name), Some(intensity)) if check.is_clean() => Ok(Self { name, intensity }),
            _ => Err(check.into_error()),
        }
    }
}

/// Fetch a disaster by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetDisaster {
    pub id: String,
}

impl GetDisaster {
    pub fn parse(input: &Value) -> Result<Self, ValidationError> {
        let mut check = FieldCheck::new(input);
        match check.text("id") {
            Some(id) if check.is_clean() => Ok(Self { id }),
            _ => Err(check.into_error()),
        }
    }
}

/// Full replace of a disaster's name and intensity.
///
/// Unlike [`AddDisaster`] the name carries no minimum-length rule; updates
/// may shorten a name that creation would have rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateDisaster {
    pub id: String,
    pub name: String,
    pub intensity: f64,
}

impl UpdateDisaster {
    pub fn parse(input: &Value) -> Result<Self, ValidationError> {
        let mut check = FieldCheck::new(input);

        let id = check.text("id");
        let name = check.text("name");

        let intensity = check.number("intensity");
        if let Some(intensity) = intensity {
            check.rule("intensity", intensity_in_range(intensity), MSG_INTENSITY_RANGE);
        }

        match (id, name, intensity) {
            (Some(id), Some(name), Some(intensity)) if check.is_clean() => Ok(Self {
                id,
                name,
                intensity,
            }),
            _ => Err(check.into_error()),
        }
    }
}

/// Remove a disaster by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteDisaster {
    pub id: String,
}

impl DeleteDisaster {
    pub fn parse(input: &Value) -> Result<Self, ValidationError> {
        let mut check = FieldCheck::new(input);
        match check.text("id") {
            Some(id) if check.is_clean() => Ok(Self { id }),
            _ => Err(check.into_error()),
        }
    }
}

/// Status filter for the alerts query: one member or a set of members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatusFilter {
    One(DisasterStatus),
    Many(Vec<DisasterStatus>),
}

impl StatusFilter {
    pub fn contains(&self, status: DisasterStatus) -> bool {
        match self {
            Self::One(member) => *member == status,
            Self::Many(members) => members.contains(&status),
        }
    }

    pub fn members(&self) -> &[DisasterStatus] {
        match self {
            Self::One(member) => std::slice::from_ref(member),
            Self::Many(members) => members.as_slice(),
        }
    }
}

/// List disaster alerts filtered by status and location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAllDisasterAlerts {
    pub status: StatusFilter,
    pub location: String,
}

impl GetAllDisasterAlerts {
    pub fn parse(input: &Value) -> Result<Self, ValidationError> {
        let mut check = FieldCheck::new(input);

        let status = check.status_filter("status");
        let location = check.text("location");

        match (status, location) {
            (Some(status), Some(location)) if check.is_clean() => Ok(Self { status, location }),
            _ => Err(check.into_error()),
        }
    }
}

/// File a report that opens an alert for a freshly created disaster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDisasterReportNew {
    pub disaster_id: String,
    pub location: String,
    pub description: String,
    pub status: DisasterStatus,
}

impl AddDisasterReportNew {
    pub fn parse(input: &Value) -> Result<Self, ValidationError> {
        let mut check = FieldCheck::new(input);

        let disaster_id = check.text("disasterId");
        let location = check.text("location");
        let description = check.text("description");
        let status = check.status("status");

        match (disaster_id, location, description, status) {
            (Some(disaster_id), Some(location), Some(description), Some(status))
                if check.is_clean() =>
            {
                Ok(Self {
                    disaster_id,
                    location,
                    description,
                    status,
                })
            }
            _ => Err(check.into_error()),
        }
    }
}

/// File a report against an alert that already exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDisasterReportExisting {
    pub description: String,
    pub status: DisasterStatus,
    pub disaster_alert_id: String,
}

impl AddDisasterReportExisting {
    pub fn parse(input: &Value) -> Result<Self, ValidationError> {
        let mut check = FieldCheck::new(input);

        let description = check.text("description");
        let status = check.status("status");
        let disaster_alert_id = check.text("disasterAlertId");

        match (description, status, disaster_alert_id) {
            (Some(description), Some(status), Some(disaster_alert_id)) if check.is_clean() => {
                Ok(Self {
                    description,
                    status,
                    disaster_alert_id,
                })
            }
            _ => Err(check.into_error()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn add_disaster_accepts_valid_input_unchanged() {
        let parsed = AddDisaster::parse(&json!({ "name": "Flood A", "intensity": 62.5 })).unwrap();
        assert_eq!(parsed.name, "Flood A");
        assert_eq!(parsed.intensity, 62.5);
    }

    #[test]
    fn add_disaster_rejects_short_name() {
        let err = AddDisaster::parse(&json!({ "name": "ab", "intensity": 10 })).unwrap_err();
        assert_eq!(err.message_for("name"), Some(MSG_NAME_MIN));
        assert_eq!(err.message_for("intensity"), None);
    }

    #[test]
    fn add_disaster_rejects_out_of_range_intensity() {
        for intensity in [-1.0, 100.5, 101.0] {
            let err =
                AddDisaster::parse(&json!({ "name": "Quake", "intensity": intensity })).unwrap_err();
            assert_eq!(err.message_for("intensity"), Some(MSG_INTENSITY_RANGE));
        }
        for intensity in [0.0, 100.0, 55.0] {
            assert!(AddDisaster::parse(&json!({ "name": "Quake", "intensity": intensity })).is_ok());
        }
    }

    #[test]
    fn add_disaster_collects_every_failure_in_order() {
        let err = AddDisaster::parse(&json!({ "name": "ab", "intensity": 150 })).unwrap_err();
        let fields: Vec<&str> = err.fields().collect();
        assert_eq!(fields, ["name", "intensity"]);
        assert_eq!(err.message_for("intensity"), Some(MSG_INTENSITY_RANGE));
    }

    #[test]
    fn update_disaster_returns_input_fields() {
        let parsed =
            UpdateDisaster::parse(&json!({ "id": "abc", "name": "Quake", "intensity": 40 }))
                .unwrap();
        assert_eq!(parsed.id, "abc");
        assert_eq!(parsed.name, "Quake");
        assert_eq!(parsed.intensity, 40.0);
    }

    #[test]
    fn update_disaster_has_no_minimum_name_length() {
        // Creation rejects "ab"; update does not. Deliberate product
        // asymmetry, pinned here so changing it is a conscious decision.
        let parsed =
            UpdateDisaster::parse(&json!({ "id": "abc", "name": "ab", "intensity": 40 })).unwrap();
        assert_eq!(parsed.name, "ab");
    }

    #[test]
    fn update_disaster_keeps_intensity_range_rule() {
        let err = UpdateDisaster::parse(&json!({ "id": "abc", "name": "Quake", "intensity": 101 }))
            .unwrap_err();
        assert_eq!(err.message_for("intensity"), Some(MSG_INTENSITY_RANGE));
    }

    #[test]
    fn get_and_delete_require_text_id() {
        assert!(GetDisaster::parse(&json!({ "id": "d-1" })).is_ok());
        assert!(DeleteDisaster::parse(&json!({ "id": "d-1" })).is_ok());

        let err = GetDisaster::parse(&json!({})).unwrap_err();
        assert_eq!(err.message_for("id"), Some("Required"));

        let err = DeleteDisaster::parse(&json!({ "id": 7 })).unwrap_err();
        assert_eq!(err.message_for("id"), Some("Expected text"));
    }

    #[test]
    fn alerts_query_takes_single_status_or_array() {
        let single =
            GetAllDisasterAlerts::parse(&json!({ "status": "active", "location": "" })).unwrap();
        assert_eq!(single.status, StatusFilter::One(DisasterStatus::Active));

        let many = GetAllDisasterAlerts::parse(
            &json!({ "status": ["active", "resolved"], "location": "coast" }),
        )
        .unwrap();
        assert!(many.status.contains(DisasterStatus::Active));
        assert!(many.status.contains(DisasterStatus::Resolved));
        assert!(!many.status.contains(DisasterStatus::Contained));

        let err = GetAllDisasterAlerts::parse(&json!({ "status": 1, "location": "coast" }))
            .unwrap_err();
        assert_eq!(
            err.message_for("status"),
            Some("Expected a disaster status or an array of statuses")
        );
    }

    #[test]
    fn report_new_names_each_missing_field() {
        let complete = json!({
            "disasterId": "d-1",
            "location": "River delta",
            "description": "Water rising fast",
            "status": "active",
        });
        assert!(AddDisasterReportNew::parse(&complete).is_ok());

        for field in ["disasterId", "location", "description", "status"] {
            let mut partial = complete.clone();
            partial.as_object_mut().unwrap().remove(field);
            let err = AddDisasterReportNew::parse(&partial).unwrap_err();
            assert_eq!(err.message_for(field), Some("Required"), "field {field}");
        }
    }

    #[test]
    fn report_existing_requires_all_three_fields() {
        let parsed = AddDisasterReportExisting::parse(&json!({
            "description": "Flooding has receded",
            "status": "resolved",
            "disasterAlertId": "a-1",
        }))
        .unwrap();
        assert_eq!(parsed.status, DisasterStatus::Resolved);

        let err = AddDisasterReportExisting::parse(&json!({
            "description": "no alert reference",
            "status": "resolved",
        }))
        .unwrap_err();
        assert_eq!(err.message_for("disasterAlertId"), Some("Required"));
    }

    #[test]
    fn report_statuses_must_belong_to_the_closed_set() {
        let err = AddDisasterReportExisting::parse(&json!({
            "description": "odd status",
            "status": "catastrophic",
            "disasterAlertId": "a-1",
        }))
        .unwrap_err();
        assert_eq!(err.message_for("status"), Some("Unknown disaster status"));
    }

    #[test]
    fn intensity_150_reports_the_range_message() {
        let err = AddDisaster::parse(&json!({ "name": "Flood A", "intensity": 150 })).unwrap_err();
        assert_eq!(
            err.message_for("intensity"),
            Some("Intensity must be between 0 and 100")
        );
    }

    #[test]
    fn status_filter_serializes_untagged() {
        let one = serde_json::to_value(StatusFilter::One(DisasterStatus::Active)).unwrap();
        assert_eq!(one, json!("active"));

        let many = serde_json::to_value(StatusFilter::Many(vec![
            DisasterStatus::Active,
            DisasterStatus::Resolved,
        ]))
        .unwrap();
        assert_eq!(many, json!(["active", "resolved"]));
    }
}
