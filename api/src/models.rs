//! Wire records shared between the client and the server store.

use serde::{Deserialize, Serialize};

use crate::status::DisasterStatus;

/// A named hazard record with an intensity score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Disaster {
    /// Opaque identifier (UUID v4 at creation).
    pub id: String,
    /// Display name. Minimum length 3 at creation time.
    pub name: String,
    /// Severity score, always within 0–100.
    pub intensity: f64,
}

/// A status-and-location-tagged notice tied to a disaster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisasterAlert {
    pub id: String,
    /// The disaster this alert belongs to.
    pub disaster_id: String,
    /// Tracks the status of the newest report filed against the alert.
    pub status: DisasterStatus,
    /// Free-text location (e.g. "River delta, north bank").
    pub location: String,
}

/// A field observation filed against an alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisasterReport {
    pub id: String,
    /// The alert this report was filed under.
    pub disaster_alert_id: String,
    pub description: String,
    pub status: DisasterStatus,
    /// RFC 3339 creation timestamp (UTC).
    pub created_at: String,
}
