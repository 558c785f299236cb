//! Server-side in-memory registry.
//!
//! Stands in for the external persistence collaborator. Only validated
//! requests reach this module, so every stored intensity is already within
//! range and every status is a member of the closed set. Referential rules
//! (reports need a live disaster or alert, deletes cascade) live here.

use std::collections::HashMap;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::models::{Disaster, DisasterAlert, DisasterReport};
use crate::requests::{AddDisasterReportExisting, AddDisasterReportNew, StatusFilter};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("disaster {0} not found")]
    UnknownDisaster(String),
    #[error("disaster alert {0} not found")]
    UnknownAlert(String),
}

#[derive(Debug, Default)]
pub struct Registry {
    disasters: HashMap<String, Disaster>,
    alerts: Vec<DisasterAlert>,
    reports: Vec<DisasterReport>,
}

impl Registry {
    pub fn insert_disaster(&mut self, name: &str, intensity: f64) -> Disaster {
        let disaster = Disaster {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            intensity,
        };
        self.disasters.insert(disaster.id.clone(), disaster.clone());
        disaster
    }

    pub fn disaster(&self, id: &str) -> Option<Disaster> {
        self.disasters.get(id).cloned()
    }

    pub fn update_disaster(
        &mut self,
        id: &str,
        name: &str,
        intensity: f64,
    ) -> Result<Disaster, StoreError> {
        let disaster = self
            .disasters
            .get_mut(id)
            .ok_or_else(|| StoreError::UnknownDisaster(id.to_string()))?;
        disaster.name = name.to_string();
        disaster.intensity = intensity;
        Ok(disaster.clone())
    }

    /// Removes the disaster plus every alert and report filed under it.
    pub fn delete_disaster(&mut self, id: &str) -> Result<(), StoreError> {
        if self.disasters.remove(id).is_none() {
            return Err(StoreError::UnknownDisaster(id.to_string()));
        }

        let dropped: Vec<String> = self
            .alerts
            .iter()
            .filter(|alert| alert.disaster_id == id)
            .map(|alert| alert.id.clone())
            .collect();
        self.alerts.retain(|alert| alert.disaster_id != id);
        self.reports
            .retain(|report| !dropped.contains(&report.disaster_alert_id));
        Ok(())
    }

    /// Alerts whose status is in the filter and whose location contains the
    /// query text, case-insensitively. An empty query matches everything.
    pub fn alerts_matching(&self, filter: &StatusFilter, location: &str) -> Vec<DisasterAlert> {
        let needle = location.to_lowercase();
        self.alerts
            .iter()
            .filter(|alert| filter.contains(alert.status))
            .filter(|alert| alert.location.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Opens an alert for an existing disaster and files its first report.
    pub fn file_report_new(
        &mut self,
        request: &AddDisasterReportNew,
    ) -> Result<(DisasterAlert, DisasterReport), StoreError> {
        if !self.disasters.contains_key(&request.disaster_id) {
            return Err(StoreError::UnknownDisaster(request.disaster_id.clone()));
        }

        let alert = DisasterAlert {
            id: Uuid::new_v4().to_string(),
            disaster_id: request.disaster_id.clone(),
            status: request.status,
            location: request.location.clone(),
        };
        let report = DisasterReport {
            id: Uuid::new_v4().to_string(),
            disaster_alert_id: alert.id.clone(),
            description: request.description.clone(),
            status: request.status,
            created_at: now_rfc3339(),
        };

        self.alerts.push(alert.clone());
        self.reports.push(report.clone());
        Ok((alert, report))
    }

    /// Appends a report to an existing alert. The alert adopts the report's
    /// status so the feed tracks the newest field observation.
    pub fn file_report_existing(
        &mut self,
        request: &AddDisasterReportExisting,
    ) -> Result<DisasterReport, StoreError> {
        let alert = self
            .alerts
            .iter_mut()
            .find(|alert| alert.id == request.disaster_alert_id)
            .ok_or_else(|| StoreError::UnknownAlert(request.disaster_alert_id.clone()))?;
        alert.status = request.status;

        let report = DisasterReport {
            id: Uuid::new_v4().to_string(),
            disaster_alert_id: alert.id.clone(),
            description: request.description.clone(),
            status: request.status,
            created_at: now_rfc3339(),
        };
        self.reports.push(report.clone());
        Ok(report)
    }

    pub fn reports_for(&self, alert_id: &str) -> Vec<DisasterReport> {
        self.reports
            .iter()
            .filter(|report| report.disaster_alert_id == alert_id)
            .cloned()
            .collect()
    }
}

static REGISTRY: Lazy<Mutex<Registry>> = Lazy::new(|| Mutex::new(Registry::default()));

/// Run `op` against the process-wide registry.
pub fn with_registry<T>(op: impl FnOnce(&mut Registry) -> T) -> T {
    let mut guard = REGISTRY
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    op(&mut guard)
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::DisasterStatus;

    fn report_new(disaster_id: &str, location: &str, status: DisasterStatus) -> AddDisasterReportNew {
        AddDisasterReportNew {
            disaster_id: disaster_id.to_string(),
            location: location.to_string(),
            description: "observed from the ridge".to_string(),
            status,
        }
    }

    #[test]
    fn report_new_requires_a_live_disaster() {
        let mut registry = Registry::default();
        let err = registry
            .file_report_new(&report_new("ghost", "Valley", DisasterStatus::Active))
            .unwrap_err();
        assert_eq!(err, StoreError::UnknownDisaster("ghost".to_string()));
    }

    #[test]
    fn report_existing_updates_alert_status() {
        let mut registry = Registry::default();
        let disaster = registry.insert_disaster("Flood", 70.0);
        let (alert, _) = registry
            .file_report_new(&report_new(&disaster.id, "Delta", DisasterStatus::Active))
            .unwrap();

        let follow_up = AddDisasterReportExisting {
            description: "water receding".to_string(),
            status: DisasterStatus::Resolved,
            disaster_alert_id: alert.id.clone(),
        };
        registry.file_report_existing(&follow_up).unwrap();

        let resolved = registry.alerts_matching(
            &StatusFilter::One(DisasterStatus::Resolved),
            "",
        );
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id, alert.id);
        assert_eq!(registry.reports_for(&alert.id).len(), 2);
    }

    #[test]
    fn report_existing_rejects_unknown_alert() {
        let mut registry = Registry::default();
        let err = registry
            .file_report_existing(&AddDisasterReportExisting {
                description: "nothing here".to_string(),
                status: DisasterStatus::Active,
                disaster_alert_id: "ghost".to_string(),
            })
            .unwrap_err();
        assert_eq!(err, StoreError::UnknownAlert("ghost".to_string()));
    }

    #[test]
    fn alerts_filter_by_status_set_and_location_substring() {
        let mut registry = Registry::default();
        let flood = registry.insert_disaster("Flood", 70.0);
        let fire = registry.insert_disaster("Wildfire", 85.0);
        registry
            .file_report_new(&report_new(&flood.id, "River Delta", DisasterStatus::Active))
            .unwrap();
        registry
            .file_report_new(&report_new(&fire.id, "Northern Hills", DisasterStatus::Contained))
            .unwrap();

        let active_only =
            registry.alerts_matching(&StatusFilter::One(DisasterStatus::Active), "");
        assert_eq!(active_only.len(), 1);
        assert_eq!(active_only[0].disaster_id, flood.id);

        let both = registry.alerts_matching(
            &StatusFilter::Many(vec![DisasterStatus::Active, DisasterStatus::Contained]),
            "",
        );
        assert_eq!(both.len(), 2);

        let by_location =
            registry.alerts_matching(&StatusFilter::Many(DisasterStatus::ALL.to_vec()), "delta");
        assert_eq!(by_location.len(), 1);
        assert_eq!(by_location[0].location, "River Delta");
    }

    #[test]
    fn delete_disaster_cascades_to_alerts_and_reports() {
        let mut registry = Registry::default();
        let disaster = registry.insert_disaster("Quake", 90.0);
        let (alert, _) = registry
            .file_report_new(&report_new(&disaster.id, "Old town", DisasterStatus::Active))
            .unwrap();

        registry.delete_disaster(&disaster.id).unwrap();

        assert_eq!(registry.disaster(&disaster.id), None);
        assert!(registry
            .alerts_matching(&StatusFilter::Many(DisasterStatus::ALL.to_vec()), "")
            .is_empty());
        assert!(registry.reports_for(&alert.id).is_empty());
    }

    #[test]
    fn update_replaces_name_and_intensity() {
        let mut registry = Registry::default();
        let disaster = registry.insert_disaster("Mudslide", 40.0);
        let updated = registry.update_disaster(&disaster.id, "ML", 55.0).unwrap();
        assert_eq!(updated.name, "ML");
        assert_eq!(updated.intensity, 55.0);
        assert_eq!(registry.disaster(&disaster.id), Some(updated));
    }
}
