//! Server functions for the seven disaster operations.
//!
//! Every operation takes the untyped request body, runs the matching parser
//! from [`crate::requests`], and only touches the registry once validation
//! has fully passed. Rejected bodies come back as a serialized
//! [`ValidationError`] payload; nothing is written on failure.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{Disaster, DisasterAlert, DisasterReport};
use crate::requests::{
    AddDisaster, AddDisasterReportExisting, AddDisasterReportNew, DeleteDisaster,
    GetAllDisasterAlerts, GetDisaster, UpdateDisaster,
};

#[cfg(feature = "server")]
use crate::error::ValidationError;
#[cfg(feature = "server")]
use crate::store;

/// Outcome of filing a report against a new disaster: the freshly opened
/// alert plus its first report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportFiled {
    pub alert: DisasterAlert,
    pub report: DisasterReport,
}

#[cfg(feature = "server")]
fn reject(err: ValidationError) -> ServerFnError {
    tracing::warn!(fields = ?err.fields().collect::<Vec<_>>(), "request rejected");
    ServerFnError::ServerError(err.to_server_message())
}

#[server(AddDisasterEndpoint)]
pub async fn add_disaster(input: Value) -> Result<Disaster, ServerFnError> {
    let request = AddDisaster::parse(&input).map_err(reject)?;
    let disaster =
        store::with_registry(|registry| registry.insert_disaster(&request.name, request.intensity));
    tracing::info!(id = %disaster.id, intensity = disaster.intensity, "disaster created");
    Ok(disaster)
}

#[server(GetDisasterEndpoint)]
pub async fn get_disaster(input: Value) -> Result<Disaster, ServerFnError> {
    let request = GetDisaster::parse(&input).map_err(reject)?;
    store::with_registry(|registry| registry.disaster(&request.id))
        .ok_or_else(|| ServerFnError::ServerError(format!("disaster {} not found", request.id)))
}

#[server(UpdateDisasterEndpoint)]
pub async fn update_disaster(input: Value) -> Result<Disaster, ServerFnError> {
    let request = UpdateDisaster::parse(&input).map_err(reject)?;
    let updated = store::with_registry(|registry| {
        registry.update_disaster(&request.id, &request.name, request.intensity)
    })
    .map_err(|err| ServerFnError::<server_fn::error::NoCustomError>::ServerError(err.to_string()))?;
    tracing::info!(id = %updated.id, "disaster updated");
    Ok(updated)
}

#[server(DeleteDisasterEndpoint)]
pub async fn delete_disaster(input: Value) -> Result<String, ServerFnError> {
    let request = DeleteDisaster::parse(&input).map_err(reject)?;
    store::with_registry(|registry| registry.delete_disaster(&request.id))
        .map_err(|err| ServerFnError::<server_fn::error::NoCustomError>::ServerError(err.to_string()))?;
    tracing::info!(id = %request.id, "disaster deleted");
    Ok(request.id)
}

#[server(GetAllDisasterAlertsEndpoint)]
pub async fn get_all_disaster_alerts(input: Value) -> Result<Vec<DisasterAlert>, ServerFnError> {
    let request = GetAllDisasterAlerts::parse(&input).map_err(reject)?;
    let alerts = store::with_registry(|registry| {
        registry.alerts_matching(&request.status, &request.location)
    });
    Ok(alerts)
}

#[server(AddDisasterReportNewEndpoint)]
pub async fn add_disaster_report_new(input: Value) -> Result<ReportFiled, ServerFnError> {
    let request = AddDisasterReportNew::parse(&input).map_err(reject)?;
    let (alert, report) = store::with_registry(|registry| registry.file_report_new(&request))
        .map_err(|err| ServerFnError::<server_fn::error::NoCustomError>::ServerError(err.to_string()))?;
    tracing::info!(alert = %alert.id, status = %alert.status, "alert opened");
    Ok(ReportFiled { alert, report })
}

#[server(AddDisasterReportExistingEndpoint)]
pub async fn add_disaster_report_existing(input: Value) -> Result<DisasterReport, ServerFnError> {
    let request = AddDisasterReportExisting::parse(&input).map_err(reject)?;
    let report = store::with_registry(|registry| registry.file_report_existing(&request))
        .map_err(|err| ServerFnError::<server_fn::error::NoCustomError>::ServerError(err.to_string()))?;
    tracing::info!(alert = %report.disaster_alert_id, "report filed");
    Ok(report)
}
