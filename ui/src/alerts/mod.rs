mod list;
pub use list::AlertsList;

use api::models::DisasterAlert;

/// Shared state for the alerts view: the fetched feed or a load error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertsState {
    pub alerts: Vec<DisasterAlert>,
    pub error: Option<String>,
}

impl AlertsState {
    pub fn loaded(alerts: Vec<DisasterAlert>) -> Self {
        Self {
            alerts,
            error: None,
        }
    }

    pub fn failed(err: impl std::fmt::Display) -> Self {
        Self {
            alerts: Vec::new(),
            error: Some(format!("Couldn't load alerts: {err}")),
        }
    }
}
