use dioxus::prelude::*;
use serde_json::json;

use api::ops;
use api::requests::GetAllDisasterAlerts;
use api::status::DisasterStatus;

use crate::alerts::{AlertsList, AlertsState};

#[component]
pub fn Alerts() -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    // "all" widens the query to every status; anything else is one member.
    let mut status_choice = use_signal(|| "all".to_string());
    let mut location_query = use_signal(String::new);

    let feed = use_resource(move || {
        let choice = status_choice();
        let location = location_query();

        async move {
            let status_value = if choice == "all" {
                json!(DisasterStatus::ALL
                    .iter()
                    .map(|status| status.as_str())
                    .collect::<Vec<_>>())
            } else {
                json!(choice)
            };
            let body = json!({ "status": status_value, "location": location });

            // Run the shared parser first so a malformed filter never leaves
            // the browser; the server repeats the same check on arrival.
            if let Err(err) = GetAllDisasterAlerts::parse(&body) {
                return Err(err.to_string());
            }
            ops::get_all_disaster_alerts(body)
                .await
                .map_err(|err| err.to_string())
        }
    });

    let snapshot = feed.read();
    let state = match snapshot.as_ref() {
        Some(Ok(alerts)) => AlertsState::loaded(alerts.clone()),
        Some(Err(err)) => AlertsState::failed(err),
        None => AlertsState::default(),
    };
    let loading = snapshot.is_none();

    rsx! {
        // Hidden marker node ensures reactive dependency on language signal.
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-alerts",
            h1 { {crate::t!("page-alerts-title")} }
            p { {crate::t!("page-alerts-intro")} }

            div { class: "alerts-filter",
                label { r#for: "alerts-status", "Status" }
                select {
                    id: "alerts-status",
                    value: "{status_choice()}",
                    oninput: move |evt| status_choice.set(evt.value()),
                    option { key: "all", value: "all", "all" }
                    for status in DisasterStatus::ALL {
                        option { key: "{status}", value: "{status}", "{status}" }
                    }
                }

                label { r#for: "alerts-location", "Location" }
                input {
                    id: "alerts-location",
                    placeholder: "e.g. river delta",
                    value: "{location_query()}",
                    oninput: move |evt| location_query.set(evt.value()),
                }
            }

            if loading {
                p { class: "alerts-card__placeholder", "Loading alerts…" }
            } else {
                AlertsList { state }
            }
        }
    }
}
