use api::models::DisasterAlert;
use dioxus::prelude::*;

use super::AlertsState;

#[component]
pub fn AlertsList(state: AlertsState) -> Element {
    rsx! {
        section { class: "alerts-card alerts-list",
            div { class: "alerts-card__header",
                h2 { "Open alerts" }
                if !state.alerts.is_empty() {
                    span { class: "alerts-card__meta", "{state.alerts.len()} matching" }
                }
            }

            if let Some(err) = state.error.as_ref() {
                p { class: "alerts-card__error", "⚠️ {err}" }
            } else if state.alerts.is_empty() {
                p { class: "alerts-card__placeholder",
                    "No alerts match the current filter. Widen the status set or clear the location."
                }
            } else {
                ul { class: "alerts-list__items",
                    for alert in state.alerts.iter() {
                        {render_alert(alert)}
                    }
                }
            }
        }
    }
}

fn render_alert(alert: &DisasterAlert) -> Element {
    // Status doubles as a CSS modifier so each state gets its own badge color.
    let item_class = format!("alerts-list__item alerts-list__item--{}", alert.status);

    rsx! {
        li { key: "{alert.id}", class: "{item_class}",
            span { class: "alerts-list__status", "{alert.status}" }
            span { class: "alerts-list__location", "{alert.location}" }
            span { class: "alerts-list__id", "#{short_id(&alert.id)}" }
        }
    }
}

/// First segment of a UUID, enough to tell alerts apart in the feed.
fn short_id(id: &str) -> &str {
    id.split('-').next().unwrap_or(id)
}
