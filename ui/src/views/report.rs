use dioxus::prelude::*;
use futures_util::StreamExt;
use serde_json::{json, Value};

use api::error::ValidationError;
use api::ops;
use api::requests::{AddDisaster, AddDisasterReportExisting, AddDisasterReportNew};
use api::status::DisasterStatus;

use crate::core::format;

/// Which of the two report shapes the form is currently editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReportMode {
    NewDisaster,
    ExistingAlert,
}

#[derive(Debug, Clone)]
enum ReportEvent {
    SubmitNew {
        disaster: AddDisaster,
        report: AddDisasterReportNew,
    },
    SubmitExisting {
        report: AddDisasterReportExisting,
    },
}

#[component]
pub fn Report() -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let mut mode = use_signal(|| ReportMode::NewDisaster);
    let mut name = use_signal(String::new);
    let mut intensity = use_signal(|| "50".to_string());
    let mut location = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut status_choice = use_signal(|| DisasterStatus::Active);
    let mut alert_id = use_signal(String::new);

    let mut field_errors = use_signal(|| Option::<ValidationError>::None);
    let status_line = use_signal(|| "Fill in the form to file a report.".to_string());

    let coroutine = {
        let errors_ref = field_errors.clone();
        let status_ref = status_line.clone();

        use_coroutine(move |mut rx: UnboundedReceiver<ReportEvent>| {
            let mut errors_signal = errors_ref.clone();
            let mut status_signal = status_ref.clone();

            async move {
                while let Some(event) = rx.next().await {
                    match event {
                        ReportEvent::SubmitNew {
                            disaster,
                            mut report,
                        } => {
                            status_signal.set("Creating disaster record…".to_string());
                            match ops::add_disaster(to_body(&disaster)).await {
                                Ok(created) => {
                                    report.disaster_id = created.id.clone();
                                    status_signal.set("Filing report…".to_string());
                                    match ops::add_disaster_report_new(to_body(&report)).await {
                                        Ok(filed) => {
                                            errors_signal.set(None);
                                            status_signal.set(format!(
                                                "{} ({}) alert opened at {}.",
                                                created.name,
                                                format::format_intensity(created.intensity),
                                                filed.alert.location,
                                            ));
                                        }
                                        Err(err) => apply_server_error(
                                            err,
                                            &mut errors_signal,
                                            &mut status_signal,
                                        ),
                                    }
                                }
                                Err(err) => apply_server_error(
                                    err,
                                    &mut errors_signal,
                                    &mut status_signal,
                                ),
                            }
                        }
                        ReportEvent::SubmitExisting { report } => {
                            status_signal.set("Filing report…".to_string());
                            match ops::add_disaster_report_existing(to_body(&report)).await {
                                Ok(filed) => {
                                    errors_signal.set(None);
                                    status_signal.set(format!(
                                        "Report filed at {} against alert #{} ({}).",
                                        format::format_timestamp(&filed.created_at),
                                        filed.disaster_alert_id,
                                        filed.status,
                                    ));
                                }
                                Err(err) => apply_server_error(
                                    err,
                                    &mut errors_signal,
                                    &mut status_signal,
                                ),
                            }
                        }
                    }
                }
            }
        })
    };

    let on_submit = {
        let coroutine = coroutine.clone();
        let mut status_signal = status_line.clone();
        move |evt: FormEvent| {
            evt.prevent_default();

            match mode() {
                ReportMode::NewDisaster => {
                    let disaster_body = json!({
                        "name": name(),
                        "intensity": intensity_value(&intensity()),
                    });
                    // The disaster id only exists once the server has created
                    // the record; a placeholder satisfies the presence check
                    // and is replaced before the report is sent.
                    let report_body = json!({
                        "disasterId": "pending",
                        "location": location(),
                        "description": description(),
                        "status": status_choice().as_str(),
                    });

                    match (
                        AddDisaster::parse(&disaster_body),
                        AddDisasterReportNew::parse(&report_body),
                    ) {
                        (Ok(disaster), Ok(report)) => {
                            field_errors.set(None);
                            coroutine.send(ReportEvent::SubmitNew { disaster, report });
                        }
                        (disaster_result, report_result) => {
                            let mut combined = Vec::new();
                            if let Err(err) = disaster_result {
                                combined.extend(err.errors);
                            }
                            if let Err(err) = report_result {
                                combined.extend(err.errors);
                            }
                            field_errors.set(Some(ValidationError::new(combined)));
                            status_signal.set("Fix the highlighted fields.".to_string());
                        }
                    }
                }
                ReportMode::ExistingAlert => {
                    let body = json!({
                        "description": description(),
                        "status": status_choice().as_str(),
                        "disasterAlertId": alert_id(),
                    });
                    match AddDisasterReportExisting::parse(&body) {
                        Ok(report) => {
                            field_errors.set(None);
                            coroutine.send(ReportEvent::SubmitExisting { report });
                        }
                        Err(err) => {
                            field_errors.set(Some(err));
                            status_signal.set("Fix the highlighted fields.".to_string());
                        }
                    }
                }
            }
        }
    };

    let current_mode = mode();
    let current_errors = field_errors();

    rsx! {
        // Hidden marker node ensures reactive dependency on language signal.
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-report",
            h1 { {crate::t!("page-report-title")} }
            p { {crate::t!("page-report-intro")} }

            div { class: "report-form__modes",
                button {
                    r#type: "button",
                    class: mode_class(current_mode == ReportMode::NewDisaster),
                    onclick: move |_| mode.set(ReportMode::NewDisaster),
                    "New disaster"
                }
                button {
                    r#type: "button",
                    class: mode_class(current_mode == ReportMode::ExistingAlert),
                    onclick: move |_| mode.set(ReportMode::ExistingAlert),
                    "Existing alert"
                }
            }

            form { class: "report-form", onsubmit: on_submit,
                if current_mode == ReportMode::NewDisaster {
                    label { r#for: "report-name", "Disaster name" }
                    input {
                        id: "report-name",
                        value: "{name()}",
                        oninput: move |evt| name.set(evt.value()),
                    }

                    label { r#for: "report-intensity", "Intensity (0–100)" }
                    input {
                        id: "report-intensity",
                        inputmode: "numeric",
                        value: "{intensity()}",
                        oninput: move |evt| intensity.set(evt.value()),
                    }

                    label { r#for: "report-location", "Location" }
                    input {
                        id: "report-location",
                        value: "{location()}",
                        oninput: move |evt| location.set(evt.value()),
                    }
                } else {
                    label { r#for: "report-alert-id", "Alert id" }
                    input {
                        id: "report-alert-id",
                        placeholder: "Paste the alert id from the alerts page",
                        value: "{alert_id()}",
                        oninput: move |evt| alert_id.set(evt.value()),
                    }
                }

                label { r#for: "report-description", "What do you see?" }
                textarea {
                    id: "report-description",
                    rows: 4,
                    value: "{description()}",
                    oninput: move |evt| description.set(evt.value()),
                }

                label { r#for: "report-status", "Status" }
                select {
                    id: "report-status",
                    value: "{status_choice()}",
                    oninput: move |evt| {
                        if let Some(parsed) = DisasterStatus::parse(&evt.value()) {
                            status_choice.set(parsed);
                        }
                    },
                    for status in DisasterStatus::ALL {
                        option { key: "{status}", value: "{status}", "{status}" }
                    }
                }

                button { r#type: "submit", class: "report-form__submit", "Submit report" }
            }

            if let Some(errors) = current_errors {
                ul { class: "report-form__errors",
                    for field_error in errors.errors.iter() {
                        li { key: "{field_error.field}",
                            span { class: "report-form__error-field", "{field_error.field}" }
                            " — {field_error.message}"
                        }
                    }
                }
            }

            div { class: "report-form__status", {status_line()} }
        }
    }
}

fn mode_class(selected: bool) -> &'static str {
    if selected {
        "report-form__mode report-form__mode--selected"
    } else {
        "report-form__mode"
    }
}

/// Numeric intensity when the text parses; otherwise the raw text, so the
/// validator reports the type error instead of a silent default.
fn intensity_value(raw: &str) -> Value {
    match raw.trim().parse::<f64>() {
        Ok(number) => json!(number),
        Err(_) => json!(raw.trim()),
    }
}

fn to_body<T: serde::Serialize>(request: &T) -> Value {
    serde_json::to_value(request).unwrap_or(Value::Null)
}

fn apply_server_error(
    err: ServerFnError,
    errors_signal: &mut Signal<Option<ValidationError>>,
    status_signal: &mut Signal<String>,
) {
    let raw = err.to_string();
    if let Some(validation) = ValidationError::from_server_message(&raw) {
        errors_signal.set(Some(validation));
        status_signal.set("The server rejected the report.".to_string());
    } else {
        status_signal.set(format!("Submission failed: {raw}"));
    }
}
