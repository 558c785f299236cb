//! Formatting helpers for presenting disaster data.

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::OffsetDateTime;

/// Display form of an intensity score, e.g. `72/100`.
pub fn format_intensity(value: f64) -> String {
    format!("{value:.0}/100")
}

/// Compact display of an RFC 3339 timestamp: `2026-08-07 · 14:30`.
/// Falls back to the raw string when it doesn't parse.
pub fn format_timestamp(iso: &str) -> String {
    match OffsetDateTime::parse(iso, &Rfc3339) {
        Ok(ts) => ts
            .format(&format_description!("[year]-[month]-[day] · [hour]:[minute]"))
            .unwrap_or_else(|_| iso.to_string()),
        Err(_) => iso.to_string(),
    }
}
