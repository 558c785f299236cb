//! The closed set of disaster statuses.
//!
//! The set is owned by the persistence contract; the validation layer only
//! checks membership and never extends it. Wire form is the lowercase name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisasterStatus {
    /// The hazard is ongoing and uncontained.
    Active,
    /// Response teams have the situation under control.
    Contained,
    /// The hazard has passed.
    Resolved,
    /// The alert turned out to be a non-event.
    Dismissed,
}

impl DisasterStatus {
    /// Every member, in severity order. Drives select controls and tests.
    pub const ALL: [Self; 4] = [
        Self::Active,
        Self::Contained,
        Self::Resolved,
        Self::Dismissed,
    ];

    /// Wire name (lowercase, matches the serde representation).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Contained => "contained",
            Self::Resolved => "resolved",
            Self::Dismissed => "dismissed",
        }
    }

    /// Strict membership lookup. `None` for anything outside the set.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == raw)
    }
}

impl fmt::Display for DisasterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisasterStatus {
    type Err = ();

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw).ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_every_member() {
        for status in DisasterStatus::ALL {
            assert_eq!(DisasterStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn parse_rejects_free_text_and_case_drift() {
        assert_eq!(DisasterStatus::parse("Active"), None);
        assert_eq!(DisasterStatus::parse("on fire"), None);
        assert_eq!(DisasterStatus::parse(""), None);
    }

    #[test]
    fn wire_form_is_lowercase_name() {
        let json = serde_json::to_string(&DisasterStatus::Contained).unwrap();
        assert_eq!(json, "\"contained\"");

        let back: DisasterStatus = serde_json::from_str("\"resolved\"").unwrap();
        assert_eq!(back, DisasterStatus::Resolved);
    }
}
