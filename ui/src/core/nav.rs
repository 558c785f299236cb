//! Static navigation configuration and active-link resolution.
//!
//! The nav list is fixed at compile time and immutable for the process
//! lifetime. Deciding which entry is "active" for the current route is a
//! pure function here so it stays testable without any rendering framework;
//! the footer component only applies the resulting index as a CSS modifier.

/// One navigation entry: a Fluent label key plus the route path it links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label_key: &'static str,
    pub link: &'static str,
}

/// Site navigation, in render order.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label_key: "nav-home",
        link: "/",
    },
    NavItem {
        label_key: "nav-report",
        link: "/report",
    },
    NavItem {
        label_key: "nav-alerts",
        link: "/alerts",
    },
];

/// Index of the entry whose link equals `current_path`, or `None` when no
/// entry matches. Trailing slashes are ignored on both sides (`/report/`
/// is the `/report` page); the root path stays `/`.
pub fn active_index(current_path: &str, items: &[NavItem]) -> Option<usize> {
    let current = normalize(current_path);
    items
        .iter()
        .position(|item| normalize(item.link) == current)
}

fn normalize(path: &str) -> &str {
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_the_matching_entry_is_active() {
        for (idx, item) in NAV_ITEMS.iter().enumerate() {
            assert_eq!(active_index(item.link, NAV_ITEMS), Some(idx));
        }
    }

    #[test]
    fn unknown_path_activates_nothing() {
        assert_eq!(active_index("/about", NAV_ITEMS), None);
        assert_eq!(active_index("", NAV_ITEMS), None);
    }

    #[test]
    fn trailing_slash_still_matches() {
        assert_eq!(active_index("/report/", NAV_ITEMS), Some(1));
        assert_eq!(active_index("/", NAV_ITEMS), Some(0));
    }

    #[test]
    fn empty_nav_list_has_no_active_entry() {
        assert_eq!(active_index("/", &[]), None);
    }

    #[test]
    fn root_does_not_match_everything() {
        // "/" must only activate the home entry, not act as a prefix.
        assert_eq!(active_index("/alerts", NAV_ITEMS), Some(2));
        assert_ne!(active_index("/alerts", NAV_ITEMS), Some(0));
    }
}
