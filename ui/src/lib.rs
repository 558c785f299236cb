//! Shared UI crate for Vigil. Cross-platform views and the site footer live here.

pub mod alerts;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized site footer (components/app_footer.rs)
    pub mod app_footer;
    pub use app_footer::register_footer;
    pub use app_footer::AppFooter;
    pub use app_footer::FooterBuilder;
}
