mod home;
pub use home::Home;

mod report;
pub use report::Report;

mod alerts;
pub use alerts::Alerts;
