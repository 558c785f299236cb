//! Shared API crate for Vigil: the disaster data contract, the request
//! validation layer, and the server functions that expose the operations.
//!
//! Everything except [`store`] is compiled into both the WASM client and the
//! server binary, so the client can run the exact same validation the server
//! enforces before a request ever leaves the browser.

pub mod error;
pub mod models;
pub mod ops;
pub mod requests;
pub mod status;
pub mod validate;

#[cfg(feature = "server")]
pub mod store;

pub use error::{FieldError, ValidationError};
pub use models::{Disaster, DisasterAlert, DisasterReport};
pub use requests::{
    AddDisaster, AddDisasterReportExisting, AddDisasterReportNew, DeleteDisaster,
    GetAllDisasterAlerts, GetDisaster, StatusFilter, UpdateDisaster,
};
pub use status::DisasterStatus;
