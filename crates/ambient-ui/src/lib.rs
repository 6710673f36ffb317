//! View-model layer for the Ambient dashboard.
//!
//! Async work runs on the shared tokio runtime and reports back to the
//! model layer over mpsc channels; models own their state exclusively and
//! apply messages from their own thread.

pub mod app_services;
pub mod error_mapping;
pub mod models;
pub mod render;
pub mod services;

pub use app_services::AppServices;
pub use models::dashboard_model::DashboardModel;
pub use models::map_model::MapModel;
