//! Sensor readings for Ambient
//!
//! Provides temperature/humidity readings from a configured network sensor
//! with a mock-generator fallback, plus a bounded reading history.

pub mod client;
pub mod history;
pub mod mock;
pub mod source;
pub mod types;

pub use client::SensorClient;
pub use history::{HistoryBuffer, DEFAULT_HISTORY_CAPACITY};
pub use mock::MockSensor;
pub use source::SensorSource;
pub use types::{SensorError, SensorReading, SensorStatus};
