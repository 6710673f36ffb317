use crate::services::dashboard_service::StatusError;
use ambient_core::{AppError, SensorError};

impl From<StatusError> for AppError {
    fn from(e: StatusError) -> Self {
        match e {
            StatusError::Degraded(s) => AppError::Sensor(SensorError::Degraded(s)),
        }
    }
}
