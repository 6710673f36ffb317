use crate::services::location_service::ResolveError;
use ambient_core::{AppError, LocationError};

impl From<ResolveError> for AppError {
    fn from(e: ResolveError) -> Self {
        match e {
            ResolveError::Device(s) => AppError::Location(LocationError::Other(s)),
        }
    }
}
