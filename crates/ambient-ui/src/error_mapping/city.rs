use crate::services::city_service::CityError;
use ambient_core::{AppError, NetworkError};

impl From<CityError> for AppError {
    fn from(e: CityError) -> Self {
        match e {
            CityError::Lookup(s) => AppError::Network(NetworkError::InvalidResponse(s)),
            CityError::AllFailed(s) => AppError::Network(NetworkError::ConnectionFailed(s)),
        }
    }
}
