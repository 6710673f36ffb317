use crate::services::suggest_service::SuggestRequestError;
use ambient_core::{AppError, SuggestError};

impl From<SuggestRequestError> for AppError {
    fn from(e: SuggestRequestError) -> Self {
        match e {
            SuggestRequestError::Api(s) => AppError::Suggest(SuggestError::ApiError(s)),
        }
    }
}
