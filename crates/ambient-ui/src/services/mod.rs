pub mod city_service;
pub mod dashboard_service;
pub mod location_service;
pub mod suggest_service;

pub use city_service::{request_cities, CityError, CityServiceMessage};
pub use dashboard_service::{start_polling, DashboardServiceMessage, StatusError};
pub use location_service::{request_resolve, LocationServiceMessage, ResolveError};
pub use suggest_service::{
    request_suggestions, SuggestRequestError, SuggestServiceMessage, SuggestionSet,
};
