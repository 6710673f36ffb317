//! City-catalog backend: one parallel temperature resolution per session.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use ambient_geo::{CatalogOutcome, CityCatalog};

/// Error type for city catalog operations, carried into the model layer.
#[derive(Debug, Clone)]
pub enum CityError {
    /// One or more city lookups failed; the rest of the batch survived.
    Lookup(String),
    /// Every lookup in the batch failed.
    AllFailed(String),
}

impl std::fmt::Display for CityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CityError::Lookup(s) => write!(f, "City lookup failed: {}", s),
            CityError::AllFailed(s) => write!(f, "All city lookups failed: {}", s),
        }
    }
}

impl std::error::Error for CityError {}

/// Messages sent from async catalog work back to the model thread
#[derive(Debug)]
pub enum CityServiceMessage {
    /// Result of resolving the city catalog
    CitiesDone(CatalogOutcome),
}

/// Request the once-per-session catalog resolution.
/// Sends `CitiesDone` when complete; late results after cancellation are
/// dropped.
pub fn request_cities(
    handle: &tokio::runtime::Handle,
    tx: &std::sync::mpsc::Sender<CityServiceMessage>,
    catalog: Arc<CityCatalog>,
    token: CancellationToken,
) {
    let tx = tx.clone();
    handle.spawn(async move {
        let outcome = catalog.resolve_all().await;

        if token.is_cancelled() {
            tracing::debug!("Discarding catalog result after view teardown");
            return;
        }

        let _ = tx.send(CityServiceMessage::CitiesDone(outcome));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_error_display() {
        assert!(format!("{}", CityError::Lookup("Paris: 500".into())).contains("Paris"));
        assert!(format!("{}", CityError::AllFailed("timeout".into())).contains("All"));
    }
}
