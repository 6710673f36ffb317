//! Suggestion backend: the three category requests for one reading.
//!
//! Categories run concurrently and fail independently: a failed category is
//! replaced by its static fallback without touching the others.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use ambient_suggest::{fallback, SuggestClient, SuggestMode, Suggestions};

/// Error type for suggestion operations, carried into the model layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestRequestError {
    Api(String),
}

impl std::fmt::Display for SuggestRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuggestRequestError::Api(s) => write!(f, "Suggestion error: {}", s),
        }
    }
}

impl std::error::Error for SuggestRequestError {}

/// The three categories rendered by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionSet {
    pub general: Suggestions,
    pub kids: Suggestions,
    pub pets: Suggestions,
    /// Categories that fell back, with the recorded failure.
    pub failures: Vec<(SuggestMode, SuggestRequestError)>,
}

/// Messages sent from async suggestion work back to the model thread
#[derive(Debug)]
pub enum SuggestServiceMessage {
    /// All three categories settled (real content or fallback)
    SuggestionsDone(SuggestionSet),
}

fn settle(
    mode: SuggestMode,
    result: Result<Suggestions, ambient_suggest::SuggestError>,
    failures: &mut Vec<(SuggestMode, SuggestRequestError)>,
) -> Suggestions {
    match result {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!("Suggestion request failed for {}: {}", mode.as_str(), e);
            failures.push((mode, SuggestRequestError::Api(e.to_string())));
            fallback(mode)
        }
    }
}

/// Request suggestions for all three categories for one reading.
/// Sends `SuggestionsDone` when every category has settled; a result
/// arriving after the view token is cancelled is dropped.
pub fn request_suggestions(
    handle: &tokio::runtime::Handle,
    tx: &std::sync::mpsc::Sender<SuggestServiceMessage>,
    client: Arc<SuggestClient>,
    temperature: f64,
    humidity: f64,
    token: CancellationToken,
) {
    let tx = tx.clone();
    handle.spawn(async move {
        let (general, kids, pets) = tokio::join!(
            client.fetch(SuggestMode::General, temperature, humidity),
            client.fetch(SuggestMode::Kids, temperature, humidity),
            client.fetch(SuggestMode::Pets, temperature, humidity),
        );

        if token.is_cancelled() {
            tracing::debug!("Discarding suggestion results after view teardown");
            return;
        }

        let mut failures = Vec::new();
        let set = SuggestionSet {
            general: settle(SuggestMode::General, general, &mut failures),
            kids: settle(SuggestMode::Kids, kids, &mut failures),
            pets: settle(SuggestMode::Pets, pets, &mut failures),
            failures,
        };

        let _ = tx.send(SuggestServiceMessage::SuggestionsDone(set));
    });
}
