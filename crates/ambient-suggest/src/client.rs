//! HTTP client for the suggestion generation service.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::types::{
    SuggestError, SuggestMode, SuggestRequest, Suggestions, MAX_LIST_SUGGESTIONS,
};

// Generative backends are slow; give them more room than the sensor calls.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Wire shape of the response: `suggestions` is a plain string for the
/// general category and an array for kids/pets.
#[derive(Debug, Deserialize)]
struct SuggestBody {
    suggestions: SuggestionsField,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SuggestionsField {
    List(Vec<String>),
    Text(String),
}

/// Client for one suggestion service endpoint.
#[derive(Debug, Clone)]
pub struct SuggestClient {
    client: Client,
    base_url: String,
}

impl SuggestClient {
    pub fn new(base_url: &str) -> Result<Self, SuggestError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Request suggestions for one category. List responses are truncated
    /// to `MAX_LIST_SUGGESTIONS` entries.
    pub async fn fetch(
        &self,
        mode: SuggestMode,
        temperature: f64,
        humidity: f64,
    ) -> Result<Suggestions, SuggestError> {
        let url = format!("{}/suggestions", self.base_url);
        let request = SuggestRequest::new(mode, temperature, humidity);

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            return Err(SuggestError::BadStatus(response.status().as_u16()));
        }

        let body: SuggestBody = response
            .json()
            .await
            .map_err(|e| SuggestError::Malformed(e.to_string()))?;

        let suggestions = match body.suggestions {
            SuggestionsField::Text(text) => Suggestions::Paragraph(text),
            SuggestionsField::List(mut items) => {
                if items.len() > MAX_LIST_SUGGESTIONS {
                    tracing::debug!(
                        "Truncating {} suggestions to {} for mode {}",
                        items.len(),
                        MAX_LIST_SUGGESTIONS,
                        mode.as_str()
                    );
                    items.truncate(MAX_LIST_SUGGESTIONS);
                }
                Suggestions::List(items)
            }
        };

        Ok(suggestions)
    }
}
