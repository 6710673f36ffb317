use serde::{Deserialize, Serialize};

/// At most this many entries are kept from a list-style response.
pub const MAX_LIST_SUGGESTIONS: usize = 5;

/// Suggestion category.
///
/// `General` gets a paragraph response; `Kids` and `Pets` get short lists
/// and are the only modes sent on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SuggestMode {
    #[default]
    General,
    Kids,
    Pets,
}

impl SuggestMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SuggestMode::General => "general",
            SuggestMode::Kids => "kids",
            SuggestMode::Pets => "pets",
        }
    }

    /// The `mode` request field; absent for the general category.
    pub fn wire_mode(self) -> Option<&'static str> {
        match self {
            SuggestMode::General => None,
            SuggestMode::Kids => Some("kids"),
            SuggestMode::Pets => Some("pets"),
        }
    }
}

/// Request body for the suggestion service.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestRequest {
    pub temperature: f64,
    pub humidity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<&'static str>,
}

impl SuggestRequest {
    pub fn new(mode: SuggestMode, temperature: f64, humidity: f64) -> Self {
        Self {
            temperature,
            humidity,
            mode: mode.wire_mode(),
        }
    }
}

/// Shaped suggestion content for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestions {
    Paragraph(String),
    List(Vec<String>),
}

/// Static fallback content substituted when a category's request fails.
pub fn fallback(mode: SuggestMode) -> Suggestions {
    match mode {
        SuggestMode::General => {
            Suggestions::Paragraph("No suggestions available right now.".to_string())
        }
        SuggestMode::Kids => Suggestions::List(vec![
            "Suggestions for kids are unavailable right now.".to_string(),
        ]),
        SuggestMode::Pets => Suggestions::List(vec![
            "Suggestions for pets are unavailable right now.".to_string(),
        ]),
    }
}

/// Suggestion service errors.
#[derive(Debug, thiserror::Error)]
pub enum SuggestError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Service returned status {0}")]
    BadStatus(u16),
    #[error("Response malformed: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_mode_is_absent_on_the_wire() {
        let req = SuggestRequest::new(SuggestMode::General, 21.5, 55.0);
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"temperature":21.5,"humidity":55.0}"#);
    }

    #[test]
    fn kids_mode_is_sent_on_the_wire() {
        let req = SuggestRequest::new(SuggestMode::Kids, 21.5, 55.0);
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"temperature":21.5,"humidity":55.0,"mode":"kids"}"#);
    }

    #[test]
    fn fallback_shapes_match_category() {
        assert!(matches!(
            fallback(SuggestMode::General),
            Suggestions::Paragraph(_)
        ));
        assert!(matches!(fallback(SuggestMode::Kids), Suggestions::List(_)));
        assert!(matches!(fallback(SuggestMode::Pets), Suggestions::List(_)));
    }
}
