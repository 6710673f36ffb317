//! Plain-text rendering for suggestion content.
//!
//! A paragraph renders as-is; a list renders one bulleted line per item.
//! The categorized view stacks the three sections in a fixed order.

use ambient_suggest::{SuggestMode, Suggestions};

use crate::services::SuggestionSet;

const BULLET: &str = "\u{2022}";

/// Render one suggestion payload to display text.
pub fn render(suggestions: &Suggestions) -> String {
    match suggestions {
        Suggestions::Paragraph(text) => text.clone(),
        Suggestions::List(items) => items
            .iter()
            .map(|item| format!("{} {}", BULLET, item))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn heading(mode: SuggestMode) -> &'static str {
    match mode {
        SuggestMode::General => "Suggestions",
        SuggestMode::Kids => "For kids",
        SuggestMode::Pets => "For pets",
    }
}

fn section(mode: SuggestMode, suggestions: &Suggestions) -> String {
    format!("{}\n{}", heading(mode), render(suggestions))
}

/// Render the full categorized view: general, kids, pets.
pub fn render_set(set: &SuggestionSet) -> String {
    [
        section(SuggestMode::General, &set.general),
        section(SuggestMode::Kids, &set.kids),
        section(SuggestMode::Pets, &set.pets),
    ]
    .join("\n\n")
}
