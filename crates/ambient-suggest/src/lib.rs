//! Suggestion generation boundary for Ambient
//!
//! Forwards sensor readings to an opaque external text-generation service
//! and shapes its templated responses. Each category degrades independently
//! to a static fallback.

pub mod client;
pub mod types;

pub use client::SuggestClient;
pub use types::{fallback, SuggestError, SuggestMode, SuggestRequest, Suggestions, MAX_LIST_SUGGESTIONS};
