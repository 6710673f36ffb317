//! Dashboard model: rolling sensor history, device status, suggestions.
//!
//! Updates arrive as poll-tick and suggestion messages drained from the
//! service channels; the model decides whether a tick warrants a new
//! suggestion round.

use chrono::{DateTime, Utc};

use ambient_core::AppError;
use ambient_sensor::{HistoryBuffer, SensorReading, SensorStatus};

use crate::services::{StatusError, SuggestionSet};

#[derive(Debug, Default)]
pub struct DashboardModel {
    history: HistoryBuffer,
    latest: Option<SensorReading>,
    status: Option<SensorStatus>,
    status_banner: Option<String>,
    suggestions: Option<SuggestionSet>,
    updated_at: Option<DateTime<Utc>>,
    errors: Vec<String>,
}

impl DashboardModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one settled poll tick. Returns true when the tick should
    /// trigger a suggestion round.
    ///
    /// The trigger requires a present, non-zero temperature. An exact 0.0
    /// reading is treated like a missing one, so a freezing-point tick
    /// never refreshes suggestions.
    pub fn apply_tick(&mut self, reading: SensorReading, status: SensorStatus) -> bool {
        self.history.push(reading);
        self.latest = Some(reading);
        self.updated_at = Some(Utc::now());

        self.status_banner = if status.is_ok() {
            None
        } else {
            let app: AppError = StatusError::Degraded(status.status.clone()).into();
            Some(app.user_message().to_string())
        };
        self.status = Some(status);

        matches!(reading.temperature, Some(t) if t != 0.0)
    }

    pub fn apply_suggestions(&mut self, set: SuggestionSet) {
        for (mode, err) in &set.failures {
            let message = format!("{}: {}", mode.as_str(), err);
            if !self.errors.contains(&message) {
                self.errors.push(message);
            }
        }
        self.suggestions = Some(set);
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn latest(&self) -> Option<&SensorReading> {
        self.latest.as_ref()
    }

    pub fn status(&self) -> Option<&SensorStatus> {
        self.status.as_ref()
    }

    /// User-facing banner while the device reports a non-OK status.
    pub fn status_banner(&self) -> Option<&str> {
        self.status_banner.as_deref()
    }

    pub fn suggestions(&self) -> Option<&SuggestionSet> {
        self.suggestions.as_ref()
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::SuggestRequestError;
    use ambient_suggest::{fallback, SuggestMode, Suggestions};

    #[test]
    fn tick_with_temperature_triggers_suggestions() {
        let mut model = DashboardModel::new();
        let fired = model.apply_tick(SensorReading::new(21.5, 48.0), SensorStatus::ok("10.0.0.2"));
        assert!(fired);
        assert_eq!(model.history().len(), 1);
        assert!(model.updated_at().is_some());
    }

    #[test]
    fn failed_reading_does_not_trigger_suggestions() {
        let mut model = DashboardModel::new();
        let fired = model.apply_tick(SensorReading::failed(), SensorStatus::ok("10.0.0.2"));
        assert!(!fired);
        // The gap still lands in the history
        assert_eq!(model.history().len(), 1);
    }

    #[test]
    fn zero_temperature_does_not_trigger_suggestions() {
        let mut model = DashboardModel::new();
        let fired = model.apply_tick(SensorReading::new(0.0, 48.0), SensorStatus::ok("10.0.0.2"));
        assert!(!fired);
    }

    #[test]
    fn history_drops_oldest_past_capacity() {
        let mut model = DashboardModel::new();
        for n in 0..31 {
            model.apply_tick(SensorReading::new(n as f64, 50.0), SensorStatus::ok("10.0.0.2"));
        }
        assert_eq!(model.history().len(), 30);
        let first = model.history().iter().next().unwrap();
        assert_eq!(first.temperature, Some(1.0));
        assert_eq!(model.latest().unwrap().temperature, Some(30.0));
    }

    #[test]
    fn degraded_status_raises_and_clears_the_banner() {
        let mut model = DashboardModel::new();
        let degraded = SensorStatus {
            status: "LOW BATTERY".to_string(),
            ip: "10.0.0.2".to_string(),
        };
        model.apply_tick(SensorReading::new(21.0, 50.0), degraded);
        assert!(model.status_banner().is_some());

        model.apply_tick(SensorReading::new(21.0, 50.0), SensorStatus::ok("10.0.0.2"));
        assert!(model.status_banner().is_none());
    }

    #[test]
    fn suggestion_failures_are_recorded_once() {
        let mut model = DashboardModel::new();
        let set = SuggestionSet {
            general: Suggestions::Paragraph("Open a window.".to_string()),
            kids: fallback(SuggestMode::Kids),
            pets: fallback(SuggestMode::Pets),
            failures: vec![
                (SuggestMode::Kids, SuggestRequestError::Api("500".into())),
                (SuggestMode::Pets, SuggestRequestError::Api("500".into())),
            ],
        };
        model.apply_suggestions(set.clone());
        model.apply_suggestions(set);

        assert_eq!(model.errors().len(), 2);
        assert!(model.suggestions().is_some());
    }
}
