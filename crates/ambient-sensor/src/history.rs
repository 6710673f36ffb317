//! Bounded rolling history of sensor readings.

use std::collections::VecDeque;

use crate::types::SensorReading;

pub const DEFAULT_HISTORY_CAPACITY: usize = 30;

/// Fixed-capacity ring of the most recent readings, insertion-ordered,
/// oldest evicted first.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    entries: VecDeque<SensorReading>,
    capacity: usize,
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a reading, evicting the oldest entry when full. Failed
    /// readings are appended like any other — gaps stay visible in charts.
    pub fn push(&mut self, reading: SensorReading) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(reading);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recent reading, if any.
    pub fn latest(&self) -> Option<&SensorReading> {
        self.entries.back()
    }

    /// Oldest-to-newest iteration.
    pub fn iter(&self) -> impl Iterator<Item = &SensorReading> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(n: usize) -> SensorReading {
        SensorReading::new(n as f64, 50.0)
    }

    #[test]
    fn empty_buffer() {
        let buf = HistoryBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.latest(), None);
        assert_eq!(buf.capacity(), DEFAULT_HISTORY_CAPACITY);
    }

    #[test]
    fn length_never_exceeds_capacity() {
        let mut buf = HistoryBuffer::new();
        for n in 0..100 {
            buf.push(reading(n));
            assert!(buf.len() <= DEFAULT_HISTORY_CAPACITY);
        }
    }

    #[test]
    fn thirty_one_appends_keep_last_thirty_in_order() {
        let mut buf = HistoryBuffer::new();
        for n in 0..31 {
            buf.push(reading(n));
        }

        assert_eq!(buf.len(), 30);
        let kept: Vec<_> = buf.iter().copied().collect();
        let expected: Vec<_> = (1..31).map(reading).collect();
        assert_eq!(kept, expected);
        assert_eq!(buf.latest(), Some(&reading(30)));
    }

    #[test]
    fn failed_readings_are_retained() {
        let mut buf = HistoryBuffer::with_capacity(3);
        buf.push(reading(1));
        buf.push(SensorReading::failed());
        buf.push(reading(2));

        let kept: Vec<_> = buf.iter().copied().collect();
        assert_eq!(kept[1], SensorReading::failed());
        assert_eq!(kept.len(), 3);
    }

    #[test]
    fn zero_capacity_is_clamped_to_one() {
        let mut buf = HistoryBuffer::with_capacity(0);
        buf.push(reading(1));
        buf.push(reading(2));
        assert_eq!(buf.len(), 1);
        assert_eq!(buf.latest(), Some(&reading(2)));
    }
}
