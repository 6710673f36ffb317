//! Dashboard backend: the 30-second sensor poll loop.
//!
//! Within a tick the reading and status fetches run in parallel and both
//! settle before the tick message is sent. Across ticks, messages apply in
//! completion order; there is no sequence numbering. The loop stops when
//! the view token is cancelled, and a tick that completes after
//! cancellation is dropped.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio_util::sync::CancellationToken;

use ambient_sensor::{SensorReading, SensorSource, SensorStatus};

/// Error type for degraded sensor status, carried into the model layer.
#[derive(Debug, Clone)]
pub enum StatusError {
    Degraded(String),
}

impl std::fmt::Display for StatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusError::Degraded(s) => write!(f, "Sensor degraded: {}", s),
        }
    }
}

impl std::error::Error for StatusError {}

/// Messages sent from the poll loop back to the model thread
#[derive(Debug)]
pub enum DashboardServiceMessage {
    /// One settled poll tick: reading and status together
    Tick {
        reading: SensorReading,
        status: SensorStatus,
    },
}

/// Start the poll loop for the lifetime of the view token.
///
/// The sensor source is re-read from the shared slot every tick so an IP
/// change made in settings takes effect on the next poll.
pub fn start_polling(
    handle: &tokio::runtime::Handle,
    tx: &std::sync::mpsc::Sender<DashboardServiceMessage>,
    sensor: Arc<RwLock<Arc<SensorSource>>>,
    prefer_network: bool,
    interval: Duration,
    token: CancellationToken,
) {
    let tx = tx.clone();
    handle.spawn(async move {
        let mut ticker = tokio::time::interval(interval.max(Duration::from_millis(10)));
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = token.cancelled() => break,
                _ = ticker.tick() => {}
            }

            let source = sensor.read().clone();
            let (reading, status) = tokio::join!(
                source.fetch_reading(prefer_network),
                source.fetch_status(prefer_network),
            );

            if token.is_cancelled() {
                tracing::debug!("Discarding poll tick after view teardown");
                break;
            }

            if tx.send(DashboardServiceMessage::Tick { reading, status }).is_err() {
                tracing::debug!("Dashboard receiver gone, stopping poll loop");
                break;
            }
        }

        tracing::debug!("Dashboard poll loop stopped");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_display() {
        let e = StatusError::Degraded("LOW BATTERY".into());
        assert!(format!("{}", e).contains("LOW BATTERY"));
    }
}
