//! Location backend: one async resolution per session.
//! Work runs off the model thread; the result is sent via mpsc.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use ambient_geo::{LocationSource, ResolvedLocation};

/// Error type for location operations, carried into the model layer.
#[derive(Debug, Clone)]
pub enum ResolveError {
    Device(String),
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveError::Device(s) => write!(f, "Location error: {}", s),
        }
    }
}

impl std::error::Error for ResolveError {}

/// Messages sent from async location work back to the model thread
#[derive(Debug)]
pub enum LocationServiceMessage {
    /// Result of resolving the viewer's coordinate
    ResolveDone(ResolvedLocation),
}

/// Request the one-per-session location resolution.
/// Sends `ResolveDone` on the channel when complete; a result arriving
/// after the view token is cancelled is dropped.
pub fn request_resolve(
    handle: &tokio::runtime::Handle,
    tx: &std::sync::mpsc::Sender<LocationServiceMessage>,
    source: Arc<LocationSource>,
    token: CancellationToken,
) {
    let tx = tx.clone();
    handle.spawn(async move {
        let resolved = source.resolve().await;

        if token.is_cancelled() {
            tracing::debug!("Discarding location result after view teardown");
            return;
        }

        let _ = tx.send(LocationServiceMessage::ResolveDone(resolved));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_error_display() {
        let e = ResolveError::Device("denied".into());
        assert!(format!("{}", e).contains("Location"));
    }
}
