//! Map view lifecycle state machine (mount/engine-load/data-fetch gating).
//!
//! Data fetches must never start before the rendering engine is ready,
//! otherwise markers would be derived with no engine to produce their
//! icons. Used by MapModel.

/// Lifecycle state for the map view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapViewState {
    /// Not yet rendered in a client context (e.g. a server render).
    #[default]
    Unmounted,
    /// First client render observed; engine not requested yet.
    ClientDetected,
    /// Rendering engine load in progress.
    EngineLoading,
    /// Engine ready; markers can be drawn and data fetches may start.
    EngineReady,
}

impl MapViewState {
    /// State after the first render in a client context. Happens once;
    /// repeat mounts and non-client renders leave the state unchanged.
    pub fn on_client_render(self, is_client: bool) -> Self {
        match (self, is_client) {
            (MapViewState::Unmounted, true) => MapViewState::ClientDetected,
            (state, _) => state,
        }
    }

    /// State after requesting the rendering engine. Loading is idempotent:
    /// an already-loaded engine skips straight to ready.
    pub fn on_engine_requested(self, already_loaded: bool) -> Self {
        match self {
            MapViewState::ClientDetected if already_loaded => MapViewState::EngineReady,
            MapViewState::ClientDetected => MapViewState::EngineLoading,
            state => state,
        }
    }

    /// State after the engine finishes loading.
    pub fn on_engine_loaded(self) -> Self {
        match self {
            MapViewState::EngineLoading => MapViewState::EngineReady,
            state => state,
        }
    }

    /// True if city/location/sensor fetches may be triggered.
    pub fn can_fetch_data(self) -> bool {
        matches!(self, MapViewState::EngineReady)
    }

    /// True once the view has been mounted in a client context.
    pub fn is_mounted(self) -> bool {
        !matches!(self, MapViewState::Unmounted)
    }
}
