use std::sync::Arc;

use crate::config::Config;
use crate::engine::CareerEngine;
use crate::recommendations::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one seam to the generative backend. Production wires `GeminiEngine`;
    /// tests substitute scripted stubs.
    pub engine: Arc<dyn CareerEngine>,
    /// In-memory session registry owning the per-session detail caches.
    pub sessions: SessionStore,
    pub config: Config,
}
