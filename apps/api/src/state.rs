use std::sync::Arc;

use chrono::Duration;

use crate::config::Config;
use crate::render::RenderBackend;
use crate::session::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Live form sessions, one writer per session at a time.
    pub sessions: Arc<SessionStore>,
    /// Backend used for the preview endpoint. Default: `PlainTextRenderer`.
    pub renderer: Arc<dyn RenderBackend>,
}

impl AppState {
    pub fn new(config: Config, renderer: Arc<dyn RenderBackend>) -> Self {
        let sessions = Arc::new(SessionStore::new(
            config.max_sessions,
            Duration::seconds(config.session_idle_secs),
        ));
        AppState {
            config,
            sessions,
            renderer,
        }
    }
}
