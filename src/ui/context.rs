use std::sync::Arc;

use flume::Sender;

use crate::{
    config::Config,
    event::events::Event,
    http::{ApiService, SpotifyClient},
    store::Store,
};

/// Shared handles every view and task receives.
pub struct AppContext {
    pub api: Arc<ApiService>,
    pub store: Arc<Store>,
    pub config: Arc<Config>,
    pub event_tx: Sender<Event>,
}

impl AppContext {
    /// A streaming API client bound to the current token, if logged in.
    pub fn spotify(&self) -> Option<SpotifyClient> {
        let state = self.store.snapshot();
        state.token.as_ref().map(|token| self.api.authorized(token.clone()))
    }

    pub fn send(&self, event: Event) {
        let _ = self.event_tx.send(event);
    }
}
