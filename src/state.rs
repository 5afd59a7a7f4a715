//! Application state management

use std::sync::Arc;

use crate::config::Config;
use crate::maestra::MaestraClient;
use crate::session::SessionStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pub config: Config,
    pub sessions: SessionStore,
    pub maestra: MaestraClient,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Self {
        let maestra = MaestraClient::new(&config.maestra.url);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                sessions: SessionStore::new(),
                maestra,
            }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the session store
    pub fn sessions(&self) -> &SessionStore {
        &self.inner.sessions
    }

    /// Get the Maestra client
    pub fn maestra(&self) -> &MaestraClient {
        &self.inner.maestra
    }
}
