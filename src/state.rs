use crate::config::Config;
use crate::endpoints::Endpoints;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub endpoints: Arc<Endpoints>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Build shared state from configuration, deriving the endpoint registry
    /// exactly once. Clones hand out the same derivation.
    pub fn new(config: Config) -> Self {
        let endpoints = Endpoints::from_config(&config);
        AppState {
            endpoints: Arc::new(endpoints),
            config: Arc::new(config),
        }
    }
}
