use std::env;

/// Environment variable that overrides the backend base URL.
pub const BASE_URL_VAR: &str = "API_BASE_URL";

/// Base URL used when no override is present: the local development backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        // An empty override counts as absent. The value is otherwise used
        // verbatim: no validation, no trailing-slash normalization.
        let api_base_url = env::var(BASE_URL_VAR)
            .ok()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Config { api_base_url }
    }

    /// Build a config with an explicit base URL, ignoring the environment.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            api_base_url: base_url.into(),
        }
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  API base URL: {}", self.api_base_url);
    }
}
