pub mod config;
pub mod endpoints;
pub mod routes;
pub mod state;

pub use config::Config;
pub use endpoints::{AuthEndpoints, Endpoints};
pub use state::AppState;
