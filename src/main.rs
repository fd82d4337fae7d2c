use anyhow::Result;
use petcare_endpoints::{AppState, Config};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("petcare-endpoints starting");

    let config = Config::from_env();
    config.log_startup();

    let state = AppState::new(config);
    println!("{}", serde_json::to_string_pretty(state.endpoints.as_ref())?);

    Ok(())
}
