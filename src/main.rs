use std::process;

use dotenvy::dotenv;
use env_logger::Env;

use prologix::{config::Config, create_router, state::AppState};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv().ok();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("Invalid configuration: {err}");
            process::exit(1);
        }
    };
    let addr = config.bind_addr();

    let state = match AppState::seeded(config) {
        Ok(state) => state,
        Err(err) => {
            log::error!("Failed to seed store: {err}");
            process::exit(1);
        }
    };
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            log::error!("Failed to bind {addr}: {err}");
            process::exit(1);
        }
    };
    log::info!("ProLogiX server listening on http://{addr}");

    if let Err(err) = axum::serve(listener, app).await {
        log::error!("Server error: {err}");
        process::exit(1);
    }
}
