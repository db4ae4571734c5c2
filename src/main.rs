use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use tracing::{error, info};

mod config;
mod domain;
mod errors;
mod listings;
mod render;
mod responses;
mod router;
mod state;
mod store;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "estate_listings=info".into()),
        )
        .with_target(true)
        .init();

    let config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let app = match AppState::from_config(&config) {
        Ok(app) => app,
        Err(e) => {
            error!("Listing store setup failed: {e}");
            std::process::exit(1);
        }
    };

    let addr = config.bind_addr;
    info!("Starting server at http://{addr}");

    let server = Server::bind(addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
