//! Filedock - Entry Point
//!
//! A sandboxed file management server speaking line-delimited JSON over TCP.

use log::info;

use filedock::error::handlers::handle_error;
use filedock::{Server, ServerConfig};

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    info!("Launching filedock server...");

    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            handle_error(&e.into());
            std::process::exit(1);
        }
    };

    let server = match Server::new(config).await {
        Ok(server) => server,
        Err(e) => {
            handle_error(&e);
            std::process::exit(1);
        }
    };

    server.start().await;
}
