//! Logging middleware
//!
//! Provides request logging functionality.

use log::info;

/// Log a client connection
pub fn log_connection(client_addr: &str) {
    info!("Client connected: {}", client_addr);
}

/// Log a client request line
pub fn log_request(client_addr: &str, line: &str) {
    info!("Client {} requested: {}", client_addr, line);
}

/// Log a client disconnection
pub fn log_disconnection(client_addr: &str) {
    info!("Client disconnected: {}", client_addr);
}
