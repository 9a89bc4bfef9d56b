pub mod archive;
pub mod batch;
pub mod config;
pub mod error;
pub mod files;
pub mod listing;
pub mod middleware;
pub mod protocol;
pub mod sandbox;
pub mod search;
pub mod server;
pub mod tree;

pub use config::ServerConfig;
pub use server::Server;
