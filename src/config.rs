//! Configuration management for the file server
//!
//! Loads settings from `config.toml` with `FILEDOCK_*` environment
//! overrides. All values are validated once at startup; the root directory
//! is canonicalized into a `RootContext` before the server starts.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Server configuration, loaded once at startup
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// IP address to bind the control socket
    pub bind_address: String,

    /// Port for the control socket
    pub port: u16,

    /// Root directory all client-visible paths are confined to
    pub root_dir: String,

    /// Maximum accepted upload size in MB
    pub max_upload_mb: u64,

    /// Maximum accepted request line length in bytes
    pub max_request_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from `config.toml` (optional) with environment
    /// overrides, falling back to built-in defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .set_default("bind_address", "127.0.0.1")?
            .set_default("port", 7010)?
            .set_default("root_dir", "./server_root")?
            .set_default("max_upload_mb", 100)?
            .set_default("max_request_bytes", 1024 * 1024)?
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("FILEDOCK"))
            .build()?;

        let config: ServerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.port == 0 {
            return Err(config::ConfigError::Message("port cannot be 0".into()));
        }
        if self.root_dir.is_empty() {
            return Err(config::ConfigError::Message(
                "root_dir cannot be empty".into(),
            ));
        }
        if self.max_upload_mb == 0 {
            return Err(config::ConfigError::Message(
                "max_upload_mb must be greater than 0".into(),
            ));
        }
        if self.max_request_bytes < 1024 {
            return Err(config::ConfigError::Message(
                "max_request_bytes must be at least 1024".into(),
            ));
        }
        Ok(())
    }

    /// Bind address and port as a socket address string
    pub fn control_socket(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    /// Root directory as a path
    pub fn root_dir_path(&self) -> PathBuf {
        PathBuf::from(&self.root_dir)
    }

    /// Maximum upload size in bytes
    pub fn max_upload_bytes(&self) -> u64 {
        self.max_upload_mb * 1024 * 1024
    }
}
