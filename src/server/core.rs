use log::{error, info, warn};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::middleware::logging;
use crate::protocol::{Response, handle_request, parse_request};
use crate::sandbox::RootContext;

pub struct Server {
    listener: TcpListener,
    root: Arc<RootContext>,
    config: Arc<ServerConfig>,
}

impl Server {
    /// Binds the control socket and pins the sandbox root. The root
    /// directory is created if it does not exist yet.
    pub async fn new(config: ServerConfig) -> Result<Self, ServerError> {
        std::fs::create_dir_all(config.root_dir_path())?;
        let root = RootContext::new(config.root_dir_path())?;
        info!("Serving root directory: {}", root.path().display());

        let socket = config.control_socket();
        let listener = TcpListener::bind(&socket).await?;
        info!("Server bound to {}", socket);

        Ok(Self {
            listener,
            root: Arc::new(root),
            config: Arc::new(config),
        })
    }

    /// The address the control socket actually bound to
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub async fn start(&self) {
        info!("Starting filedock server on {}", self.config.control_socket());

        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    let root = Arc::clone(&self.root);
                    let config = Arc::clone(&self.config);

                    // Spawn a task for each client so accept loop doesn't block
                    tokio::spawn(async move {
                        if let Err(e) = handle_connection(stream, addr, root, config).await {
                            warn!("Connection {} ended with error: {}", addr, e);
                        }
                    });
                }
                Err(e) => {
                    error!("Error accepting connection: {}", e);
                }
            }
        }
    }
}

/// Runs one client session: reads line-delimited JSON requests and writes
/// one JSON response line per request until the client quits or hangs up.
async fn handle_connection(
    stream: TcpStream,
    client_addr: SocketAddr,
    root: Arc<RootContext>,
    config: Arc<ServerConfig>,
) -> Result<(), std::io::Error> {
    logging::log_connection(&client_addr.to_string());

    let mut reader = BufReader::new(stream);
    let mut line = String::new();

    loop {
        line.clear();
        // Cap the read itself so an endless newline-free stream cannot grow
        // the buffer past the limit
        let n = (&mut reader)
            .take(config.max_request_bytes as u64 + 1)
            .read_line(&mut line)
            .await?;
        if n == 0 {
            logging::log_disconnection(&client_addr.to_string());
            return Ok(());
        }

        if line.len() > config.max_request_bytes {
            let response = Response::Error {
                kind: "too_large",
                message: format!("request exceeds {} bytes", config.max_request_bytes),
            };
            write_response(&mut reader, &response).await?;
            return Ok(());
        }

        if line.trim().is_empty() {
            continue;
        }
        logging::log_request(&client_addr.to_string(), line.trim());

        let result = match parse_request(&line) {
            Ok(request) => {
                // Engine calls are blocking filesystem work; keep them off
                // the runtime workers so one large copy or archive cannot
                // stall other connections
                let task_root = Arc::clone(&root);
                let task_config = Arc::clone(&config);
                tokio::task::spawn_blocking(move || {
                    handle_request(&task_root, &task_config, request)
                })
                .await
                .map_err(std::io::Error::other)?
            }
            Err(e) => {
                warn!("Client {} sent unparseable request: {}", client_addr, e);
                let response = Response::Error {
                    kind: "bad_request",
                    message: e.to_string(),
                };
                write_response(&mut reader, &response).await?;
                continue;
            }
        };

        write_response(&mut reader, &result.response).await?;

        if result.close {
            logging::log_disconnection(&client_addr.to_string());
            return Ok(());
        }
    }
}

async fn write_response(
    reader: &mut BufReader<TcpStream>,
    response: &Response,
) -> Result<(), std::io::Error> {
    let mut payload = serde_json::to_string(response).map_err(std::io::Error::other)?;
    payload.push('\n');
    reader.get_mut().write_all(payload.as_bytes()).await?;
    reader.get_mut().flush().await?;
    Ok(())
}
