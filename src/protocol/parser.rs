//! Request parsing
//!
//! Deserializes one line of client input into a [`Request`].

use crate::error::ServerError;
use crate::protocol::commands::Request;

/// Parse a single request line.
pub fn parse_request(line: &str) -> Result<Request, ServerError> {
    serde_json::from_str(line.trim()).map_err(|e| ServerError::Protocol(e.to_string()))
}
