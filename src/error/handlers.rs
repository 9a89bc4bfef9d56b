//! Error handlers
//!
//! Maps engine errors onto the wire-level error kinds reported to clients.

use crate::error::types::{FsOpError, ServerError};
use log::error;

/// Log a server-level error
pub fn handle_error(err: &ServerError) {
    error!("Server error: {}", err);
}

/// Stable wire identifier for a filesystem error kind
pub fn error_kind(err: &FsOpError) -> &'static str {
    match err {
        FsOpError::NotFound(_) => "not_found",
        FsOpError::NotADirectory(_) => "not_a_directory",
        FsOpError::AlreadyExists(_) => "already_exists",
        FsOpError::TypeMismatch { .. } => "type_mismatch",
        FsOpError::Traversal(_) => "traversal",
        FsOpError::InvalidName(_) => "invalid_name",
        FsOpError::Io(_) => "io",
    }
}
