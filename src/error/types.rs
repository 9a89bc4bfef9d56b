//! Error types
//!
//! Defines domain-specific error types for each module of the file server.

use std::fmt;
use std::io;

/// Path sandbox errors
///
/// Produced while turning a client-supplied relative path into a validated
/// absolute path. A `Traversal` error always rejects the whole operation.
#[derive(Debug)]
pub enum SandboxError {
    /// Resolved path escapes the server root
    Traversal(String),
    /// Item name is empty, `.`/`..`, or carries a path separator
    InvalidName(String),
    Io(io::Error),
}

impl fmt::Display for SandboxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SandboxError::Traversal(p) => write!(f, "Path traversal attempt: {}", p),
            SandboxError::InvalidName(n) => write!(f, "Invalid item name: {}", n),
            SandboxError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for SandboxError {}

impl From<io::Error> for SandboxError {
    fn from(error: io::Error) -> Self {
        SandboxError::Io(error)
    }
}

/// Filesystem operation errors
///
/// Covers listing, search, batch, tree, archive, and single-file operations.
#[derive(Debug)]
pub enum FsOpError {
    NotFound(String),
    NotADirectory(String),
    AlreadyExists(String),
    /// Caller-asserted item kind disagrees with the actual entry type
    TypeMismatch { name: String, expected: &'static str },
    Traversal(String),
    InvalidName(String),
    Io(io::Error),
}

impl fmt::Display for FsOpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FsOpError::NotFound(p) => write!(f, "Not found: {}", p),
            FsOpError::NotADirectory(p) => write!(f, "Not a directory: {}", p),
            FsOpError::AlreadyExists(p) => write!(f, "Already exists: {}", p),
            FsOpError::TypeMismatch { name, expected } => {
                write!(f, "Type mismatch: {} is not a {}", name, expected)
            }
            FsOpError::Traversal(p) => write!(f, "Path traversal attempt: {}", p),
            FsOpError::InvalidName(n) => write!(f, "Invalid item name: {}", n),
            FsOpError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for FsOpError {}

impl From<io::Error> for FsOpError {
    fn from(error: io::Error) -> Self {
        FsOpError::Io(error)
    }
}

impl From<SandboxError> for FsOpError {
    fn from(error: SandboxError) -> Self {
        match error {
            SandboxError::Traversal(p) => FsOpError::Traversal(p),
            SandboxError::InvalidName(n) => FsOpError::InvalidName(n),
            SandboxError::Io(e) => FsOpError::Io(e),
        }
    }
}

/// General server error that encompasses all error types
#[derive(Debug)]
pub enum ServerError {
    Fs(FsOpError),
    Config(config::ConfigError),
    Protocol(String),
    IoError(io::Error),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Fs(e) => write!(f, "Filesystem error: {}", e),
            ServerError::Config(e) => write!(f, "Configuration error: {}", e),
            ServerError::Protocol(e) => write!(f, "Protocol error: {}", e),
            ServerError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<FsOpError> for ServerError {
    fn from(error: FsOpError) -> Self {
        ServerError::Fs(error)
    }
}

impl From<config::ConfigError> for ServerError {
    fn from(error: config::ConfigError) -> Self {
        ServerError::Config(error)
    }
}

impl From<io::Error> for ServerError {
    fn from(error: io::Error) -> Self {
        ServerError::IoError(error)
    }
}
