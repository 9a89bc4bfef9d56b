//! Server core functionality
//!
//! This module contains the accept loop and per-connection session handling.

pub mod core;

pub use core::Server;
