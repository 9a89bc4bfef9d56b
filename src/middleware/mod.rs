//! Server middleware
//!
//! Provides connection and request logging middleware.

pub mod logging;
