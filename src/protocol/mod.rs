//! Wire protocol implementation
//!
//! Handles request parsing, dispatch to the engine, and response generation.

pub mod commands;
pub mod handlers;
pub mod parser;
pub mod responses;
pub mod translators;

pub use commands::{Request, RequestResult};
pub use handlers::handle_request;
pub use parser::parse_request;
pub use responses::Response;
