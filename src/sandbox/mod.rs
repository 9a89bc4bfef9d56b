//! Path sandbox
//!
//! Confines every client-visible path to the server root. All other modules
//! accept only [`ResolvedPath`] values produced here; raw client strings
//! never reach a filesystem primitive.

mod operations;
mod root;

pub use operations::{resolve, resolve_item};
pub use root::{ResolvedPath, RootContext};
