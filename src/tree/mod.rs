//! Recursive tree operations
//!
//! Folder-level copy and delete primitives used by the batch executor.
//! Neither operation is transactional: a failure partway through leaves a
//! partially copied or partially deleted tree for the caller to report.

mod operations;

pub use operations::{copy_tree, delete_tree};
