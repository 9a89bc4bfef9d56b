//! Single-file operations
//!
//! Upload (save a byte stream into a directory) and folder creation. Both
//! are single-target operations that fail the whole call on first error.

mod operations;

pub use operations::{create_folder, save_file};
