//! Recursive file search
//!
//! Case-insensitive `*`/`?` wildcard matching over file names across an
//! entire subtree. Folders are never returned, only files.

mod operations;
mod pattern;
mod results;

pub use operations::search_files;
pub use pattern::{prepare_pattern, wildcard_match};
pub use results::SearchHit;
