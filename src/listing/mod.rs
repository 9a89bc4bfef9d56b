//! Directory listing
//!
//! Non-recursive snapshots of folder contents with the metadata the client
//! UI renders: timestamps, file sizes, and per-folder direct file counts.

mod operations;
mod results;

pub use operations::list_directory;
pub use results::{DirListing, FileEntry, FolderEntry};
