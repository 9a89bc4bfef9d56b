//! Zip archive builder
//!
//! Bundles selected files and folders into a single zip buffer for
//! download. Items missing at resolution time produce no entry and no
//! error; callers wanting strict validation must pre-check existence.

mod operations;

pub use operations::build_archive;
