//! Result types for search operations

/// One file matched by a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    /// Bare file name
    pub name: String,
    /// Path relative to the searched directory, `/`-separated
    pub path: String,
    /// Size in bytes
    pub size: u64,
}
