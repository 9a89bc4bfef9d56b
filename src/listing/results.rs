//! Result types for listing operations

/// One subfolder in a directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderEntry {
    pub name: String,
    /// Last-modified time, seconds since the Unix epoch
    pub modified: u64,
    /// Number of direct file children
    pub child_count: usize,
}

/// One file in a directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    /// Last-modified time, seconds since the Unix epoch
    pub modified: u64,
    /// Size in bytes
    pub size: u64,
}

/// Snapshot of one directory's immediate children
#[derive(Debug, Clone, Default)]
pub struct DirListing {
    pub folders: Vec<FolderEntry>,
    pub files: Vec<FileEntry>,
}
