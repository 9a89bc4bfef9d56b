//! Listing operations implementation

use log::{info, warn};
use std::fs;
use std::path::Path;
use std::time::UNIX_EPOCH;

use crate::error::FsOpError;
use crate::listing::results::{DirListing, FileEntry, FolderEntry};
use crate::sandbox::ResolvedPath;

/// Lists the immediate children of a directory.
///
/// Subfolders report name, last-modified time, and the count of their direct
/// file children; files report name, last-modified time, and size. Entries
/// are sorted case-insensitively by name so listings are reproducible.
pub fn list_directory(dir: &ResolvedPath) -> Result<DirListing, FsOpError> {
    if !dir.exists() {
        return Err(FsOpError::NotFound(dir.display().to_string()));
    }
    if !dir.is_dir() {
        return Err(FsOpError::NotADirectory(dir.display().to_string()));
    }

    let mut listing = DirListing::default();

    for entry in fs::read_dir(dir.as_path())? {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().to_string();
        let metadata = match entry.metadata() {
            Ok(m) => m,
            Err(e) => {
                warn!("Skipping {} (metadata failed): {}", name, e);
                continue;
            }
        };

        let modified = metadata
            .modified()
            .ok()
            .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
            .map(|dur| dur.as_secs())
            .unwrap_or(0);

        if metadata.is_dir() {
            listing.folders.push(FolderEntry {
                child_count: count_direct_files(&entry.path()),
                name,
                modified,
            });
        } else {
            listing.files.push(FileEntry {
                name,
                modified,
                size: metadata.len(),
            });
        }
    }

    listing
        .folders
        .sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    listing
        .files
        .sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    info!(
        "Listed {} - {} folders, {} files",
        dir.display(),
        listing.folders.len(),
        listing.files.len()
    );

    Ok(listing)
}

/// Direct file children of a subfolder. One extra enumeration per folder,
/// accepted for UI purposes; unreadable folders report zero.
fn count_direct_files(dir: &Path) -> usize {
    match fs::read_dir(dir) {
        Ok(entries) => entries
            .flatten()
            .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
            .count(),
        Err(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sandbox::{RootContext, resolve};
    use tempfile::TempDir;

    #[test]
    fn test_list_directory_reports_files_and_folders() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("sub/a.txt"), "aa").unwrap();
        fs::write(temp.path().join("sub/b.txt"), "bb").unwrap();
        fs::write(temp.path().join("notes.txt"), "hello").unwrap();

        let root = RootContext::new(temp.path()).unwrap();
        let listing = list_directory(&root.as_resolved()).unwrap();

        assert_eq!(listing.folders.len(), 1);
        assert_eq!(listing.folders[0].name, "sub");
        assert_eq!(listing.folders[0].child_count, 2);

        assert_eq!(listing.files.len(), 1);
        assert_eq!(listing.files[0].name, "notes.txt");
        assert_eq!(listing.files[0].size, 5);
        assert!(listing.files[0].modified > 0);
    }

    #[test]
    fn test_list_directory_sorted_case_insensitively() {
        let temp = TempDir::new().unwrap();
        for name in ["Zebra.txt", "apple.txt", "Mango.txt"] {
            fs::write(temp.path().join(name), "x").unwrap();
        }

        let root = RootContext::new(temp.path()).unwrap();
        let listing = list_directory(&root.as_resolved()).unwrap();
        let names: Vec<&str> = listing.files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["apple.txt", "Mango.txt", "Zebra.txt"]);
    }

    #[test]
    fn test_list_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let root = RootContext::new(temp.path()).unwrap();
        let missing = resolve(&root, "absent").unwrap();

        let result = list_directory(&missing);
        assert!(matches!(result, Err(FsOpError::NotFound(_))));
    }

    #[test]
    fn test_list_file_path_fails() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("plain.txt"), "x").unwrap();
        let root = RootContext::new(temp.path()).unwrap();
        let file = resolve(&root, "plain.txt").unwrap();

        let result = list_directory(&file);
        assert!(matches!(result, Err(FsOpError::NotADirectory(_))));
    }
}
