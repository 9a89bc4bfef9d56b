//! Search operations implementation

use log::{info, warn};
use walkdir::WalkDir;

use crate::error::FsOpError;
use crate::sandbox::ResolvedPath;
use crate::search::pattern::{prepare_pattern, wildcard_match};
use crate::search::results::SearchHit;

/// Recursively searches `dir` for files whose name matches `pattern`.
///
/// Matching is case-insensitive; `*` and `?` wildcards are supported and a
/// pattern without wildcards is treated as a substring search. An empty
/// pattern yields an empty result. No result cap is applied.
pub fn search_files(dir: &ResolvedPath, pattern: &str) -> Result<Vec<SearchHit>, FsOpError> {
    let Some(prepared) = prepare_pattern(pattern) else {
        return Ok(Vec::new());
    };

    if !dir.exists() {
        return Err(FsOpError::NotFound(dir.display().to_string()));
    }
    if !dir.is_dir() {
        return Err(FsOpError::NotADirectory(dir.display().to_string()));
    }

    let mut hits = Vec::new();

    for entry in WalkDir::new(dir.as_path()).follow_links(false) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("Skipping unreadable entry during search: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        if !wildcard_match(&prepared, &name.to_lowercase()) {
            continue;
        }

        let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
        let path = entry
            .path()
            .strip_prefix(dir.as_path())
            .unwrap_or(entry.path())
            .to_string_lossy()
            .replace('\\', "/");

        hits.push(SearchHit { name, path, size });
    }

    info!(
        "Search for {:?} under {} - {} hits",
        pattern,
        dir.display(),
        hits.len()
    );

    Ok(hits)
}
