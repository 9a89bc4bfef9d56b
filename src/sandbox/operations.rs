//! Path resolution and validation

use std::path::{Component, Path, PathBuf};

use crate::error::SandboxError;
use crate::sandbox::{ResolvedPath, RootContext};

/// Resolve a client-supplied relative path against the server root.
///
/// Separators are normalized to `/`, `.` segments are dropped, and the result
/// is canonicalized so that symlinks cannot smuggle the path outside the
/// root. Absolute paths, drive prefixes, and any `..` segment are rejected
/// with a traversal error. The target itself does not have to exist; its
/// nearest existing ancestor is what gets canonicalized.
pub fn resolve(root: &RootContext, relative: &str) -> Result<ResolvedPath, SandboxError> {
    let normalized = relative.replace('\\', "/");

    if has_drive_prefix(&normalized) {
        return Err(SandboxError::Traversal(relative.to_string()));
    }

    let mut clean = PathBuf::new();
    for component in Path::new(&normalized).components() {
        match component {
            Component::Normal(part) => clean.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(SandboxError::Traversal(relative.to_string()));
            }
        }
    }

    let joined = root.path().join(&clean);
    let canonical = canonicalize_allowing_missing(&joined)?;

    if canonical == root.path() || canonical.starts_with(root.path()) {
        Ok(ResolvedPath::new(canonical, root.path().to_path_buf()))
    } else {
        Err(SandboxError::Traversal(relative.to_string()))
    }
}

/// Resolve a single-segment item name within an already-resolved base.
///
/// Item names come from batch requests and must name a direct child of the
/// base directory. A name carrying a separator is itself a traversal vector
/// and is rejected, never joined. An existing target is canonicalized and
/// re-checked for containment, so a symlink child pointing outside the root
/// cannot act as a source or destination.
pub fn resolve_item(base: &ResolvedPath, name: &str) -> Result<ResolvedPath, SandboxError> {
    if name.is_empty() || name == "." || name == ".." {
        return Err(SandboxError::InvalidName(name.to_string()));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(SandboxError::InvalidName(name.to_string()));
    }

    let joined = base.join(name);
    let resolved = if joined.exists() {
        let canonical = joined.canonicalize()?;
        if canonical != base.root() && !canonical.starts_with(base.root()) {
            return Err(SandboxError::Traversal(name.to_string()));
        }
        canonical
    } else {
        joined
    };
    Ok(ResolvedPath::new(resolved, base.root().to_path_buf()))
}

/// Windows-style drive prefix (`C:...`), rejected regardless of host
fn has_drive_prefix(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Canonicalize a path whose tail may not exist yet.
///
/// Walks up to the nearest existing ancestor, canonicalizes it, then appends
/// the missing remainder. The remainder has already been component-checked,
/// so the lexical append cannot escape.
fn canonicalize_allowing_missing(path: &Path) -> Result<PathBuf, SandboxError> {
    if path.exists() {
        return Ok(path.canonicalize()?);
    }

    let mut missing: Vec<std::ffi::OsString> = Vec::new();
    let mut current = path;
    loop {
        if current.exists() {
            let mut canonical = current.canonicalize()?;
            for segment in missing.iter().rev() {
                canonical.push(segment);
            }
            return Ok(canonical);
        }
        match (current.file_name(), current.parent()) {
            (Some(name), Some(parent)) => {
                missing.push(name.to_os_string());
                current = parent;
            }
            _ => {
                return Err(SandboxError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("no existing ancestor for {}", path.display()),
                )));
            }
        }
    }
}
