//! Root context and resolved path types

use std::io;
use std::ops::Deref;
use std::path::{Path, PathBuf};

/// Immutable handle on the canonical server root directory.
///
/// Created once at startup and shared read-only by all operations.
#[derive(Debug, Clone)]
pub struct RootContext {
    root: PathBuf,
}

impl RootContext {
    /// Canonicalize the given directory and wrap it as the server root.
    ///
    /// Fails if the directory does not exist or cannot be canonicalized.
    pub fn new(root: impl AsRef<Path>) -> io::Result<Self> {
        let root = root.as_ref().canonicalize()?;
        if !root.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("server root is not a directory: {}", root.display()),
            ));
        }
        Ok(Self { root })
    }

    /// The canonical absolute root path
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// The root itself as a resolved path (for operations on `/`)
    pub fn as_resolved(&self) -> ResolvedPath {
        ResolvedPath::new(self.root.clone(), self.root.clone())
    }
}

/// An absolute path proven by the sandbox to lie within the server root.
///
/// Carries the root it was resolved against so paths derived from it (item
/// names within a batch) can be re-checked for containment. The only way to
/// obtain one is through [`RootContext::as_resolved`] or the resolution
/// functions in this module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    path: PathBuf,
    root: PathBuf,
}

impl ResolvedPath {
    pub(crate) fn new(path: PathBuf, root: PathBuf) -> Self {
        ResolvedPath { path, root }
    }

    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// The canonical root this path was resolved against
    pub(crate) fn root(&self) -> &Path {
        &self.root
    }
}

impl Deref for ResolvedPath {
    type Target = Path;

    fn deref(&self) -> &Path {
        &self.path
    }
}

impl AsRef<Path> for ResolvedPath {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}
