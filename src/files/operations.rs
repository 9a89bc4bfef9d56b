//! Single-file operations implementation

use log::{error, info};
use std::fs::{self, File};
use std::io::Write;

use crate::error::FsOpError;
use crate::sandbox::{ResolvedPath, resolve_item};

/// Saves uploaded content as `name` inside `dir`, replacing any existing
/// file with that name.
///
/// The content is written to a `<name>.tmp` sibling first and renamed over
/// the final name, so a failed upload never leaves a truncated file behind.
/// The temp file is removed on every failure path.
pub fn save_file(dir: &ResolvedPath, name: &str, content: &[u8]) -> Result<(), FsOpError> {
    let target = resolve_item(dir, name)?;
    if !dir.is_dir() {
        return Err(FsOpError::NotADirectory(dir.display().to_string()));
    }
    if target.is_dir() {
        return Err(FsOpError::AlreadyExists(name.to_string()));
    }

    let temp = resolve_item(dir, &format!("{}.tmp", name))?;

    let mut temp_file = File::create(temp.as_path())?;
    if let Err(e) = temp_file.write_all(content).and_then(|_| temp_file.flush()) {
        error!("Upload of {} failed mid-write: {}", name, e);
        drop(temp_file);
        let _ = fs::remove_file(temp.as_path());
        return Err(FsOpError::Io(e));
    }
    drop(temp_file);

    if let Err(e) = fs::rename(temp.as_path(), target.as_path()) {
        let _ = fs::remove_file(temp.as_path());
        return Err(FsOpError::Io(e));
    }

    info!("Saved {} bytes to {}", content.len(), target.display());
    Ok(())
}

/// Creates a new folder named `name` inside `dir`.
pub fn create_folder(dir: &ResolvedPath, name: &str) -> Result<(), FsOpError> {
    let target = resolve_item(dir, name)?;
    if !dir.is_dir() {
        return Err(FsOpError::NotADirectory(dir.display().to_string()));
    }
    if target.exists() {
        return Err(FsOpError::AlreadyExists(name.to_string()));
    }

    fs::create_dir(target.as_path())?;
    info!("Created folder {}", target.display());
    Ok(())
}
