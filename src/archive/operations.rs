//! Archive operations implementation

use log::info;
use std::fs::File;
use std::io::{self, Cursor};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::batch::{Item, ItemKind};
use crate::error::FsOpError;
use crate::sandbox::{ResolvedPath, resolve_item};

/// Builds a complete zip buffer from the named items under `base`.
///
/// A FILE item becomes one entry named by its bare name. A FOLDER item
/// contributes one entry per file beneath it, named `item/<relative path>`
/// with the nested layout preserved. Items that are missing (or whose kind
/// does not match what is on disk) are skipped silently. Item names still
/// go through the sandbox; a traversal attempt rejects the whole archive.
pub fn build_archive(base: &ResolvedPath, items: &[Item]) -> Result<Vec<u8>, FsOpError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut entries = 0usize;

    for item in items {
        let path = resolve_item(base, &item.name)?;

        match item.kind {
            ItemKind::File => {
                if !path.is_file() {
                    continue;
                }
                add_file_entry(&mut writer, options, path.as_path(), &item.name)?;
                entries += 1;
            }
            ItemKind::Folder => {
                if !path.is_dir() {
                    continue;
                }
                for entry in WalkDir::new(path.as_path()).follow_links(false) {
                    let entry = entry.map_err(|e| {
                        FsOpError::Io(io::Error::other(e))
                    })?;
                    if !entry.file_type().is_file() {
                        continue;
                    }
                    let relative = entry
                        .path()
                        .strip_prefix(path.as_path())
                        .unwrap_or(entry.path())
                        .to_string_lossy()
                        .replace('\\', "/");
                    let entry_name = format!("{}/{}", item.name, relative);
                    add_file_entry(&mut writer, options, entry.path(), &entry_name)?;
                    entries += 1;
                }
            }
        }
    }

    let cursor = writer
        .finish()
        .map_err(|e| FsOpError::Io(io::Error::other(e)))?;

    info!(
        "Built archive under {}: {} items requested, {} entries",
        base.display(),
        items.len(),
        entries
    );

    Ok(cursor.into_inner())
}

fn add_file_entry(
    writer: &mut ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
    path: &std::path::Path,
    entry_name: &str,
) -> Result<(), FsOpError> {
    writer
        .start_file(entry_name, options)
        .map_err(|e| FsOpError::Io(io::Error::other(e)))?;
    let mut source = File::open(path)?;
    io::copy(&mut source, writer)?;
    Ok(())
}
