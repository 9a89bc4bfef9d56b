//! Batch operations implementation
//!
//! Every item resolves through the sandbox before anything is touched, and
//! for move/copy both the source and the destination side resolve
//! independently. The caller-asserted item kind is always cross-checked
//! against the actual entry type.

use log::{info, warn};
use std::fs;

use crate::batch::results::{BatchResult, Item, ItemKind};
use crate::error::FsOpError;
use crate::sandbox::{ResolvedPath, resolve_item};
use crate::tree::{copy_tree, delete_tree};

/// Deletes each named item under `base`, continuing past per-item failures.
pub fn delete_all(base: &ResolvedPath, items: &[Item]) -> BatchResult {
    let mut result = BatchResult::default();
    for item in items {
        let outcome = delete_one(base, item);
        if let Err(e) = &outcome {
            warn!("Delete failed for {}: {}", item.name, e);
        }
        result.record(item, outcome);
    }
    info!(
        "Batch delete under {}: {} items, {} failed",
        base.display(),
        result.reports.len(),
        result.failed_count()
    );
    result
}

/// Moves each named item from `source_base` into `dest_base`.
///
/// A FILE replaces any existing destination file. A FOLDER replaces an
/// existing destination folder entirely: the old tree is deleted first,
/// then the source is renamed into place. Folder merge is not supported.
pub fn move_all(source_base: &ResolvedPath, dest_base: &ResolvedPath, items: &[Item]) -> BatchResult {
    let mut result = BatchResult::default();
    for item in items {
        let outcome = move_one(source_base, dest_base, item);
        if let Err(e) = &outcome {
            warn!("Move failed for {}: {}", item.name, e);
        }
        result.record(item, outcome);
    }
    info!(
        "Batch move {} -> {}: {} items, {} failed",
        source_base.display(),
        dest_base.display(),
        result.reports.len(),
        result.failed_count()
    );
    result
}

/// Copies each named item from `source_base` into `dest_base`.
///
/// A FILE copy overwrites any existing destination file. A FOLDER copy
/// merges into a pre-existing destination tree, overwriting same-named
/// files and leaving unrelated files in place. Intentionally asymmetric
/// with move's replace-the-destination policy.
pub fn copy_all(source_base: &ResolvedPath, dest_base: &ResolvedPath, items: &[Item]) -> BatchResult {
    let mut result = BatchResult::default();
    for item in items {
        let outcome = copy_one(source_base, dest_base, item);
        if let Err(e) = &outcome {
            warn!("Copy failed for {}: {}", item.name, e);
        }
        result.record(item, outcome);
    }
    info!(
        "Batch copy {} -> {}: {} items, {} failed",
        source_base.display(),
        dest_base.display(),
        result.reports.len(),
        result.failed_count()
    );
    result
}

/// Renames one item in place: a same-directory move.
///
/// For a FOLDER the new name must be free; an occupied name fails with
/// AlreadyExists. For a FILE an existing destination file is silently
/// overwritten by the rename primitive's replace semantics.
pub fn rename_one(
    base: &ResolvedPath,
    old_name: &str,
    new_name: &str,
    kind: ItemKind,
) -> Result<(), FsOpError> {
    let source = resolve_item(base, old_name)?;
    let dest = resolve_item(base, new_name)?;

    check_kind(&source, old_name, kind)?;

    match kind {
        ItemKind::Folder => {
            if dest.exists() {
                return Err(FsOpError::AlreadyExists(new_name.to_string()));
            }
        }
        ItemKind::File => {
            if dest.is_dir() {
                return Err(FsOpError::AlreadyExists(new_name.to_string()));
            }
        }
    }

    fs::rename(source.as_path(), dest.as_path())?;
    info!("Renamed {} -> {} in {}", old_name, new_name, base.display());
    Ok(())
}

fn delete_one(base: &ResolvedPath, item: &Item) -> Result<(), FsOpError> {
    let target = resolve_item(base, &item.name)?;
    check_kind(&target, &item.name, item.kind)?;
    match item.kind {
        ItemKind::File => {
            fs::remove_file(target.as_path())?;
            Ok(())
        }
        ItemKind::Folder => delete_tree(&target),
    }
}

fn move_one(
    source_base: &ResolvedPath,
    dest_base: &ResolvedPath,
    item: &Item,
) -> Result<(), FsOpError> {
    let source = resolve_item(source_base, &item.name)?;
    let dest = resolve_item(dest_base, &item.name)?;
    check_kind(&source, &item.name, item.kind)?;

    match item.kind {
        ItemKind::File => {
            if dest.is_dir() {
                return Err(FsOpError::AlreadyExists(item.name.clone()));
            }
        }
        ItemKind::Folder => {
            if dest.is_dir() {
                // Destructive replace, not a merge
                delete_tree(&dest)?;
            } else if dest.exists() {
                return Err(FsOpError::AlreadyExists(item.name.clone()));
            }
        }
    }

    fs::rename(source.as_path(), dest.as_path())?;
    Ok(())
}

fn copy_one(
    source_base: &ResolvedPath,
    dest_base: &ResolvedPath,
    item: &Item,
) -> Result<(), FsOpError> {
    let source = resolve_item(source_base, &item.name)?;
    let dest = resolve_item(dest_base, &item.name)?;
    check_kind(&source, &item.name, item.kind)?;

    match item.kind {
        ItemKind::File => {
            if dest.is_dir() {
                return Err(FsOpError::AlreadyExists(item.name.clone()));
            }
            fs::copy(source.as_path(), dest.as_path())?;
            Ok(())
        }
        ItemKind::Folder => copy_tree(&source, &dest),
    }
}

/// The caller-asserted kind must match what is actually on disk.
fn check_kind(target: &ResolvedPath, name: &str, kind: ItemKind) -> Result<(), FsOpError> {
    if !target.exists() {
        return Err(FsOpError::NotFound(name.to_string()));
    }
    let matches = match kind {
        ItemKind::File => target.is_file(),
        ItemKind::Folder => target.is_dir(),
    };
    if matches {
        Ok(())
    } else {
        Err(FsOpError::TypeMismatch {
            name: name.to_string(),
            expected: kind.label(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sandbox::{RootContext, resolve};
    use tempfile::TempDir;

    fn file_item(name: &str) -> Item {
        Item {
            name: name.to_string(),
            kind: ItemKind::File,
        }
    }

    fn folder_item(name: &str) -> Item {
        Item {
            name: name.to_string(),
            kind: ItemKind::Folder,
        }
    }

    fn batch_root() -> (TempDir, RootContext) {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("src/folder/inner")).unwrap();
        fs::create_dir_all(temp.path().join("dst")).unwrap();
        fs::write(temp.path().join("src/one.txt"), "one").unwrap();
        fs::write(temp.path().join("src/two.txt"), "two").unwrap();
        fs::write(temp.path().join("src/folder/f.txt"), "eff").unwrap();
        fs::write(temp.path().join("src/folder/inner/g.txt"), "gee").unwrap();
        let root = RootContext::new(temp.path()).unwrap();
        (temp, root)
    }

    #[test]
    fn test_delete_all_isolates_missing_item() {
        let (temp, root) = batch_root();
        let base = resolve(&root, "src").unwrap();
        let items = vec![
            file_item("one.txt"),
            file_item("missing.txt"),
            file_item("two.txt"),
        ];

        let result = delete_all(&base, &items);

        assert_eq!(result.reports.len(), 3);
        assert!(result.reports[0].succeeded());
        assert!(matches!(
            result.reports[1].outcome,
            Err(FsOpError::NotFound(_))
        ));
        assert!(result.reports[2].succeeded());
        assert!(!temp.path().join("src/one.txt").exists());
        assert!(!temp.path().join("src/two.txt").exists());
    }

    #[test]
    fn test_delete_all_kind_mismatch() {
        let (temp, root) = batch_root();
        let base = resolve(&root, "src").unwrap();

        let result = delete_all(&base, &[file_item("folder")]);
        assert!(matches!(
            result.reports[0].outcome,
            Err(FsOpError::TypeMismatch { .. })
        ));
        assert!(temp.path().join("src/folder").exists());
    }

    #[test]
    fn test_move_file_overwrites_destination() {
        let (temp, root) = batch_root();
        fs::write(temp.path().join("dst/one.txt"), "stale").unwrap();
        let src = resolve(&root, "src").unwrap();
        let dst = resolve(&root, "dst").unwrap();

        let result = move_all(&src, &dst, &[file_item("one.txt")]);

        assert!(result.all_succeeded());
        assert!(!temp.path().join("src/one.txt").exists());
        assert_eq!(
            fs::read_to_string(temp.path().join("dst/one.txt")).unwrap(),
            "one"
        );
    }

    #[test]
    fn test_move_folder_replaces_destination_entirely() {
        let (temp, root) = batch_root();
        fs::create_dir_all(temp.path().join("dst/folder")).unwrap();
        fs::write(temp.path().join("dst/folder/stale.txt"), "stale").unwrap();
        let src = resolve(&root, "src").unwrap();
        let dst = resolve(&root, "dst").unwrap();

        let result = move_all(&src, &dst, &[folder_item("folder")]);

        assert!(result.all_succeeded());
        // Old contents gone, moved contents present
        assert!(!temp.path().join("dst/folder/stale.txt").exists());
        assert!(temp.path().join("dst/folder/f.txt").exists());
        assert!(temp.path().join("dst/folder/inner/g.txt").exists());
        assert!(!temp.path().join("src/folder").exists());
    }

    #[test]
    fn test_copy_folder_merges_into_destination() {
        let (temp, root) = batch_root();
        fs::create_dir_all(temp.path().join("dst/folder")).unwrap();
        fs::write(temp.path().join("dst/folder/keep.txt"), "kept").unwrap();
        fs::write(temp.path().join("dst/folder/f.txt"), "stale").unwrap();
        let src = resolve(&root, "src").unwrap();
        let dst = resolve(&root, "dst").unwrap();

        let result = copy_all(&src, &dst, &[folder_item("folder")]);

        assert!(result.all_succeeded());
        // Unrelated file survives, same-named file overwritten, source intact
        assert!(temp.path().join("dst/folder/keep.txt").exists());
        assert_eq!(
            fs::read_to_string(temp.path().join("dst/folder/f.txt")).unwrap(),
            "eff"
        );
        assert!(temp.path().join("src/folder/f.txt").exists());
    }

    #[test]
    fn test_copy_file_overwrites_and_continues_past_failure() {
        let (temp, root) = batch_root();
        fs::write(temp.path().join("dst/one.txt"), "stale").unwrap();
        let src = resolve(&root, "src").unwrap();
        let dst = resolve(&root, "dst").unwrap();

        let items = vec![file_item("missing.txt"), file_item("one.txt")];
        let result = copy_all(&src, &dst, &items);

        assert_eq!(result.failed_count(), 1);
        assert!(result.reports[1].succeeded());
        assert_eq!(
            fs::read_to_string(temp.path().join("dst/one.txt")).unwrap(),
            "one"
        );
        assert!(temp.path().join("src/one.txt").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_refuses_symlink_pointing_outside_root() {
        let (temp, root) = batch_root();
        let outside = TempDir::new().unwrap();
        fs::write(outside.path().join("secret.txt"), "outside-data").unwrap();
        std::os::unix::fs::symlink(outside.path(), temp.path().join("src/leak")).unwrap();

        let src = resolve(&root, "src").unwrap();
        let dst = resolve(&root, "dst").unwrap();
        let result = copy_all(&src, &dst, &[folder_item("leak")]);

        assert!(matches!(
            result.reports[0].outcome,
            Err(FsOpError::Traversal(_))
        ));
        assert!(!temp.path().join("dst/leak").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_move_refuses_symlink_pointing_outside_root() {
        let (temp, root) = batch_root();
        let outside = TempDir::new().unwrap();
        fs::write(outside.path().join("payload.txt"), "x").unwrap();
        std::os::unix::fs::symlink(
            outside.path().join("payload.txt"),
            temp.path().join("src/leak.txt"),
        )
        .unwrap();

        let src = resolve(&root, "src").unwrap();
        let dst = resolve(&root, "dst").unwrap();
        let result = move_all(&src, &dst, &[file_item("leak.txt")]);

        assert!(matches!(
            result.reports[0].outcome,
            Err(FsOpError::Traversal(_))
        ));
        assert!(outside.path().join("payload.txt").exists());
        assert!(!temp.path().join("dst/leak.txt").exists());
    }

    #[test]
    fn test_batch_rejects_separator_in_item_name() {
        let (temp, root) = batch_root();
        let base = resolve(&root, "src").unwrap();

        let result = delete_all(&base, &[file_item("../one.txt")]);
        assert!(matches!(
            result.reports[0].outcome,
            Err(FsOpError::InvalidName(_))
        ));
        assert!(temp.path().join("src/one.txt").exists());
    }

    #[test]
    fn test_rename_file_overwrites_existing() {
        let (temp, root) = batch_root();
        let base = resolve(&root, "src").unwrap();

        rename_one(&base, "one.txt", "two.txt", ItemKind::File).unwrap();
        assert!(!temp.path().join("src/one.txt").exists());
        assert_eq!(
            fs::read_to_string(temp.path().join("src/two.txt")).unwrap(),
            "one"
        );
    }

    #[test]
    fn test_rename_folder_to_occupied_name_fails() {
        let (temp, root) = batch_root();
        fs::create_dir_all(temp.path().join("src/other")).unwrap();
        let base = resolve(&root, "src").unwrap();

        let result = rename_one(&base, "folder", "other", ItemKind::Folder);
        assert!(matches!(result, Err(FsOpError::AlreadyExists(_))));
        assert!(temp.path().join("src/folder").exists());
    }

    #[test]
    fn test_rename_missing_item_fails() {
        let (_temp, root) = batch_root();
        let base = resolve(&root, "src").unwrap();
        let result = rename_one(&base, "ghost.txt", "fresh.txt", ItemKind::File);
        assert!(matches!(result, Err(FsOpError::NotFound(_))));
    }
}
