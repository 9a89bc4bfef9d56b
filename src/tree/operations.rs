//! Tree operations implementation

use log::info;
use std::fs;
use std::path::PathBuf;

use crate::error::FsOpError;
use crate::sandbox::ResolvedPath;

/// Copies the tree rooted at `src` into `dst`, merging into anything already
/// there.
///
/// Directories are created as needed, same-named files at the destination
/// are overwritten, unrelated destination files are left in place. Pre-order
/// and depth-first, driven by an explicit work stack so pathologically deep
/// trees cannot exhaust the call stack.
pub fn copy_tree(src: &ResolvedPath, dst: &ResolvedPath) -> Result<(), FsOpError> {
    if !src.is_dir() {
        return Err(FsOpError::NotADirectory(src.display().to_string()));
    }

    let mut stack: Vec<(PathBuf, PathBuf)> =
        vec![(src.as_path().to_path_buf(), dst.as_path().to_path_buf())];

    while let Some((from, to)) = stack.pop() {
        fs::create_dir_all(&to)?;

        for entry in fs::read_dir(&from)? {
            let entry = entry?;
            let target = to.join(entry.file_name());
            if entry.file_type()?.is_dir() {
                stack.push((entry.path(), target));
            } else {
                // fs::copy replaces an existing destination file
                fs::copy(entry.path(), &target)?;
            }
        }
    }

    info!("Copied tree {} -> {}", src.display(), dst.display());
    Ok(())
}

/// Removes `dir` and everything beneath it unconditionally.
pub fn delete_tree(dir: &ResolvedPath) -> Result<(), FsOpError> {
    if !dir.exists() {
        return Err(FsOpError::NotFound(dir.display().to_string()));
    }
    if !dir.is_dir() {
        return Err(FsOpError::NotADirectory(dir.display().to_string()));
    }
    fs::remove_dir_all(dir.as_path())?;
    info!("Deleted tree {}", dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::list_directory;
    use crate::sandbox::{RootContext, resolve};
    use tempfile::TempDir;

    fn root_with_tree() -> (TempDir, RootContext) {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("src/sub/deep")).unwrap();
        fs::write(temp.path().join("src/a.txt"), "alpha").unwrap();
        fs::write(temp.path().join("src/sub/b.txt"), "beta").unwrap();
        fs::write(temp.path().join("src/sub/deep/c.txt"), "gamma").unwrap();
        let root = RootContext::new(temp.path()).unwrap();
        (temp, root)
    }

    #[test]
    fn test_copy_tree_then_delete_source_preserves_layout() {
        let (temp, root) = root_with_tree();
        let src = resolve(&root, "src").unwrap();
        let dst = resolve(&root, "dst").unwrap();

        copy_tree(&src, &dst).unwrap();
        delete_tree(&src).unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("dst/a.txt")).unwrap(),
            "alpha"
        );
        assert_eq!(
            fs::read_to_string(temp.path().join("dst/sub/b.txt")).unwrap(),
            "beta"
        );
        assert_eq!(
            fs::read_to_string(temp.path().join("dst/sub/deep/c.txt")).unwrap(),
            "gamma"
        );
        assert!(!temp.path().join("src").exists());
    }

    #[test]
    fn test_copy_tree_merges_and_overwrites() {
        let (temp, root) = root_with_tree();
        fs::create_dir_all(temp.path().join("dst")).unwrap();
        fs::write(temp.path().join("dst/a.txt"), "stale").unwrap();
        fs::write(temp.path().join("dst/keep.txt"), "kept").unwrap();

        let src = resolve(&root, "src").unwrap();
        let dst = resolve(&root, "dst").unwrap();
        copy_tree(&src, &dst).unwrap();

        // Same-named file overwritten, unrelated file survives
        assert_eq!(
            fs::read_to_string(temp.path().join("dst/a.txt")).unwrap(),
            "alpha"
        );
        assert_eq!(
            fs::read_to_string(temp.path().join("dst/keep.txt")).unwrap(),
            "kept"
        );
    }

    #[test]
    fn test_delete_tree_then_list_fails() {
        let (_temp, root) = root_with_tree();
        let src = resolve(&root, "src").unwrap();

        delete_tree(&src).unwrap();
        let result = list_directory(&src);
        assert!(matches!(result, Err(FsOpError::NotFound(_))));
    }

    #[test]
    fn test_delete_missing_tree_fails() {
        let (_temp, root) = root_with_tree();
        let missing = resolve(&root, "absent").unwrap();
        assert!(matches!(
            delete_tree(&missing),
            Err(FsOpError::NotFound(_))
        ));
    }

    #[test]
    fn test_copy_tree_of_file_fails() {
        let (_temp, root) = root_with_tree();
        let file = resolve(&root, "src/a.txt").unwrap();
        let dst = resolve(&root, "dst").unwrap();
        assert!(matches!(
            copy_tree(&file, &dst),
            Err(FsOpError::NotADirectory(_))
        ));
    }
}
