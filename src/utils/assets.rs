//! Static asset tree copying.
//!
//! The assets directory is mirrored into `<output>/assets`: any previous copy
//! is removed first so deleted source files do not linger in the output.

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// Files to ignore during directory traversal
const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Collect all files from a directory recursively.
pub fn collect_all_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .map(walkdir::DirEntry::into_path)
        .collect()
}

/// Replace `dest` with a fresh copy of the `source` tree.
///
/// Returns the number of files copied. A missing `source` is not an error:
/// nothing is copied and `dest` is left untouched.
pub fn copy_tree(source: &Path, dest: &Path) -> Result<usize> {
    if !source.is_dir() {
        return Ok(0);
    }

    if dest.exists() {
        fs::remove_dir_all(dest)
            .with_context(|| format!("Failed to remove {}", dest.display()))?;
    }

    let files = collect_all_files(source);
    for file in &files {
        let relative = file.strip_prefix(source)?;
        let target = dest.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::copy(file, &target)
            .with_context(|| format!("Failed to copy {}", file.display()))?;
    }

    Ok(files.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_copy_tree_nested() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("assets");
        fs::create_dir_all(src.join("fonts")).unwrap();
        fs::write(src.join("styles.css"), "body {}").unwrap();
        fs::write(src.join("fonts/serif.woff2"), [0u8, 1, 2]).unwrap();
        fs::write(src.join(".DS_Store"), "").unwrap();

        let dest = dir.path().join("output/assets");
        let copied = copy_tree(&src, &dest).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(fs::read_to_string(dest.join("styles.css")).unwrap(), "body {}");
        assert!(dest.join("fonts/serif.woff2").is_file());
        assert!(!dest.join(".DS_Store").exists());
    }

    #[test]
    fn test_copy_tree_replaces_stale_files() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("assets");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("new.css"), "").unwrap();

        let dest = dir.path().join("out");
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("stale.css"), "").unwrap();

        copy_tree(&src, &dest).unwrap();

        assert!(dest.join("new.css").is_file());
        assert!(!dest.join("stale.css").exists());
    }

    #[test]
    fn test_copy_tree_missing_source() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("out");
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("keep.css"), "").unwrap();

        let copied = copy_tree(&dir.path().join("missing"), &dest).unwrap();

        assert_eq!(copied, 0);
        assert!(dest.join("keep.css").is_file());
    }
}
