// src/filesystem.rs
use crate::error::{InjectError, Result};
use ignore::{Walk, WalkBuilder};
use std::path::{Path, PathBuf};

/// Sequential, sorted walk over every regular file beneath `root`.
///
/// Hidden files are visited and ignore files are not honoured: the point is
/// to touch everything a backup would hold. Symlinks are neither followed nor
/// yielded. Entries are sorted by file name so a seeded run classifies the
/// same files every time.
///
/// # Errors
/// Returns `NotADirectory` if `root` is not an existing directory. Walk
/// failures during iteration are yielded as `Err` items.
pub fn regular_files(root: &Path) -> Result<impl Iterator<Item = Result<PathBuf>>> {
    if !root.is_dir() {
        return Err(InjectError::NotADirectory(root.to_path_buf()));
    }

    Ok(walker(root).filter_map(|entry| match entry {
        Ok(entry) if entry.file_type().is_some_and(|ft| ft.is_file()) => {
            Some(Ok(entry.into_path()))
        }
        Ok(_) => None,
        Err(e) => Some(Err(InjectError::from(e))),
    }))
}

/// Number of files [`regular_files`] would yield.
///
/// # Errors
/// Fails on the first walk error.
pub fn count_files(root: &Path) -> Result<u64> {
    let mut count = 0;
    for path in regular_files(root)? {
        path?;
        count += 1;
    }
    Ok(count)
}

fn walker(root: &Path) -> Walk {
    WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build()
}
