// src/mutation.rs
use crate::error::{InjectError, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Append `suffix` to the end of an existing file.
///
/// The file is never created: a path that vanished since the walk is an error.
pub fn append_suffix(path: &Path, suffix: &str) -> Result<()> {
    let map_err = |source| InjectError::Append {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new().append(true).open(path).map_err(map_err)?;
    file.write_all(suffix.as_bytes()).map_err(map_err)?;
    file.flush().map_err(map_err)
}

pub fn remove(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|source| InjectError::Remove {
        path: path.to_path_buf(),
        source,
    })
}
