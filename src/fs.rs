//! Small file I/O helpers with path-carrying errors

use std::path::Path;

use crate::error::{MovieSeekError, Result};

/// Read a file, returning `None` when it does not exist.
pub fn read_file_if_exists(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(MovieSeekError::Storage {
            operation: "read",
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Write file atomically using temp file and rename.
///
/// The original file is never left partially written.
pub fn write_file_atomic(path: &Path, content: &str) -> Result<()> {
    ensure_parent_dir(path)?;

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, content).map_err(|e| MovieSeekError::Storage {
        operation: "write",
        path: temp_path.clone(),
        source: e,
    })?;

    std::fs::rename(&temp_path, path).map_err(|e| MovieSeekError::Storage {
        operation: "rename",
        path: path.to_path_buf(),
        source: e,
    })
}

pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| MovieSeekError::Storage {
            operation: "create",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    Ok(())
}
