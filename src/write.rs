//! Writing generated modules to disk
//!
//! A generated module is either fully replaced or left as it was. Content is
//! written to a temporary file next to the target and then renamed over it,
//! so a failure midway never leaves a truncated module behind for the
//! bundler to pick up.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Atomically replace `path` with `content`, creating parent directories.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    fs::create_dir_all(parent).map_err(|e| Error::Filesystem {
        message: format!("Failed to create directory '{}': {}", parent.display(), e),
    })?;

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| Error::Filesystem {
        message: format!(
            "Failed to create temporary file in '{}': {}",
            parent.display(),
            e
        ),
    })?;
    temp.write_all(content.as_bytes())
        .and_then(|_| temp.flush())
        .map_err(|e| Error::Filesystem {
            message: format!("Failed to write '{}': {}", path.display(), e),
        })?;

    temp.persist(path).map_err(|e| Error::Filesystem {
        message: format!("Failed to replace '{}': {}", path.display(), e.error),
    })?;

    Ok(())
}
