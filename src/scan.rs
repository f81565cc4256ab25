//! Source tree walking and exported-class discovery
//!
//! Discovery is textual. A line declares an exported class when it starts
//! with the marker `export class ` (column zero, single spaces) and the next
//! whitespace-delimited token is the class name:
//!
//! ```text
//! export class TopView extends View
//! ```
//!
//! The token must be an identifier (Unicode letters allowed, as in
//! `export class Ñandu`). `export class Top{` on one line does
//! not follow the convention; such lines are reported with a warning and
//! skipped instead of guessing at the name. Indented, commented or default
//! exports are not discovered.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Prefix that marks an exported top-level class declaration
pub const EXPORT_CLASS_MARKER: &str = "export class ";

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{ID_Start}_$][\p{ID_Continue}$\x{200C}\x{200D}]*$")
        .expect("identifier pattern")
});

/// An exported class and the file that declares it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredSymbol {
    pub class_name: String,
    pub path: PathBuf,
}

/// Recursively list files under `source_root` with the given extension.
///
/// Entries are visited sorted by file name at every level, so the order is
/// the same on every run over an unchanged tree. Any walk error aborts the
/// listing; an unreadable directory would otherwise drop classes silently.
pub fn discover_source_files(source_root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(source_root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext == extension)
            .unwrap_or(false);
        if matches {
            files.push(entry.into_path());
        }
    }

    log::debug!(
        "Discovered {} .{} files under {}",
        files.len(),
        extension,
        source_root.display()
    );
    Ok(files)
}

/// Names of the classes exported by `source`, in line order.
pub fn extract_exported_classes(source: &str) -> Vec<String> {
    source
        .lines()
        .filter_map(|line| line.strip_prefix(EXPORT_CLASS_MARKER))
        .filter_map(|rest| {
            let token = rest.split_whitespace().next()?;
            if IDENTIFIER.is_match(token) {
                Some(token.to_string())
            } else {
                log::warn!(
                    "Skipping `{}{}`: the class name must be a separate identifier",
                    EXPORT_CLASS_MARKER,
                    rest.trim_end()
                );
                None
            }
        })
        .collect()
}

/// Read `path` and return the classes it exports.
pub fn scan_file(path: &Path) -> Result<Vec<DiscoveredSymbol>> {
    let source = std::fs::read_to_string(path).map_err(|e| Error::Filesystem {
        message: format!("Failed to read '{}': {}", path.display(), e),
    })?;

    Ok(extract_exported_classes(&source)
        .into_iter()
        .map(|class_name| DiscoveredSymbol {
            class_name,
            path: path.to_path_buf(),
        })
        .collect())
}
