//! Release table discovery.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IngestError, Result};

/// File name prefix of product pages exports, preferred over other CSV files.
pub const EXPORT_PREFIX: &str = "Product-Pages-Export";

/// Lists all CSV files in a directory.
///
/// Returns files sorted by filename.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::table(dir, "directory not found"));
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::io(dir, e))?;
    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::io(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Picks the release table in `dir`.
///
/// A `Product-Pages-Export*.csv` file wins; otherwise the first CSV file by name.
pub fn discover_release_table(dir: &Path) -> Result<PathBuf> {
    let files = list_csv_files(dir)?;
    let export = files.iter().find(|path| {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(EXPORT_PREFIX))
    });
    let picked = export
        .or_else(|| files.first())
        .cloned()
        .ok_or_else(|| IngestError::table(dir, "no CSV file found"))?;
    debug!(path = %picked.display(), candidates = files.len(), "release table discovered");
    Ok(picked)
}
