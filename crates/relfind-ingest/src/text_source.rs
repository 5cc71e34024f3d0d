//! Line-oriented text inputs: the search list and the version reference list.

use std::path::Path;

use tracing::{info, warn};

use relfind_model::DataIssue;

use crate::error::{IngestError, Result};

fn read_lines(path: &Path) -> std::io::Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(contents
        .trim_start_matches('\u{feff}')
        .lines()
        .map(str::to_string)
        .collect())
}

/// Reads the search list.
///
/// # Errors
///
/// A missing file is fatal and reported as [`IngestError::SourceMissing`].
pub fn read_source_lines(path: &Path) -> Result<Vec<String>> {
    match read_lines(path) {
        Ok(lines) => {
            info!(path = %path.display(), line_count = lines.len(), "search list loaded");
            Ok(lines)
        }
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            Err(IngestError::SourceMissing {
                path: path.to_path_buf(),
            })
        }
        Err(error) => Err(IngestError::io(path, error)),
    }
}

/// Reads the optional version reference list.
///
/// Never fails: a missing file yields [`DataIssue::ConstraintSourceMissing`] and
/// any other read failure [`DataIssue::ConstraintSourceUnreadable`]. Either way
/// no lines are returned and the run continues without version filtering.
pub fn read_reference_lines(path: &Path) -> (Option<Vec<String>>, Option<DataIssue>) {
    match read_lines(path) {
        Ok(lines) => (Some(lines), None),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "reference list not found, no version filtering applied");
            (
                None,
                Some(DataIssue::ConstraintSourceMissing {
                    path: path.to_path_buf(),
                }),
            )
        }
        Err(error) => {
            warn!(
                path = %path.display(),
                error = %error,
                "reference list unreadable, no version filtering applied"
            );
            (
                None,
                Some(DataIssue::ConstraintSourceUnreadable {
                    path: path.to_path_buf(),
                    reason: error.to_string(),
                }),
            )
        }
    }
}
