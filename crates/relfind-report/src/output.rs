use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Writes a rendered report, creating the parent directory when needed.
pub fn write_report(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(path, text).with_context(|| format!("write {}", path.display()))
}
