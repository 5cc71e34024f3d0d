//! Non-fatal data quality issues collected during a run.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// A problem that degrades a run without aborting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataIssue {
    /// The version reference list was not found; no version filtering applies.
    ConstraintSourceMissing { path: PathBuf },
    /// The version reference list exists but could not be read.
    ConstraintSourceUnreadable { path: PathBuf, reason: String },
    /// A table row was skipped.
    MalformedRow { line: u64, reason: String },
    /// A GA date could not be parsed; the record is kept without a date.
    UnparsableDate {
        line: u64,
        release: String,
        value: String,
    },
    /// A reference line used an abbreviation with no known product.
    UnknownAbbreviation { abbreviation: String },
}

impl DataIssue {
    /// Stable label used when counting issues.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ConstraintSourceMissing { .. } => "constraint_source_missing",
            Self::ConstraintSourceUnreadable { .. } => "constraint_source_unreadable",
            Self::MalformedRow { .. } => "malformed_row",
            Self::UnparsableDate { .. } => "unparsable_date",
            Self::UnknownAbbreviation { .. } => "unknown_abbreviation",
        }
    }
}

impl fmt::Display for DataIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConstraintSourceMissing { path } => write!(
                f,
                "reference list {} not found, no version filtering applied",
                path.display()
            ),
            Self::ConstraintSourceUnreadable { path, reason } => write!(
                f,
                "reference list {} unreadable ({reason}), no version filtering applied",
                path.display()
            ),
            Self::MalformedRow { line, reason } => write!(f, "line {line}: row skipped ({reason})"),
            Self::UnparsableDate {
                line,
                release,
                value,
            } => write!(f, "line {line}: unparsable GA date {value:?} for {release}"),
            Self::UnknownAbbreviation { abbreviation } => {
                write!(f, "unknown product abbreviation {abbreviation:?}")
            }
        }
    }
}

/// Counts issues per [`DataIssue::kind`].
pub fn count_issues(issues: &[DataIssue]) -> BTreeMap<&'static str, usize> {
    let mut counts = BTreeMap::new();
    for issue in issues {
        *counts.entry(issue.kind()).or_insert(0) += 1;
    }
    counts
}
