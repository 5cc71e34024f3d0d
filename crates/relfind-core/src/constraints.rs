//! Version constraint loading from `<ABBR> <VERSION>` lines.

use tracing::{debug, info};

use relfind_model::{DataIssue, VersionConstraints, product_for_abbreviation};

/// Parses reference lines into version constraints.
///
/// Blank lines and lines with fewer than two tokens are skipped. Unknown
/// abbreviations are skipped and reported as [`DataIssue::UnknownAbbreviation`].
pub fn load_constraints<I, S>(lines: I) -> (VersionConstraints, Vec<DataIssue>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut constraints = VersionConstraints::new();
    let mut issues = Vec::new();
    for line in lines {
        let mut tokens = line.as_ref().split_whitespace();
        let (Some(abbreviation), Some(version)) = (tokens.next(), tokens.next()) else {
            continue;
        };
        let abbreviation = abbreviation.to_uppercase();
        match product_for_abbreviation(&abbreviation) {
            Some(product) => constraints.insert(product, version),
            None => {
                debug!(abbreviation = %abbreviation, "ignoring unknown product abbreviation");
                issues.push(DataIssue::UnknownAbbreviation { abbreviation });
            }
        }
    }
    info!(constraint_count = constraints.len(), "version constraints loaded");
    (constraints, issues)
}
