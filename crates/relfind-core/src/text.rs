//! Text helpers shared by the matching stages.

use regex::{Regex, RegexBuilder};

use crate::error::{ResolveError, Result};

/// Normalizes text for comparison by lowercasing and replacing separators with spaces.
pub fn normalize_text(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(['_', '-', '.', '/', '\\'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Case-insensitive literal substring matcher.
///
/// The term is escaped before compilation, so characters such as `.` or `(`
/// in product names match themselves.
#[derive(Debug, Clone)]
pub struct Needle {
    term: String,
    pattern: Regex,
}

impl Needle {
    pub fn new(term: &str) -> Result<Self> {
        let pattern = RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .build()
            .map_err(|source| ResolveError::SearchTerm {
                term: term.to_string(),
                source,
            })?;
        Ok(Self {
            term: term.to_string(),
            pattern,
        })
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.pattern.is_match(haystack)
    }
}
