use thiserror::Error;

/// Errors raised while resolving search items.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A search term could not be compiled into a literal matcher.
    #[error("invalid search term {term:?}")]
    SearchTerm {
        term: String,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, ResolveError>;

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn message_names_term_only() {
        let source = regex::Regex::new("(").unwrap_err();
        let cause = source.to_string();
        let error = ResolveError::SearchTerm {
            term: "(".to_string(),
            source,
        };
        assert_eq!(error.to_string(), "invalid search term \"(\"");
        assert_eq!(error.source().map(ToString::to_string), Some(cause));
    }
}
