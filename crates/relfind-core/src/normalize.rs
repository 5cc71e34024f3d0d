//! Search list normalization.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info};

use relfind_model::SearchItem;

static ENUMERATION_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("valid enumeration pattern"));

/// Literal that marks the column header line of a search list.
pub const HEADER_MARKER: &str = "Operator";

/// Strips a leading `<digits>.` enumeration and following whitespace.
pub fn strip_enumeration(operator: &str) -> &str {
    match ENUMERATION_PREFIX.find(operator) {
        Some(prefix) => &operator[prefix.end()..],
        None => operator,
    }
}

/// Parses tab-separated search list lines into ordered search items.
///
/// Output order follows input order; blank lines, the optional header line
/// and incomplete lines are dropped.
pub fn normalize_search_items<I, S>(lines: I) -> Vec<SearchItem>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut items = Vec::new();
    let mut first = true;
    let mut dropped = 0usize;
    for (line_no, raw) in lines.into_iter().enumerate() {
        let line = raw.as_ref().trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
        let operator = strip_enumeration(fields[0]);
        if std::mem::take(&mut first) && operator.starts_with(HEADER_MARKER) {
            debug!(line = line_no + 1, "skipping header line");
            continue;
        }
        match parse_fields(operator, &fields) {
            Some(item) => items.push(item),
            None => {
                dropped += 1;
                debug!(line = line_no + 1, "dropping incomplete search line");
            }
        }
    }
    info!(item_count = items.len(), dropped, "search items normalized");
    items
}

fn parse_fields(operator: &str, fields: &[&str]) -> Option<SearchItem> {
    if operator.is_empty() {
        return None;
    }
    let product = fields.get(1).copied().unwrap_or("");
    if product.is_empty() {
        return Some(SearchItem::unmapped(operator));
    }
    if fields.len() >= 3 {
        let hint = fields[2];
        return (!hint.is_empty()).then(|| SearchItem::new(operator, product, hint));
    }
    Some(SearchItem::new(operator, product, ""))
}
