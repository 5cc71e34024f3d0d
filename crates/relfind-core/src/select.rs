//! Product grouping and closest-release selection.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

use relfind_model::{ReleaseRecord, SearchItem};

/// One operator request inside a product group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupEntry {
    pub operator: String,
    pub release_hint: String,
}

/// Operators mapped to the same product, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductGroup {
    pub product: String,
    pub entries: Vec<GroupEntry>,
}

impl ProductGroup {
    pub fn operators(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.operator.clone()).collect()
    }
}

/// Search items split into product groups and unmapped operators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedItems {
    /// Groups in order of each product's first appearance.
    pub groups: Vec<ProductGroup>,
    /// Operators without a product, in input order.
    pub unmapped: Vec<String>,
}

/// Groups search items by product, preserving first-appearance order.
pub fn group_items(items: &[SearchItem]) -> GroupedItems {
    let mut grouped = GroupedItems::default();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for item in items {
        if !item.is_mapped() {
            grouped.unmapped.push(item.operator.clone());
            continue;
        }
        let idx = *positions.entry(item.product.as_str()).or_insert_with(|| {
            grouped.groups.push(ProductGroup {
                product: item.product.clone(),
                entries: Vec::new(),
            });
            grouped.groups.len() - 1
        });
        grouped.groups[idx].entries.push(GroupEntry {
            operator: item.operator.clone(),
            release_hint: item.release_hint.clone(),
        });
    }
    grouped
}

/// Unions match batches, dropping rows equal to one already seen.
pub fn union_matches<'a, I>(batches: I) -> Vec<&'a ReleaseRecord>
where
    I: IntoIterator<Item = Vec<&'a ReleaseRecord>>,
{
    let mut seen = BTreeSet::new();
    let mut union = Vec::new();
    for record in batches.into_iter().flatten() {
        if seen.insert(record) {
            union.push(record);
        }
    }
    union
}

/// Orders by GA date ascending; undated records sort last.
pub fn compare_ga_date(a: &ReleaseRecord, b: &ReleaseRecord) -> Ordering {
    match (a.ga_date, b.ga_date) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sorts by GA date and keeps the first `closest_n` records.
pub fn select_closest(
    mut records: Vec<&ReleaseRecord>,
    closest_n: usize,
) -> Vec<&ReleaseRecord> {
    records.sort_by(|a, b| compare_ga_date(a, b));
    records.truncate(closest_n.max(1));
    records
}
