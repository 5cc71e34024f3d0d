//! Per-product outcomes and aggregate counters of a resolution run.

use serde::Serialize;

use crate::options::TemporalMode;
use crate::record::ReleaseRecord;

/// Why a product group ended up without releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedReason {
    /// No record matched any operator of the group.
    NoMatches,
    /// Matches existed but none carried the required version.
    VersionFiltered,
    /// Matches existed but none passed the GA date filter.
    TemporalFiltered,
}

impl UnresolvedReason {
    pub fn description(self, mode: TemporalMode) -> &'static str {
        match (self, mode) {
            (Self::NoMatches, _) => "no matching releases in the data source",
            (Self::VersionFiltered, _) => "no release matches the reference version",
            (Self::TemporalFiltered, TemporalMode::FutureOnly) => "no future releases found",
            (Self::TemporalFiltered, TemporalMode::ShowAll) => "no dated releases found",
        }
    }
}

/// Terminal classification of one product group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome<'a> {
    Resolved {
        /// Size of the filtered, deduplicated set.
        matched: usize,
        /// Closest releases in ascending GA date order.
        closest: Vec<&'a ReleaseRecord>,
    },
    Unresolved { reason: UnresolvedReason },
}

impl Outcome<'_> {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }
}

/// Outcome of a product together with the operators mapped to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductOutcome<'a> {
    pub product: String,
    pub operators: Vec<String>,
    #[serde(flatten)]
    pub outcome: Outcome<'a>,
}

/// Operator count for one product, in report order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductOperatorCount {
    pub product: String,
    pub operators: usize,
}

/// Aggregate counters for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolutionSummary {
    pub resolved_products: usize,
    pub unresolved_products: usize,
    pub unmapped_operators: usize,
    pub operators_with_answer: usize,
    pub operators_without_answer: usize,
    pub total_operators: usize,
    /// Sum of filtered set sizes over resolved products.
    pub matched_releases: usize,
    pub products_analyzed: usize,
    /// Records dropped by the future-only filter because they had no GA date.
    pub undated_excluded: usize,
    pub product_operator_counts: Vec<ProductOperatorCount>,
}

/// Everything a reporter needs from one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution<'a> {
    /// Product outcomes in first-appearance order.
    pub products: Vec<ProductOutcome<'a>>,
    /// Operators without a product, in input order.
    pub unmapped_operators: Vec<String>,
    pub summary: ResolutionSummary,
}

impl<'a> Resolution<'a> {
    pub fn resolved(&self) -> impl Iterator<Item = &ProductOutcome<'a>> {
        self.products.iter().filter(|p| p.outcome.is_resolved())
    }

    pub fn unresolved(&self) -> impl Iterator<Item = &ProductOutcome<'a>> {
        self.products.iter().filter(|p| !p.outcome.is_resolved())
    }
}
