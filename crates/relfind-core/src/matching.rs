//! Matching engine: finds release records for a product request.
//!
//! Lookup runs in three steps and stops at the first one that yields records:
//!
//! 1. the release hint, searched in the `Release` column;
//! 2. an operator override rule, whose term is searched in the `Release` column;
//! 3. the product name, searched across [`ReleaseColumn::SEARCHABLE`].
//!
//! All searches are case-insensitive literal substring matches.

use std::collections::BTreeSet;

use tracing::trace;

use relfind_model::{OverrideRule, ReleaseColumn, ReleaseRecord, ReleaseTable};

use crate::error::Result;
use crate::text::{Needle, normalize_text};

#[derive(Debug, Clone)]
struct CompiledOverride {
    operator: String,
    needle: Needle,
}

/// Finds release records in a borrowed table.
#[derive(Debug, Clone)]
pub struct MatchingEngine<'t> {
    table: &'t ReleaseTable,
    overrides: Vec<CompiledOverride>,
}

impl<'t> MatchingEngine<'t> {
    pub fn new(table: &'t ReleaseTable, rules: &[OverrideRule]) -> Result<Self> {
        let overrides = rules
            .iter()
            .map(|rule| -> Result<CompiledOverride> {
                Ok(CompiledOverride {
                    operator: normalize_text(&rule.operator),
                    needle: Needle::new(&rule.search_term)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { table, overrides })
    }

    pub fn table(&self) -> &'t ReleaseTable {
        self.table
    }

    /// Returns every record matching `product` for `operator`.
    ///
    /// An empty product never matches.
    pub fn find(
        &self,
        product: &str,
        release_hint: Option<&str>,
        operator: &str,
    ) -> Result<Vec<&'t ReleaseRecord>> {
        let product = product.trim();
        if product.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(hint) = release_hint.map(str::trim).filter(|hint| !hint.is_empty()) {
            let hits = self.search_column(ReleaseColumn::Release, &Needle::new(hint)?);
            if !hits.is_empty() {
                trace!(operator, hint, hits = hits.len(), "matched by release hint");
                return Ok(hits);
            }
        }

        if let Some(needle) = self.override_for(operator) {
            let hits = self.search_column(ReleaseColumn::Release, needle);
            if !hits.is_empty() {
                trace!(operator, term = needle.term(), hits = hits.len(), "matched by override");
                return Ok(hits);
            }
        }

        let needle = Needle::new(product)?;
        let mut seen = BTreeSet::new();
        let mut matches = Vec::new();
        for column in ReleaseColumn::SEARCHABLE {
            for record in self.search_column(column, &needle) {
                if seen.insert(record) {
                    matches.push(record);
                }
            }
        }
        trace!(operator, product, hits = matches.len(), "matched by column scan");
        Ok(matches)
    }

    fn override_for(&self, operator: &str) -> Option<&Needle> {
        let operator = normalize_text(operator);
        self.overrides
            .iter()
            .find(|rule| rule.operator == operator)
            .map(|rule| &rule.needle)
    }

    fn search_column(&self, column: ReleaseColumn, needle: &Needle) -> Vec<&'t ReleaseRecord> {
        if !self.table.has_column(column) {
            return Vec::new();
        }
        self.table
            .iter()
            .filter(|record| record.column(column).is_some_and(|value| needle.is_match(value)))
            .collect()
    }
}
