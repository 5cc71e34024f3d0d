//! Resolution run: groups search items and resolves each product group.
//!
//! Every group is matched, filtered and selected independently against the
//! borrowed table; results are threaded back as values, never accumulated in
//! shared state.

use std::time::Instant;

use chrono::NaiveDate;
use tracing::{debug, debug_span, info, info_span};

use relfind_model::{
    Outcome, ProductOutcome, ReleaseTable, Resolution, ResolveOptions, SearchItem,
    VersionConstraints,
};

use crate::aggregate::summarize;
use crate::error::Result;
use crate::filter::FilterPipeline;
use crate::matching::MatchingEngine;
use crate::select::{ProductGroup, group_items, select_closest, union_matches};

/// Resolves search items against a release table.
#[derive(Debug, Clone)]
pub struct Resolver<'t> {
    engine: MatchingEngine<'t>,
    filters: FilterPipeline,
    closest_n: usize,
}

impl<'t> Resolver<'t> {
    /// Builds a resolver; `today` is the reference date for the temporal filter.
    pub fn new(
        table: &'t ReleaseTable,
        constraints: &VersionConstraints,
        options: &ResolveOptions,
        today: NaiveDate,
    ) -> Result<Self> {
        Ok(Self {
            engine: MatchingEngine::new(table, &options.overrides)?,
            filters: FilterPipeline::new(constraints.clone(), options, today),
            closest_n: options.closest_n(),
        })
    }

    pub fn resolve(&self, items: &[SearchItem]) -> Result<Resolution<'t>> {
        let span = info_span!("resolve", item_count = items.len());
        let _guard = span.enter();
        let start = Instant::now();

        let grouped = group_items(items);
        let mut products = Vec::with_capacity(grouped.groups.len());
        let mut undated_excluded = 0;
        for group in &grouped.groups {
            let (outcome, undated) = self.resolve_group(group)?;
            undated_excluded += undated;
            products.push(outcome);
        }

        let summary = summarize(&products, &grouped.unmapped, undated_excluded);
        info!(
            products = summary.products_analyzed,
            resolved = summary.resolved_products,
            unresolved = summary.unresolved_products,
            unmapped = summary.unmapped_operators,
            duration_ms = start.elapsed().as_millis(),
            "resolution complete"
        );
        Ok(Resolution {
            products,
            unmapped_operators: grouped.unmapped,
            summary,
        })
    }

    /// Resolves one product group; also returns the undated records it dropped.
    pub fn resolve_group(&self, group: &ProductGroup) -> Result<(ProductOutcome<'t>, usize)> {
        let span = debug_span!("product", product = %group.product);
        let _guard = span.enter();

        let batches = group
            .entries
            .iter()
            .map(|entry| {
                let hint = Some(entry.release_hint.as_str()).filter(|h| !h.is_empty());
                self.engine.find(&group.product, hint, &entry.operator)
            })
            .collect::<Result<Vec<_>>>()?;
        let raw = union_matches(batches);
        let raw_count = raw.len();

        let filtered = self.filters.apply(&group.product, raw)?;
        let outcome = match filtered.emptied_by {
            Some(reason) => Outcome::Unresolved { reason },
            None => {
                let matched = filtered.records.len();
                Outcome::Resolved {
                    matched,
                    closest: select_closest(filtered.records, self.closest_n),
                }
            }
        };
        debug!(raw = raw_count, resolved = outcome.is_resolved(), "product group resolved");

        Ok((
            ProductOutcome {
                product: group.product.clone(),
                operators: group.operators(),
                outcome,
            },
            filtered.undated_excluded,
        ))
    }
}

/// Convenience wrapper building a [`Resolver`] for a single run.
pub fn resolve<'t>(
    table: &'t ReleaseTable,
    items: &[SearchItem],
    constraints: &VersionConstraints,
    options: &ResolveOptions,
    today: NaiveDate,
) -> Result<Resolution<'t>> {
    Resolver::new(table, constraints, options, today)?.resolve(items)
}
