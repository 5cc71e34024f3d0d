//! Search pipeline stages shared by the CLI commands.
//!
//! Ingest loads every input into owned values; [`run_search`] resolves them
//! and renders the reports while the release table is still borrowed.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use tracing::{info, info_span};

use relfind_core::{load_constraints, normalize_search_items, resolve};
use relfind_ingest::{
    IngestError, discover_release_table, read_reference_lines, read_release_table,
    read_source_lines,
};
use relfind_model::{
    DataIssue, Outcome, ReleaseTable, Resolution, ResolutionSummary, ResolveOptions, SearchItem,
    VersionConstraints,
};
use relfind_report::{ReportContext, render_json, render_text};

pub const SOURCE_FILE: &str = "source.txt";
pub const REFERENCE_FILE: &str = "reference.txt";
pub const RESULTS_FILE: &str = "results.txt";

/// Resolved input paths for one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchInputs {
    pub data: PathBuf,
    pub source: PathBuf,
    pub reference: PathBuf,
}

impl SearchInputs {
    /// Fills unset paths from `dir`; the release table is discovered when not given.
    pub fn resolve(
        dir: &Path,
        data: Option<PathBuf>,
        source: Option<PathBuf>,
        reference: Option<PathBuf>,
    ) -> Result<Self> {
        let data = match data {
            Some(path) => path,
            None => discover_release_table(dir)
                .with_context(|| format!("find release table in {}", dir.display()))?,
        };
        Ok(Self {
            data,
            source: source.unwrap_or_else(|| dir.join(SOURCE_FILE)),
            reference: reference.unwrap_or_else(|| dir.join(REFERENCE_FILE)),
        })
    }
}

/// Everything loaded from disk for one search.
#[derive(Debug, Clone)]
pub struct Ingested {
    pub table: ReleaseTable,
    pub items: Vec<SearchItem>,
    pub constraints: VersionConstraints,
    pub issues: Vec<DataIssue>,
}

pub fn ingest(inputs: &SearchInputs) -> Result<Ingested> {
    let span = info_span!("ingest", data = %inputs.data.display());
    let _guard = span.enter();
    let start = Instant::now();

    let loaded = read_release_table(&inputs.data)
        .with_context(|| format!("load release table {}", inputs.data.display()))?;
    let mut issues = loaded.issues;

    let (reference, unavailable) = read_reference_lines(&inputs.reference);
    issues.extend(unavailable);
    let (constraints, constraint_issues) = load_constraints(reference.unwrap_or_default());
    issues.extend(constraint_issues);

    let source = read_source_lines(&inputs.source)
        .with_context(|| format!("read search list {}", inputs.source.display()))?;
    let items = normalize_search_items(source);
    if items.is_empty() {
        return Err(IngestError::SourceEmpty {
            path: inputs.source.clone(),
        }
        .into());
    }

    info!(
        records = loaded.table.len(),
        items = items.len(),
        constraints = constraints.len(),
        issues = issues.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(Ingested {
        table: loaded.table,
        items,
        constraints,
        issues,
    })
}

/// One row of the product overview table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub product: String,
    pub operators: usize,
    pub matched: Option<usize>,
    /// Closest releases as `name (date)`, or the unresolved reason.
    pub detail: String,
}

/// Rendered output of one search.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub text: String,
    pub json: String,
    pub summary: ResolutionSummary,
    pub rows: Vec<ProductRow>,
    pub unmapped_operators: Vec<String>,
}

pub fn run_search(
    ingested: &Ingested,
    options: &ResolveOptions,
    today: NaiveDate,
    generated_at: NaiveDateTime,
) -> Result<SearchReport> {
    let resolution = resolve(
        &ingested.table,
        &ingested.items,
        &ingested.constraints,
        options,
        today,
    )
    .context("resolve search items")?;

    let ctx = ReportContext {
        resolution: &resolution,
        options,
        constraints: &ingested.constraints,
        today,
        generated_at,
        issues: &ingested.issues,
    };
    Ok(SearchReport {
        text: render_text(&ctx),
        json: render_json(&ctx)?,
        rows: product_rows(&resolution, options),
        summary: resolution.summary.clone(),
        unmapped_operators: resolution.unmapped_operators.clone(),
    })
}

fn product_rows(resolution: &Resolution<'_>, options: &ResolveOptions) -> Vec<ProductRow> {
    resolution
        .products
        .iter()
        .map(|product| {
            let (matched, detail) = match &product.outcome {
                Outcome::Resolved { matched, closest } => {
                    let releases: Vec<String> = closest
                        .iter()
                        .map(|record| match record.ga_date {
                            Some(date) => format!("{} ({date})", record.release),
                            None => record.release.clone(),
                        })
                        .collect();
                    (Some(*matched), releases.join("\n"))
                }
                Outcome::Unresolved { reason } => (
                    None,
                    reason.description(options.temporal_mode).to_string(),
                ),
            };
            ProductRow {
                product: product.product.clone(),
                operators: product.operators.len(),
                matched,
                detail,
            }
        })
        .collect()
}

/// Distinct products in the table with their release counts, sorted by name.
pub fn count_products(table: &ReleaseTable) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in table.iter() {
        *counts.entry(record.product.as_str()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(product, count)| (product.to_string(), count))
        .collect()
}
