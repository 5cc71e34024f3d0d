//! JSON rendering of a run.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use relfind_model::{
    DataIssue, ProductOutcome, ResolutionSummary, ResolveOptions, VersionConstraints,
    count_issues,
};

use crate::context::ReportContext;

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: NaiveDateTime,
    today: NaiveDate,
    options: &'a ResolveOptions,
    constraints: &'a VersionConstraints,
    products: &'a [ProductOutcome<'a>],
    unmapped_operators: &'a [String],
    summary: &'a ResolutionSummary,
    issue_counts: BTreeMap<&'static str, usize>,
    issues: &'a [DataIssue],
}

/// Renders the run as pretty-printed JSON.
pub fn render_json(ctx: &ReportContext<'_>) -> Result<String> {
    let report = JsonReport {
        generated_at: ctx.generated_at,
        today: ctx.today,
        options: ctx.options,
        constraints: ctx.constraints,
        products: &ctx.resolution.products,
        unmapped_operators: &ctx.resolution.unmapped_operators,
        summary: &ctx.resolution.summary,
        issue_counts: count_issues(ctx.issues),
        issues: ctx.issues,
    };
    serde_json::to_string_pretty(&report).context("serialize JSON report")
}
