//! Sectioned plain-text results report.

use relfind_model::{
    MISSING_VALUE, Outcome, ProductOutcome, ReleaseRecord, UnresolvedReason, count_issues,
};

use crate::context::ReportContext;

pub const REPORT_TITLE: &str = "Operator Release Search Results";

const RULE_WIDTH: usize = 80;
const PRODUCT_RULE_WIDTH: usize = 60;
const ENTRY_RULE_WIDTH: usize = 40;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Phrases that change with the temporal mode.
struct Wording {
    found_section: &'static str,
    missing_section: &'static str,
    releases: &'static str,
}

impl Wording {
    fn new(future_only: bool) -> Self {
        if future_only {
            Self {
                found_section: "PRODUCTS WITH FUTURE RELEASES FOUND",
                missing_section: "PRODUCTS WITH NO FUTURE RELEASES",
                releases: "future releases",
            }
        } else {
            Self {
                found_section: "PRODUCTS WITH RELEASES FOUND",
                missing_section: "PRODUCTS WITH NO MATCHING RELEASES",
                releases: "releases",
            }
        }
    }
}

#[derive(Default)]
struct Lines(Vec<String>);

impl Lines {
    fn push(&mut self, line: impl Into<String>) {
        self.0.push(line.into());
    }

    fn rule(&mut self, ch: char, width: usize) {
        self.0.push(ch.to_string().repeat(width));
    }

    fn section(&mut self, title: &str) {
        self.push("");
        self.push(title);
        self.rule('=', RULE_WIDTH);
    }

    fn finish(self) -> String {
        let mut text = self.0.join("\n");
        text.push('\n');
        text
    }
}

/// Renders the results report.
///
/// Sections for resolved products, unresolved products and unmapped operators
/// are omitted when empty; the summary and footer are always present.
pub fn render_text(ctx: &ReportContext<'_>) -> String {
    let wording = Wording::new(ctx.future_only());
    let mut out = Lines::default();

    render_header(ctx, &mut out);
    render_resolved(ctx, &wording, &mut out);
    render_unresolved(ctx, &wording, &mut out);
    render_unmapped(ctx, &mut out);
    render_summary(ctx, &wording, &mut out);
    render_footer(ctx, &mut out);

    out.finish()
}

fn render_header(ctx: &ReportContext<'_>, out: &mut Lines) {
    out.push(REPORT_TITLE);
    out.push(format!(
        "Generated: {}",
        ctx.generated_at.format(TIMESTAMP_FORMAT)
    ));
    if ctx.future_only() {
        out.push(format!(
            "Filter: Only showing releases with GA dates after {}",
            ctx.today
        ));
    } else {
        out.push("Filter: Showing all releases regardless of GA date");
    }
    if ctx.version_filter_active() {
        let pairs: Vec<String> = ctx
            .constraints
            .iter()
            .map(|c| format!("{}: {}", c.product, c.version))
            .collect();
        out.push(format!("Version Filter: {}", pairs.join(", ")));
    } else if !ctx.constraints.is_empty() {
        out.push("Version Filter: disabled");
    }
    out.rule('=', RULE_WIDTH);
    out.push("Search Results by Product/Release Mapping (Source Order):");
    out.rule('=', RULE_WIDTH);
}

fn render_resolved(ctx: &ReportContext<'_>, wording: &Wording, out: &mut Lines) {
    let resolved: Vec<&ProductOutcome<'_>> = ctx.resolution.resolved().collect();
    if resolved.is_empty() {
        return;
    }
    out.section(wording.found_section);
    for (idx, product) in resolved.iter().enumerate() {
        let Outcome::Resolved { matched, closest } = &product.outcome else {
            continue;
        };
        product_heading(idx + 1, product, out);
        out.rule('-', PRODUCT_RULE_WIDTH);
        out.push(format!("Found {matched} {}:", release_noun(*matched, wording)));
        for record in closest {
            render_record(record, out);
        }
    }
}

fn release_noun(count: usize, wording: &Wording) -> String {
    let noun = wording.releases.trim_end_matches('s');
    if count == 1 {
        noun.to_string()
    } else {
        wording.releases.to_string()
    }
}

fn render_record(record: &ReleaseRecord, out: &mut Lines) {
    let ga_date = record
        .ga_date
        .map_or_else(|| MISSING_VALUE.to_string(), |d| d.to_string());
    out.push(format!("  BU: {}", or_missing(record.business_unit.as_deref())));
    out.push(format!("  Release: {}", record.release));
    out.push(format!("  GA date: {ga_date}"));
    out.push(format!("  GA name: {}", or_missing(record.ga_name.as_deref())));
    out.push(format!("  Maintainer: {}", record.maintainer_display()));
    out.push(format!("  Link: {}", or_missing(record.link.as_deref())));
    out.push(format!("  Product: {}", record.product));
    out.push(format!("  {}", "-".repeat(ENTRY_RULE_WIDTH)));
}

fn or_missing(value: Option<&str>) -> &str {
    value.unwrap_or(MISSING_VALUE)
}

fn product_heading(position: usize, product: &ProductOutcome<'_>, out: &mut Lines) {
    out.push("");
    out.push(format!("Product {position}: {}", product.product));
    out.push(format!("Operators: {}", product.operators.join(", ")));
}

fn render_unresolved(ctx: &ReportContext<'_>, wording: &Wording, out: &mut Lines) {
    let unresolved: Vec<&ProductOutcome<'_>> = ctx.resolution.unresolved().collect();
    if unresolved.is_empty() {
        return;
    }
    out.section(wording.missing_section);
    for (idx, product) in unresolved.iter().enumerate() {
        let Outcome::Unresolved { reason } = product.outcome else {
            continue;
        };
        product_heading(idx + 1, product, out);
        let description = reason.description(ctx.options.temporal_mode);
        if ctx.future_only() && reason == UnresolvedReason::TemporalFiltered {
            out.push(format!("Status: {description} (after {})", ctx.today));
        } else {
            out.push(format!("Status: {description}"));
        }
        out.rule('-', PRODUCT_RULE_WIDTH);
    }
}

fn render_unmapped(ctx: &ReportContext<'_>, out: &mut Lines) {
    let unmapped = &ctx.resolution.unmapped_operators;
    if unmapped.is_empty() {
        return;
    }
    out.section("UNMAPPED OPERATORS");
    out.push("The following operators have no product mapping:");
    for (idx, operator) in unmapped.iter().enumerate() {
        out.push(format!("  {}. {operator}", idx + 1));
    }
    out.push("Status: No product mapping available - cannot search");
}

fn render_summary(ctx: &ReportContext<'_>, wording: &Wording, out: &mut Lines) {
    let summary = &ctx.resolution.summary;
    out.section("SUMMARY");
    out.push(format!("Query date: {}", ctx.today));
    out.push(format!(
        "Products with {}: {}",
        wording.releases, summary.resolved_products
    ));
    out.push(format!(
        "Products with no {}: {}",
        wording.releases, summary.unresolved_products
    ));
    out.push(format!("Unmapped operators: {}", summary.unmapped_operators));
    out.push(format!(
        "Total {} found: {}",
        wording.releases, summary.matched_releases
    ));
    out.push(format!(
        "Total products analyzed: {}",
        summary.products_analyzed
    ));
    if ctx.future_only() {
        out.push(format!(
            "Undated releases excluded: {}",
            summary.undated_excluded
        ));
    }

    out.push("");
    out.push("Operator Answer Breakdown:");
    out.rule('-', ENTRY_RULE_WIDTH);
    out.push(format!(
        "Operators with {}: {}",
        wording.releases, summary.operators_with_answer
    ));
    out.push(format!(
        "Operators without {}: {}",
        wording.releases, summary.operators_without_answer
    ));
    out.push(format!(
        "Total operators analyzed: {}",
        summary.total_operators
    ));

    out.push("");
    out.push("Product Operator Breakdown:");
    out.rule('-', ENTRY_RULE_WIDTH);
    for entry in &summary.product_operator_counts {
        out.push(format!("{}: {} operators", entry.product, entry.operators));
    }

    out.push("");
    out.push("Data Quality:");
    out.rule('-', ENTRY_RULE_WIDTH);
    if ctx.issues.is_empty() {
        out.push("No data issues");
    } else {
        for (kind, count) in count_issues(ctx.issues) {
            out.push(format!("{kind}: {count}"));
        }
        for issue in ctx.issues {
            out.push(format!("  - {issue}"));
        }
    }
}

fn render_footer(ctx: &ReportContext<'_>, out: &mut Lines) {
    out.push("");
    out.rule('=', RULE_WIDTH);
    out.push("Report generated by relfind");
    if ctx.future_only() {
        out.push(format!("Filter applied: Only releases after {}", ctx.today));
    } else {
        out.push("Filter applied: none (all GA dates)");
    }
    out.rule('=', RULE_WIDTH);
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use relfind_model::{
        ProductOperatorCount, Resolution, ResolutionSummary, ResolveOptions, VersionConstraints,
    };

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn release_noun_is_singular_for_one() {
        let wording = Wording::new(true);
        assert_eq!(release_noun(1, &wording), "future release");
        assert_eq!(release_noun(3, &wording), "future releases");
        let wording = Wording::new(false);
        assert_eq!(release_noun(1, &wording), "release");
    }

    #[test]
    fn missing_record_fields_fall_back() {
        let record = ReleaseRecord::new("Red Hat Quay", "Quay 4.0");
        let mut out = Lines::default();
        render_record(&record, &mut out);
        let text = out.finish();
        assert!(text.contains("  BU: N/A\n"));
        assert!(text.contains("  GA date: N/A\n"));
        assert!(text.contains("  Maintainer: N/A\n"));
    }

    #[test]
    fn unresolved_status_names_the_reason() {
        let resolution = Resolution {
            products: vec![ProductOutcome {
                product: "Red Hat Quay".to_string(),
                operators: vec!["quay-operator".to_string()],
                outcome: Outcome::Unresolved {
                    reason: UnresolvedReason::VersionFiltered,
                },
            }],
            unmapped_operators: Vec::new(),
            summary: ResolutionSummary {
                unresolved_products: 1,
                operators_without_answer: 1,
                total_operators: 1,
                products_analyzed: 1,
                product_operator_counts: vec![ProductOperatorCount {
                    product: "Red Hat Quay".to_string(),
                    operators: 1,
                }],
                ..ResolutionSummary::default()
            },
        };
        let options = ResolveOptions::default();
        let constraints = VersionConstraints::new();
        let ctx = ReportContext {
            resolution: &resolution,
            options: &options,
            constraints: &constraints,
            today: ymd(2026, 10, 18),
            generated_at: ymd(2026, 10, 18).and_hms_opt(9, 0, 0).unwrap(),
            issues: &[],
        };
        let text = render_text(&ctx);
        assert!(text.contains("Status: no release matches the reference version\n"));
        assert!(!text.contains("UNMAPPED OPERATORS"));
        assert!(!text.contains("PRODUCTS WITH FUTURE RELEASES FOUND"));
    }
}
