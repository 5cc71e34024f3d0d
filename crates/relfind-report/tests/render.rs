//! Rendering tests for the text and JSON reports.

use chrono::NaiveDate;

use relfind_model::{
    DataIssue, Outcome, ProductOperatorCount, ProductOutcome, ReleaseRecord, Resolution,
    ResolutionSummary, ResolveOptions, UnresolvedReason, VersionConstraints,
};
use relfind_report::{REPORT_TITLE, ReportContext, render_json, render_text};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn quay_records() -> Vec<ReleaseRecord> {
    let mut first = ReleaseRecord::new("Red Hat Quay", "Quay 3.15")
        .with_ga_date(ymd(2026, 11, 4))
        .with_ga_name("Quay 3.15 GA")
        .with_maintainers("quay-team@example.com");
    first.business_unit = Some("Hybrid Platforms".to_string());
    first.link = Some("https://example.com/quay-3.15".to_string());
    let second = ReleaseRecord::new("Red Hat Quay", "Quay 3.16").with_ga_date(ymd(2027, 2, 1));
    vec![first, second]
}

fn resolution(records: &[ReleaseRecord]) -> Resolution<'_> {
    Resolution {
        products: vec![
            ProductOutcome {
                product: "Red Hat Quay".to_string(),
                operators: vec![
                    "quay-operator".to_string(),
                    "quay-bridge-operator".to_string(),
                ],
                outcome: Outcome::Resolved {
                    matched: 3,
                    closest: records.iter().collect(),
                },
            },
            ProductOutcome {
                product: "Red Hat OpenShift Data Foundation".to_string(),
                operators: vec!["odf-operator".to_string()],
                outcome: Outcome::Unresolved {
                    reason: UnresolvedReason::TemporalFiltered,
                },
            },
        ],
        unmapped_operators: vec!["loose-operator".to_string(), "stray-operator".to_string()],
        summary: ResolutionSummary {
            resolved_products: 1,
            unresolved_products: 1,
            unmapped_operators: 2,
            operators_with_answer: 2,
            operators_without_answer: 3,
            total_operators: 5,
            matched_releases: 3,
            products_analyzed: 2,
            undated_excluded: 1,
            product_operator_counts: vec![
                ProductOperatorCount {
                    product: "Red Hat Quay".to_string(),
                    operators: 2,
                },
                ProductOperatorCount {
                    product: "Red Hat OpenShift Data Foundation".to_string(),
                    operators: 1,
                },
            ],
        },
    }
}

fn section<'a>(text: &'a str, start: &str, end: &str) -> &'a str {
    let from = text.find(start).expect("section start");
    let to = from + text[from..].find(end).expect("section end");
    text[from..to].trim_end()
}

fn context<'a>(
    resolution: &'a Resolution<'a>,
    options: &'a ResolveOptions,
    constraints: &'a VersionConstraints,
    issues: &'a [DataIssue],
) -> ReportContext<'a> {
    ReportContext {
        resolution,
        options,
        constraints,
        today: ymd(2026, 10, 18),
        generated_at: ymd(2026, 10, 18).and_hms_opt(9, 30, 0).unwrap(),
        issues,
    }
}

#[test]
fn header_lists_filters() {
    let records = quay_records();
    let resolution = resolution(&records);
    let options = ResolveOptions::default();
    let mut constraints = VersionConstraints::new();
    constraints.insert("Red Hat OpenShift Container Platform", "4.20");
    let text = render_text(&context(&resolution, &options, &constraints, &[]));

    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(REPORT_TITLE));
    assert_eq!(lines.next(), Some("Generated: 2026-10-18 09:30:00"));
    assert_eq!(
        lines.next(),
        Some("Filter: Only showing releases with GA dates after 2026-10-18")
    );
    assert_eq!(
        lines.next(),
        Some("Version Filter: Red Hat OpenShift Container Platform: 4.20")
    );
    assert!(text.ends_with(&format!(
        "Filter applied: Only releases after 2026-10-18\n{}\n",
        "=".repeat(80)
    )));
}

#[test]
fn resolved_section_lists_closest_records() {
    let records = quay_records();
    let resolution = resolution(&records);
    let options = ResolveOptions::default();
    let constraints = VersionConstraints::new();
    let text = render_text(&context(&resolution, &options, &constraints, &[]));

    insta::assert_snapshot!(
        section(&text, "PRODUCTS WITH FUTURE RELEASES FOUND", "\nPRODUCTS WITH NO FUTURE"),
        @r"
    PRODUCTS WITH FUTURE RELEASES FOUND
    ================================================================================

    Product 1: Red Hat Quay
    Operators: quay-operator, quay-bridge-operator
    ------------------------------------------------------------
    Found 3 future releases:
      BU: Hybrid Platforms
      Release: Quay 3.15
      GA date: 2026-11-04
      GA name: Quay 3.15 GA
      Maintainer: quay-team@example.com
      Link: https://example.com/quay-3.15
      Product: Red Hat Quay
      ----------------------------------------
      BU: N/A
      Release: Quay 3.16
      GA date: 2027-02-01
      GA name: N/A
      Maintainer: N/A
      Link: N/A
      Product: Red Hat Quay
      ----------------------------------------
    "
    );
}

#[test]
fn unresolved_and_unmapped_sections() {
    let records = quay_records();
    let resolution = resolution(&records);
    let options = ResolveOptions::default();
    let constraints = VersionConstraints::new();
    let text = render_text(&context(&resolution, &options, &constraints, &[]));

    insta::assert_snapshot!(
        section(&text, "PRODUCTS WITH NO FUTURE RELEASES", "\nUNMAPPED OPERATORS"),
        @r"
    PRODUCTS WITH NO FUTURE RELEASES
    ================================================================================

    Product 1: Red Hat OpenShift Data Foundation
    Operators: odf-operator
    Status: no future releases found (after 2026-10-18)
    ------------------------------------------------------------
    "
    );
    insta::assert_snapshot!(
        section(&text, "UNMAPPED OPERATORS", "\nSUMMARY"),
        @r"
    UNMAPPED OPERATORS
    ================================================================================
    The following operators have no product mapping:
      1. loose-operator
      2. stray-operator
    Status: No product mapping available - cannot search
    "
    );
}

#[test]
fn summary_section_counts() {
    let records = quay_records();
    let resolution = resolution(&records);
    let options = ResolveOptions::default();
    let constraints = VersionConstraints::new();
    let text = render_text(&context(&resolution, &options, &constraints, &[]));

    insta::assert_snapshot!(
        section(&text, "SUMMARY", "\nData Quality:"),
        @r"
    SUMMARY
    ================================================================================
    Query date: 2026-10-18
    Products with future releases: 1
    Products with no future releases: 1
    Unmapped operators: 2
    Total future releases found: 3
    Total products analyzed: 2
    Undated releases excluded: 1

    Operator Answer Breakdown:
    ----------------------------------------
    Operators with future releases: 2
    Operators without future releases: 3
    Total operators analyzed: 5

    Product Operator Breakdown:
    ----------------------------------------
    Red Hat Quay: 2 operators
    Red Hat OpenShift Data Foundation: 1 operators
    "
    );
}

#[test]
fn show_all_wording_and_data_quality() {
    let records = quay_records();
    let resolution = resolution(&records);
    let options = ResolveOptions::show_all();
    let constraints = VersionConstraints::new();
    let issues = vec![
        DataIssue::MalformedRow {
            line: 7,
            reason: "missing product or release".to_string(),
        },
        DataIssue::UnknownAbbreviation {
            abbreviation: "RHEL".to_string(),
        },
    ];
    let text = render_text(&context(&resolution, &options, &constraints, &issues));

    assert!(text.contains("\nFilter: Showing all releases regardless of GA date\n"));
    assert!(text.contains("\nPRODUCTS WITH RELEASES FOUND\n"));
    assert!(text.contains("\nPRODUCTS WITH NO MATCHING RELEASES\n"));
    assert!(text.contains("\nFound 3 releases:\n"));
    assert!(text.contains("\nStatus: no dated releases found\n"));
    assert!(!text.contains("Undated releases excluded"));
    assert!(text.contains("\nFilter applied: none (all GA dates)\n"));

    let quality = section(&text, "Data Quality:", "\n\n");
    assert_eq!(
        quality,
        "Data Quality:\n\
         ----------------------------------------\n\
         malformed_row: 1\n\
         unknown_abbreviation: 1\n  \
         - line 7: row skipped (missing product or release)\n  \
         - unknown product abbreviation \"RHEL\""
    );
}

#[test]
fn json_report_carries_outcomes_and_counts() {
    let records = quay_records();
    let resolution = resolution(&records);
    let options = ResolveOptions::default();
    let constraints = VersionConstraints::new();
    let issues = vec![DataIssue::UnknownAbbreviation {
        abbreviation: "RHEL".to_string(),
    }];
    let json = render_json(&context(&resolution, &options, &constraints, &issues)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["today"], "2026-10-18");
    assert_eq!(value["options"]["temporal_mode"], "future_only");
    assert_eq!(value["products"][0]["status"], "resolved");
    assert_eq!(value["products"][0]["closest"][1]["release"], "Quay 3.16");
    assert_eq!(value["products"][1]["reason"], "temporal_filtered");
    assert_eq!(value["unmapped_operators"][1], "stray-operator");
    assert_eq!(value["summary"]["total_operators"], 5);
    assert_eq!(value["issue_counts"]["unknown_abbreviation"], 1);
    assert_eq!(value["issues"][0]["kind"], "unknown_abbreviation");
}
