//! End-to-end tests for the search pipeline against files on disk.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use relfind_cli::pipeline::{SearchInputs, count_products, ingest, run_search};
use relfind_ingest::IngestError;
use relfind_model::{DataIssue, ResolveOptions};

const EXPORT: &str = "\
BU,Product,Release,Release shortname,Release ID,GA name,GA date,Link,Maintainers
Hybrid Platforms,Red Hat OpenShift Container Platform,OCP 4.19,ocp-4.19,1,OCP 4.19 GA,2026-11-01,https://example.test/ocp-4.19,
Hybrid Platforms,Red Hat OpenShift Container Platform,OCP 4.20,ocp-4.20,2,OCP 4.20 GA,2027-02-01,https://example.test/ocp-4.20,ocp-team
Hybrid Platforms,Red Hat Quay,Quay 3.14,quay-3.14,3,Quay 3.14 GA,2026-01-10,,
";

const SOURCE: &str = "\
Operator\tProduct\tRelease
1. cluster-logging\tRed Hat OpenShift Container Platform
2. quay-operator\tRed Hat Quay
3. lonely-operator
";

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

fn workspace(reference: Option<&str>) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("Product-Pages-Export-2026.csv"), EXPORT).unwrap();
    fs::write(dir.path().join("source.txt"), SOURCE).unwrap();
    if let Some(reference) = reference {
        fs::write(dir.path().join("reference.txt"), reference).unwrap();
    }
    dir
}

fn inputs(dir: &Path) -> SearchInputs {
    SearchInputs::resolve(dir, None, None, None).expect("resolve inputs")
}

#[test]
fn search_honors_reference_constraints() {
    let dir = workspace(Some("OCP 4.20\nRHEL 10\n"));
    let ingested = ingest(&inputs(dir.path())).unwrap();
    assert_eq!(ingested.table.len(), 3);
    assert_eq!(ingested.items.len(), 3);
    assert_eq!(
        ingested.issues,
        vec![DataIssue::UnknownAbbreviation {
            abbreviation: "RHEL".to_string()
        }]
    );

    let generated_at = today().and_hms_opt(8, 0, 0).unwrap();
    let report = run_search(&ingested, &ResolveOptions::default(), today(), generated_at).unwrap();

    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.rows[0].product, "Red Hat OpenShift Container Platform");
    assert_eq!(report.rows[0].matched, Some(1));
    assert_eq!(report.rows[0].detail, "OCP 4.20 (2027-02-01)");
    assert_eq!(report.rows[1].matched, None);
    assert_eq!(report.rows[1].detail, "no future releases found");
    assert_eq!(report.unmapped_operators, vec!["lonely-operator"]);
    assert_eq!(report.summary.operators_with_answer, 1);
    assert_eq!(report.summary.operators_without_answer, 2);

    assert!(report.text.contains(
        "Version Filter: Red Hat OpenShift Container Platform: 4.20\n"
    ));
    assert!(report.text.contains("  Maintainer: ocp-team\n"));
    assert!(report.text.contains("unknown_abbreviation: 1\n"));

    let json: serde_json::Value = serde_json::from_str(&report.json).unwrap();
    assert_eq!(json["products"][0]["closest"][0]["release"], "OCP 4.20");
    assert_eq!(json["summary"]["unmapped_operators"], 1);
}

#[test]
fn missing_reference_disables_version_filter() {
    let dir = workspace(None);
    let ingested = ingest(&inputs(dir.path())).unwrap();
    assert!(ingested.constraints.is_empty());
    assert!(matches!(
        ingested.issues.as_slice(),
        [DataIssue::ConstraintSourceMissing { .. }]
    ));

    let generated_at = today().and_hms_opt(8, 0, 0).unwrap();
    let report = run_search(&ingested, &ResolveOptions::default(), today(), generated_at).unwrap();
    assert_eq!(report.rows[0].matched, Some(2));
    assert_eq!(
        report.rows[0].detail,
        "OCP 4.19 (2026-11-01)\nOCP 4.20 (2027-02-01)"
    );
    assert!(report.text.contains("constraint_source_missing: 1\n"));
}

#[test]
fn show_all_resolves_past_releases() {
    let dir = workspace(Some(""));
    let ingested = ingest(&inputs(dir.path())).unwrap();
    let generated_at = today().and_hms_opt(8, 0, 0).unwrap();
    let report = run_search(&ingested, &ResolveOptions::show_all(), today(), generated_at).unwrap();
    assert_eq!(report.rows[1].detail, "Quay 3.14 (2026-01-10)");
    assert_eq!(report.summary.unresolved_products, 0);
}

#[test]
fn missing_search_list_is_fatal() {
    let dir = workspace(Some(""));
    fs::remove_file(dir.path().join("source.txt")).unwrap();
    let error = ingest(&inputs(dir.path())).unwrap_err();
    assert!(format!("{error:#}").contains("read search list"));
}

#[test]
fn unreadable_reference_disables_version_filter() {
    let dir = workspace(None);
    fs::write(dir.path().join("reference.txt"), b"OCP 4.20\n\xff\xfe QUAY 3.16\n").unwrap();
    let ingested = ingest(&inputs(dir.path())).expect("unreadable reference is not fatal");
    assert!(ingested.constraints.is_empty());
    assert!(matches!(
        ingested.issues.as_slice(),
        [DataIssue::ConstraintSourceUnreadable { .. }]
    ));

    let generated_at = today().and_hms_opt(8, 0, 0).unwrap();
    let report = run_search(&ingested, &ResolveOptions::default(), today(), generated_at).unwrap();
    assert_eq!(report.rows[0].matched, Some(2));
    assert!(report.text.contains("constraint_source_unreadable: 1\n"));
}

#[test]
fn search_list_without_items_is_fatal() {
    for source in ["Operator\tProduct\tRelease\n", "", "\n   \n"] {
        let dir = workspace(Some(""));
        fs::write(dir.path().join("source.txt"), source).unwrap();
        let error = ingest(&inputs(dir.path())).unwrap_err();
        assert!(
            matches!(
                error.downcast_ref::<IngestError>(),
                Some(IngestError::SourceEmpty { .. })
            ),
            "{source:?} gave {error:#}"
        );
    }
}

#[test]
fn missing_release_table_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let error = SearchInputs::resolve(dir.path(), None, None, None).unwrap_err();
    assert!(format!("{error:#}").contains("find release table"));
}

#[test]
fn products_listing_counts_releases() {
    let dir = workspace(None);
    let ingested = ingest(&inputs(dir.path())).unwrap();
    assert_eq!(
        count_products(&ingested.table),
        vec![
            ("Red Hat OpenShift Container Platform".to_string(), 2),
            ("Red Hat Quay".to_string(), 1),
        ]
    );
}
