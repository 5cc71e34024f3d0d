//! Release table loading from product page CSV exports.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use relfind_model::{DataIssue, ReleaseColumn, ReleaseRecord, ReleaseTable};

use crate::dates::parse_ga_date;
use crate::error::{IngestError, Result};

/// A loaded release table together with the rows and cells it had to degrade.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub table: ReleaseTable,
    pub issues: Vec<DataIssue>,
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_cell(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_matches('\u{feff}').trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Header position of each known column.
#[derive(Debug, Default)]
struct ColumnIndex {
    positions: Vec<(ReleaseColumn, usize)>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Self {
        let mut positions = Vec::new();
        for (idx, header) in headers.iter().enumerate() {
            let Some(column) = ReleaseColumn::from_header(&normalize_header(header)) else {
                continue;
            };
            // First occurrence wins when an export repeats a header.
            if positions.iter().all(|(existing, _)| *existing != column) {
                positions.push((column, idx));
            }
        }
        Self { positions }
    }

    fn columns(&self) -> Vec<ReleaseColumn> {
        ReleaseColumn::ALL
            .into_iter()
            .filter(|column| self.positions.iter().any(|(c, _)| c == column))
            .collect()
    }

    fn cell(&self, record: &StringRecord, column: ReleaseColumn) -> Option<String> {
        let idx = self
            .positions
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, idx)| *idx)?;
        record.get(idx).and_then(normalize_cell)
    }
}

/// Reads a release table from a CSV file.
///
/// # Errors
///
/// Returns [`IngestError::TableUnavailable`] when the file is missing, has no
/// header, or lacks the `Product`/`Release` columns.
pub fn read_release_table(path: &Path) -> Result<LoadedTable> {
    let file = File::open(path).map_err(|error| {
        if error.kind() == std::io::ErrorKind::NotFound {
            IngestError::table(path, "file not found")
        } else {
            IngestError::io(path, error)
        }
    })?;
    read_release_table_from_reader(file, path)
}

/// Reads a release table from any reader; `path` labels errors only.
pub fn read_release_table_from_reader<R: Read>(reader: R, path: &Path) -> Result<LoadedTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers = reader
        .headers()
        .map_err(|error| IngestError::table(path, format!("unreadable header: {error}")))?
        .clone();
    let index = ColumnIndex::from_headers(&headers);
    let columns = index.columns();
    if let Some(missing) = ReleaseColumn::ALL
        .into_iter()
        .find(|column| column.is_required() && !columns.contains(column))
    {
        return Err(IngestError::table(
            path,
            format!("missing required column '{}'", missing.header()),
        ));
    }

    let mut records = Vec::new();
    let mut issues = Vec::new();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(error) => {
                let line = error.position().map_or(0, csv::Position::line);
                debug!(line, %error, "skipping undecodable row");
                issues.push(DataIssue::MalformedRow {
                    line,
                    reason: error.to_string(),
                });
                continue;
            }
        };
        let line = record.position().map_or(0, csv::Position::line);
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        match build_record(&index, &record, line, &mut issues) {
            Some(release) => records.push(release),
            None => {
                debug!(line, "skipping row without product or release");
                issues.push(DataIssue::MalformedRow {
                    line,
                    reason: "missing product or release".to_string(),
                });
            }
        }
    }

    info!(
        path = %path.display(),
        record_count = records.len(),
        issue_count = issues.len(),
        "release table loaded"
    );
    Ok(LoadedTable {
        table: ReleaseTable::new(columns, records),
        issues,
    })
}

fn build_record(
    index: &ColumnIndex,
    record: &StringRecord,
    line: u64,
    issues: &mut Vec<DataIssue>,
) -> Option<ReleaseRecord> {
    let product = index.cell(record, ReleaseColumn::Product)?;
    let release = index.cell(record, ReleaseColumn::Release)?;
    let ga_date_raw = index.cell(record, ReleaseColumn::GaDate);
    let ga_date = ga_date_raw.as_deref().and_then(parse_ga_date);
    if let (Some(raw), None) = (&ga_date_raw, ga_date) {
        debug!(line, release = %release, value = %raw, "unparsable GA date");
        issues.push(DataIssue::UnparsableDate {
            line,
            release: release.clone(),
            value: raw.clone(),
        });
    }
    Some(ReleaseRecord {
        business_unit: index.cell(record, ReleaseColumn::BusinessUnit),
        product,
        release,
        release_shortname: index.cell(record, ReleaseColumn::ReleaseShortname),
        release_id: index.cell(record, ReleaseColumn::ReleaseId),
        ga_name: index.cell(record, ReleaseColumn::GaName),
        ga_date,
        ga_date_raw,
        link: index.cell(record, ReleaseColumn::Link),
        maintainers: index.cell(record, ReleaseColumn::Maintainers),
    })
}
