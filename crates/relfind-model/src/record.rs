//! Release records and the in-memory release table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Placeholder shown for an empty record field.
pub const MISSING_VALUE: &str = "N/A";

/// Columns of the release reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseColumn {
    BusinessUnit,
    Product,
    Release,
    ReleaseShortname,
    ReleaseId,
    GaName,
    GaDate,
    Link,
    Maintainers,
}

impl ReleaseColumn {
    /// Every column, in export order.
    pub const ALL: [ReleaseColumn; 9] = [
        Self::BusinessUnit,
        Self::Product,
        Self::Release,
        Self::ReleaseShortname,
        Self::ReleaseId,
        Self::GaName,
        Self::GaDate,
        Self::Link,
        Self::Maintainers,
    ];

    /// Columns scanned for a product name, in scan order.
    pub const SEARCHABLE: [ReleaseColumn; 5] = [
        Self::Product,
        Self::Release,
        Self::ReleaseShortname,
        Self::ReleaseId,
        Self::GaName,
    ];

    /// Header label used by the product pages export.
    #[must_use]
    pub fn header(self) -> &'static str {
        match self {
            Self::BusinessUnit => "BU",
            Self::Product => "Product",
            Self::Release => "Release",
            Self::ReleaseShortname => "Release shortname",
            Self::ReleaseId => "Release ID",
            Self::GaName => "GA name",
            Self::GaDate => "GA date",
            Self::Link => "Link",
            Self::Maintainers => "Maintainers",
        }
    }

    /// Resolves a (normalized) header label, ignoring ASCII case.
    #[must_use]
    pub fn from_header(header: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|column| column.header().eq_ignore_ascii_case(header))
    }

    /// Identity columns; a table without them cannot be searched.
    #[must_use]
    pub fn is_required(self) -> bool {
        matches!(self, Self::Product | Self::Release)
    }
}

/// One row of the release reference table.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReleaseRecord {
    pub business_unit: Option<String>,
    pub product: String,
    pub release: String,
    pub release_shortname: Option<String>,
    pub release_id: Option<String>,
    pub ga_name: Option<String>,
    /// Parsed GA date; `None` when blank or unparsable.
    pub ga_date: Option<NaiveDate>,
    /// GA date cell as it appeared in the source.
    pub ga_date_raw: Option<String>,
    pub link: Option<String>,
    pub maintainers: Option<String>,
}

impl ReleaseRecord {
    pub fn new(product: impl Into<String>, release: impl Into<String>) -> Self {
        Self {
            business_unit: None,
            product: product.into(),
            release: release.into(),
            release_shortname: None,
            release_id: None,
            ga_name: None,
            ga_date: None,
            ga_date_raw: None,
            link: None,
            maintainers: None,
        }
    }

    #[must_use]
    pub fn with_ga_date(mut self, date: NaiveDate) -> Self {
        self.ga_date = Some(date);
        self.ga_date_raw = Some(date.format("%Y-%m-%d").to_string());
        self
    }

    #[must_use]
    pub fn with_ga_name(mut self, name: impl Into<String>) -> Self {
        self.ga_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_shortname(mut self, shortname: impl Into<String>) -> Self {
        self.release_shortname = Some(shortname.into());
        self
    }

    #[must_use]
    pub fn with_maintainers(mut self, maintainers: impl Into<String>) -> Self {
        self.maintainers = Some(maintainers.into());
        self
    }

    /// Returns the text value held in `column`, if any.
    ///
    /// `GaDate` yields the raw source text rather than the parsed date.
    #[must_use]
    pub fn column(&self, column: ReleaseColumn) -> Option<&str> {
        match column {
            ReleaseColumn::BusinessUnit => self.business_unit.as_deref(),
            ReleaseColumn::Product => Some(self.product.as_str()),
            ReleaseColumn::Release => Some(self.release.as_str()),
            ReleaseColumn::ReleaseShortname => self.release_shortname.as_deref(),
            ReleaseColumn::ReleaseId => self.release_id.as_deref(),
            ReleaseColumn::GaName => self.ga_name.as_deref(),
            ReleaseColumn::GaDate => self.ga_date_raw.as_deref(),
            ReleaseColumn::Link => self.link.as_deref(),
            ReleaseColumn::Maintainers => self.maintainers.as_deref(),
        }
    }

    /// Maintainer label for display, falling back to [`MISSING_VALUE`].
    #[must_use]
    pub fn maintainer_display(&self) -> &str {
        self.maintainers
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(MISSING_VALUE)
    }
}

/// Loaded release records plus the columns present in the source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReleaseTable {
    pub columns: Vec<ReleaseColumn>,
    pub records: Vec<ReleaseRecord>,
}

impl ReleaseTable {
    pub fn new(columns: Vec<ReleaseColumn>, records: Vec<ReleaseRecord>) -> Self {
        Self { columns, records }
    }

    /// Builds a table that exposes every column.
    pub fn from_records(records: Vec<ReleaseRecord>) -> Self {
        Self {
            columns: ReleaseColumn::ALL.to_vec(),
            records,
        }
    }

    pub fn has_column(&self, column: ReleaseColumn) -> bool {
        self.columns.contains(&column)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReleaseRecord> {
        self.records.iter()
    }
}
