//! Inputs shared by the report renderers.

use chrono::{NaiveDate, NaiveDateTime};

use relfind_model::{DataIssue, Resolution, ResolveOptions, TemporalMode, VersionConstraints};

/// Everything a renderer needs from one run.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    pub resolution: &'a Resolution<'a>,
    pub options: &'a ResolveOptions,
    pub constraints: &'a VersionConstraints,
    /// Reference date of the temporal filter.
    pub today: NaiveDate,
    pub generated_at: NaiveDateTime,
    pub issues: &'a [DataIssue],
}

impl ReportContext<'_> {
    pub(crate) fn future_only(&self) -> bool {
        self.options.temporal_mode == TemporalMode::FutureOnly
    }

    /// Whether the version filter was applied to at least one product.
    pub(crate) fn version_filter_active(&self) -> bool {
        self.options.version_filter && !self.constraints.is_empty()
    }
}
