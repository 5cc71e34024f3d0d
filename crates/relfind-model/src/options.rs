//! Configuration options for release resolution.

use serde::{Deserialize, Serialize};

/// Number of closest releases shown per product unless configured otherwise.
pub const DEFAULT_CLOSEST_N: usize = 2;

/// Which releases survive the GA date filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemporalMode {
    /// Keep releases whose GA date is strictly after today.
    #[default]
    FutureOnly,
    /// Keep every release regardless of GA date.
    ShowAll,
}

/// Which record represents a release when several rows share its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DedupPolicy {
    /// Keep the earliest GA date.
    #[default]
    Earliest,
    /// Keep the latest GA date.
    Latest,
}

/// Order in which the version and temporal filters run.
///
/// Deduplication always runs after both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOrder {
    #[default]
    VersionThenTemporal,
    TemporalThenVersion,
}

/// Forces a release-column search term for a named operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideRule {
    /// Operator name; compared after separator and case normalization.
    pub operator: String,
    /// Substring searched in the release column.
    pub search_term: String,
}

impl OverrideRule {
    pub fn new(operator: impl Into<String>, search_term: impl Into<String>) -> Self {
        Self {
            operator: operator.into(),
            search_term: search_term.into(),
        }
    }

    /// Built-in override table.
    pub fn defaults() -> Vec<Self> {
        vec![Self::new(
            "cluster-observability operator",
            "cluster observability operator",
        )]
    }
}

/// Options controlling one resolution run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveOptions {
    pub temporal_mode: TemporalMode,
    /// Apply version constraints loaded from the reference list.
    pub version_filter: bool,
    /// Maximum releases shown per resolved product (at least 1).
    pub closest_n: usize,
    pub dedup_policy: DedupPolicy,
    pub filter_order: FilterOrder,
    pub overrides: Vec<OverrideRule>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            temporal_mode: TemporalMode::FutureOnly,
            version_filter: true,
            closest_n: DEFAULT_CLOSEST_N,
            dedup_policy: DedupPolicy::Earliest,
            filter_order: FilterOrder::VersionThenTemporal,
            overrides: OverrideRule::defaults(),
        }
    }
}

impl ResolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that report every matching release, past or future.
    pub fn show_all() -> Self {
        Self {
            temporal_mode: TemporalMode::ShowAll,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_temporal_mode(mut self, mode: TemporalMode) -> Self {
        self.temporal_mode = mode;
        self
    }

    #[must_use]
    pub fn with_version_filter(mut self, enable: bool) -> Self {
        self.version_filter = enable;
        self
    }

    /// Sets the selection bound; zero is raised to one.
    #[must_use]
    pub fn with_closest_n(mut self, closest_n: usize) -> Self {
        self.closest_n = closest_n.max(1);
        self
    }

    #[must_use]
    pub fn with_dedup_policy(mut self, policy: DedupPolicy) -> Self {
        self.dedup_policy = policy;
        self
    }

    #[must_use]
    pub fn with_filter_order(mut self, order: FilterOrder) -> Self {
        self.filter_order = order;
        self
    }

    /// Appends an override rule after the existing ones.
    #[must_use]
    pub fn with_override(mut self, rule: OverrideRule) -> Self {
        self.overrides.push(rule);
        self
    }

    #[must_use]
    pub fn with_overrides(mut self, rules: Vec<OverrideRule>) -> Self {
        self.overrides = rules;
        self
    }

    /// Selection bound with the lower limit applied.
    pub fn closest_n(&self) -> usize {
        self.closest_n.max(1)
    }
}
