//! Filter pipeline: version filter, temporal filter, release deduplication.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use relfind_model::{
    DedupPolicy, FilterOrder, ReleaseRecord, ResolveOptions, TemporalMode, UnresolvedReason,
    VersionConstraints,
};

use crate::error::Result;
use crate::text::Needle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Version,
    Temporal,
}

impl Stage {
    fn reason(self) -> UnresolvedReason {
        match self {
            Self::Version => UnresolvedReason::VersionFiltered,
            Self::Temporal => UnresolvedReason::TemporalFiltered,
        }
    }
}

fn stage_order(order: FilterOrder) -> [Stage; 2] {
    match order {
        FilterOrder::VersionThenTemporal => [Stage::Version, Stage::Temporal],
        FilterOrder::TemporalThenVersion => [Stage::Temporal, Stage::Version],
    }
}

/// Records surviving the pipeline for one product group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filtered<'a> {
    /// Deduplicated survivors, in first-seen release order.
    pub records: Vec<&'a ReleaseRecord>,
    /// Stage that removed the last record, when `records` is empty.
    pub emptied_by: Option<UnresolvedReason>,
    /// Records dropped by the future-only filter for lack of a GA date.
    pub undated_excluded: usize,
}

/// Applies the configured filters to a group's raw matches.
#[derive(Debug, Clone)]
pub struct FilterPipeline {
    constraints: VersionConstraints,
    temporal_mode: TemporalMode,
    version_filter: bool,
    dedup_policy: DedupPolicy,
    filter_order: FilterOrder,
    today: NaiveDate,
}

impl FilterPipeline {
    pub fn new(constraints: VersionConstraints, options: &ResolveOptions, today: NaiveDate) -> Self {
        Self {
            constraints,
            temporal_mode: options.temporal_mode,
            version_filter: options.version_filter,
            dedup_policy: options.dedup_policy,
            filter_order: options.filter_order,
            today,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn apply<'a>(&self, product: &str, records: Vec<&'a ReleaseRecord>) -> Result<Filtered<'a>> {
        if records.is_empty() {
            return Ok(Filtered {
                records,
                emptied_by: Some(UnresolvedReason::NoMatches),
                undated_excluded: 0,
            });
        }

        let mut records = records;
        let mut undated_excluded = 0;
        for stage in stage_order(self.filter_order) {
            let before = records.len();
            records = match stage {
                Stage::Version => self.version_stage(product, records)?,
                Stage::Temporal => {
                    let (kept, undated) = self.temporal_stage(records);
                    undated_excluded += undated;
                    kept
                }
            };
            debug!(product, stage = ?stage, before, after = records.len(), "filter stage applied");
            if records.is_empty() {
                return Ok(Filtered {
                    records,
                    emptied_by: Some(stage.reason()),
                    undated_excluded,
                });
            }
        }

        Ok(Filtered {
            records: dedupe_releases(records, self.dedup_policy),
            emptied_by: None,
            undated_excluded,
        })
    }

    fn version_stage<'a>(
        &self,
        product: &str,
        records: Vec<&'a ReleaseRecord>,
    ) -> Result<Vec<&'a ReleaseRecord>> {
        if !self.version_filter {
            return Ok(records);
        }
        match self.constraints.get(product) {
            Some(version) => filter_by_version(records, version),
            None => Ok(records),
        }
    }

    fn temporal_stage<'a>(&self, records: Vec<&'a ReleaseRecord>) -> (Vec<&'a ReleaseRecord>, usize) {
        match self.temporal_mode {
            TemporalMode::FutureOnly => filter_future(records, self.today),
            TemporalMode::ShowAll => (records, 0),
        }
    }
}

/// Keeps records whose release name contains `version` (case-insensitive).
pub fn filter_by_version<'a>(
    records: Vec<&'a ReleaseRecord>,
    version: &str,
) -> Result<Vec<&'a ReleaseRecord>> {
    let needle = Needle::new(version)?;
    Ok(records
        .into_iter()
        .filter(|record| needle.is_match(&record.release))
        .collect())
}

/// Keeps records whose GA date is strictly after `today`.
///
/// Returns the survivors and the number of records dropped for lacking a date.
pub fn filter_future(records: Vec<&ReleaseRecord>, today: NaiveDate) -> (Vec<&ReleaseRecord>, usize) {
    let mut undated = 0;
    let kept = records
        .into_iter()
        .filter(|record| match record.ga_date {
            Some(date) => date > today,
            None => {
                undated += 1;
                false
            }
        })
        .collect();
    (kept, undated)
}

/// Keeps one record per release name.
///
/// The representative is chosen by GA date according to `policy`; a dated
/// record beats an undated one and ties keep the first record seen.
pub fn dedupe_releases(records: Vec<&ReleaseRecord>, policy: DedupPolicy) -> Vec<&ReleaseRecord> {
    let mut order: Vec<&str> = Vec::new();
    let mut best: BTreeMap<&str, &ReleaseRecord> = BTreeMap::new();
    for record in records {
        let key = record.release.as_str();
        let replace = match best.get(key) {
            Some(current) => prefers(record, current, policy),
            None => {
                order.push(key);
                true
            }
        };
        if replace {
            best.insert(key, record);
        }
    }
    order
        .into_iter()
        .filter_map(|key| best.get(key).copied())
        .collect()
}

fn prefers(candidate: &ReleaseRecord, current: &ReleaseRecord, policy: DedupPolicy) -> bool {
    match (candidate.ga_date, current.ga_date) {
        (Some(candidate), Some(current)) => match policy {
            DedupPolicy::Earliest => candidate < current,
            DedupPolicy::Latest => candidate > current,
        },
        (Some(_), None) => true,
        (None, _) => false,
    }
}
