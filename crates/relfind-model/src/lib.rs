#![deny(unsafe_code)]

pub mod constraint;
pub mod issue;
pub mod options;
pub mod outcome;
pub mod record;
pub mod search;

pub use constraint::{
    PRODUCT_ABBREVIATIONS, VersionConstraint, VersionConstraints, product_for_abbreviation,
};
pub use issue::{DataIssue, count_issues};
pub use options::{
    DEFAULT_CLOSEST_N, DedupPolicy, FilterOrder, OverrideRule, ResolveOptions, TemporalMode,
};
pub use outcome::{
    Outcome, ProductOperatorCount, ProductOutcome, Resolution, ResolutionSummary,
    UnresolvedReason,
};
pub use record::{MISSING_VALUE, ReleaseColumn, ReleaseRecord, ReleaseTable};
pub use search::SearchItem;
