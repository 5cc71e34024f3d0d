//! Release resolution pipeline.
//!
//! Stages, leaves first:
//! 1. **Constraints**: reference lines → [`VersionConstraints`](relfind_model::VersionConstraints)
//! 2. **Normalize**: search list lines → ordered [`SearchItem`](relfind_model::SearchItem)s
//! 3. **Matching**: product requests → matching release records
//! 4. **Filter**: version filter, temporal filter, release deduplication
//! 5. **Select**: product grouping and closest-release selection
//! 6. **Aggregate**: outcomes → summary counters
//!
//! [`Resolver`] ties the stages together for one run.

#![deny(unsafe_code)]

pub mod aggregate;
pub mod constraints;
pub mod error;
pub mod filter;
pub mod matching;
pub mod normalize;
pub mod resolver;
pub mod select;
pub mod text;

pub use aggregate::summarize;
pub use constraints::load_constraints;
pub use error::{ResolveError, Result};
pub use filter::{FilterPipeline, Filtered, dedupe_releases, filter_by_version, filter_future};
pub use matching::MatchingEngine;
pub use normalize::{HEADER_MARKER, normalize_search_items, strip_enumeration};
pub use resolver::{Resolver, resolve};
pub use select::{
    GroupEntry, GroupedItems, ProductGroup, compare_ga_date, group_items, select_closest,
    union_matches,
};
pub use text::{Needle, normalize_text};
