//------------ Analytics store seam ----------------------------------------------

use crate::error::BuildError;
use chrono::{DateTime, Utc};

/// One row of the grouped aggregation query: a sum of counts for a single
/// `(hour_bucket, phrase)` pair. `hour_bucket` is carried through so a
/// downstream analytics view could reuse it, but the top-K build itself
/// only consumes `phrase` and `count` -- see `SPEC_FULL.md` §4.3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseUsageRow {
    pub hour_bucket: DateTime<Utc>,
    pub phrase: String,
    pub count: u64,
}

/// The columnar analytics store a build reads from (the original
/// implementation targets ClickHouse). Out of this repository's scope per
/// `SPEC_FULL.md` §1 -- this trait is the seam a concrete driver would
/// implement; `struba-builder` only needs rows ordered by phrase ascending.
pub trait AnalyticsStore: Send + Sync {
    /// Aggregate, grouped by `(hour_bucket, phrase)`, the sum of counts for
    /// rows with `phrase` in `[range_start, range_end)` and `event_time`
    /// within the last three days, ordered by phrase ascending.
    fn query_range(
        &self,
        range_start: &str,
        range_end: &str,
    ) -> Result<Box<dyn Iterator<Item = Result<PhraseUsageRow, BuildError>> + Send>, BuildError>;
}

/// A store with no rows in any range. Stands in for a real driver until
/// one is wired up; builds against it succeed and produce an empty index
/// rather than failing, so a freshly deployed shard with no configured
/// analytics backend still starts and serves (empty) results.
pub struct EmptyStore;

impl AnalyticsStore for EmptyStore {
    fn query_range(
        &self,
        _range_start: &str,
        _range_end: &str,
    ) -> Result<Box<dyn Iterator<Item = Result<PhraseUsageRow, BuildError>> + Send>, BuildError> {
        Ok(Box::new(std::iter::empty()))
    }
}
