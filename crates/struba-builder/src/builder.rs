//------------ Index builder ------------------------------------------------------

use crate::error::BuildError;
use crate::store::AnalyticsStore;
use struba_store::PrefixIndex;

/// Drive one full rebuild of the prefix index for a shard's
/// `[range_start, range_end)`: query the analytics store, and insert each
/// returned row into a fresh index.
///
/// Each row is inserted independently, even when the same phrase appears
/// in multiple hour buckets -- that phrase gets one top-K candidacy chance
/// per row. A phrase popular across many hours can win several of a
/// node's K slots. This is the builder reproducing the original
/// implementation's per-row insertion exactly; see `SPEC_FULL.md` §9 for
/// the open question about whether per-hour or time-summed counts were the
/// intended semantics.
///
/// Any row or transport error aborts the build: no partial index is
/// returned.
pub fn build(
    store: &dyn AnalyticsStore,
    range_start: &str,
    range_end: &str,
) -> Result<PrefixIndex, BuildError> {
    let rows = store.query_range(range_start, range_end)?;
    let mut index = PrefixIndex::new();
    for row in rows {
        let row = row?;
        index.insert(&row.phrase, row.count);
    }
    log::info!(
        "built index for [{range_start}, {range_end}): {} phrases inserted",
        index.len()
    );
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::PhraseUsageRow;
    use chrono::Utc;

    struct FixtureStore {
        rows: Vec<PhraseUsageRow>,
    }

    impl AnalyticsStore for FixtureStore {
        fn query_range(
            &self,
            range_start: &str,
            range_end: &str,
        ) -> Result<Box<dyn Iterator<Item = Result<PhraseUsageRow, BuildError>> + Send>, BuildError>
        {
            let range_start = range_start.to_string();
            let range_end = range_end.to_string();
            let rows: Vec<_> = self
                .rows
                .iter()
                .filter(|row| row.phrase.as_str() >= range_start.as_str() && row.phrase.as_str() < range_end.as_str())
                .cloned()
                .map(Ok)
                .collect();
            Ok(Box::new(rows.into_iter()))
        }
    }

    fn row(phrase: &str, count: u64) -> PhraseUsageRow {
        PhraseUsageRow {
            hour_bucket: Utc::now(),
            phrase: phrase.to_string(),
            count,
        }
    }

    #[test]
    fn build_inserts_every_row_in_range() {
        crate::test_common::init();
        let store = FixtureStore {
            rows: vec![row("apple", 5), row("ape", 2), row("zebra", 9)],
        };
        let index = build(&store, "a", "m").unwrap();
        assert_eq!(index.len(), 2);
        let mut results = index.lookup("a");
        results.sort();
        assert_eq!(results, vec!["ape".to_string(), "apple".to_string()]);
    }

    #[test]
    fn build_inserts_duplicate_phrase_across_hour_buckets_separately() {
        crate::test_common::init();
        let store = FixtureStore {
            rows: vec![row("foo", 5), row("foo", 5), row("foo", 5)],
        };
        let index = build(&store, "", "z").unwrap();
        assert_eq!(index.len(), 3);
        assert_eq!(index.lookup("foo"), vec!["foo", "foo", "foo"]);
    }

    struct FailingStore;

    impl AnalyticsStore for FailingStore {
        fn query_range(
            &self,
            _range_start: &str,
            _range_end: &str,
        ) -> Result<Box<dyn Iterator<Item = Result<PhraseUsageRow, BuildError>> + Send>, BuildError>
        {
            Err(BuildError::Transport("connection refused".into()))
        }
    }

    #[test]
    fn build_aborts_on_transport_failure() {
        crate::test_common::init();
        let result = build(&FailingStore, "a", "z");
        assert!(result.is_err());
    }

    struct PartiallyFailingStore;

    impl AnalyticsStore for PartiallyFailingStore {
        fn query_range(
            &self,
            _range_start: &str,
            _range_end: &str,
        ) -> Result<Box<dyn Iterator<Item = Result<PhraseUsageRow, BuildError>> + Send>, BuildError>
        {
            Ok(Box::new(
                vec![
                    Ok(PhraseUsageRow {
                        hour_bucket: Utc::now(),
                        phrase: "apple".into(),
                        count: 1,
                    }),
                    Err(BuildError::RowDecode("bad row".into())),
                ]
                .into_iter(),
            ))
        }
    }

    #[test]
    fn build_returns_no_partial_index_on_row_failure() {
        crate::test_common::init();
        let result = build(&PartiallyFailingStore, "a", "z");
        assert!(result.is_err());
    }
}
