//------------ Top-K merge ----------------------------------------------------

/// Number of phrases retained per trie node.
pub const TOP_K: usize = 5;

/// Merge `(phrase, count)` into a node's top-K list.
///
/// `list` must already be sorted ascending by count (the invariant every
/// [`crate::trie::PrefixIndex`] node maintains). The incoming pair is
/// inserted at the lower bound of its count -- the first position whose
/// existing count is `>=` the incoming one. If the list now holds more
/// than [`TOP_K`] entries, the smallest (position 0) is evicted.
///
/// This reproduces the original implementation's `sort.Search` + slice
/// insert/shift behavior exactly. One consequence worth spelling out: a
/// lower-bound insert places a new entry *ahead of* existing entries with
/// the same count, at the very index eviction removes first. So once a
/// node's list is at capacity and tied at the minimum count, the next
/// arrival at that same count is inserted at position 0 and evicted again
/// immediately -- the earliest entries at a given count are the ones that
/// stick, not the latest. Tie-break order is therefore a function of
/// insertion order, but favors whichever entry first reached the slot, not
/// whichever arrived last.
pub fn merge_insert(list: &mut Vec<(String, u64)>, phrase: &str, count: u64) {
    let pos = list.partition_point(|(_, c)| *c < count);
    list.insert(pos, (phrase.to_string(), count));
    if list.len() > TOP_K {
        list.remove(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserts_in_ascending_order() {
        let mut list = Vec::new();
        merge_insert(&mut list, "b", 2);
        merge_insert(&mut list, "a", 1);
        merge_insert(&mut list, "c", 3);
        assert_eq!(
            list,
            vec![
                ("a".to_string(), 1),
                ("b".to_string(), 2),
                ("c".to_string(), 3),
            ]
        );
    }

    #[test]
    fn evicts_smallest_once_over_capacity() {
        let mut list = Vec::new();
        for (phrase, count) in [("a1", 1), ("a2", 2), ("a3", 3), ("a4", 4), ("a5", 5), ("a6", 6)] {
            merge_insert(&mut list, phrase, count);
        }
        assert_eq!(list.len(), TOP_K);
        let counts: Vec<u64> = list.iter().map(|(_, c)| *c).collect();
        assert_eq!(counts, vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn equal_counts_keep_earliest_insertion_once_at_capacity() {
        let mut list = Vec::new();
        for phrase in ["z1", "z2", "z3", "z4", "z5", "z6"] {
            merge_insert(&mut list, phrase, 1);
        }
        // All six phrases tie at count 1. Lower-bound insertion places
        // each new tie at position 0, which is exactly the position
        // evicted once the list overflows -- so z6 (and any later tie)
        // bounces straight back out, and the first five insertions are
        // the ones that stick.
        assert_eq!(list.len(), TOP_K);
        assert!(list.iter().any(|(p, _)| p == "z1"));
        assert!(!list.iter().any(|(p, _)| p == "z6"));
    }
}
