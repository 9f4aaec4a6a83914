//------------ Trie + top-K prefix index -----------------------------------------

use crate::topk::merge_insert;
use std::collections::BTreeMap;

/// A single trie node. Nodes are held in a flat arena (`PrefixIndex::nodes`)
/// rather than linked by owning pointers: a node's children are stored by
/// index, and a node keeps its parent's index too. This sidesteps the
/// classic Rust tree-with-back-references problem (an owning parent and a
/// non-owning child-to-parent edge can't both be plain references) without
/// reaching for `Rc`/`Weak` or unsafe code -- the arena index doubles as the
/// non-owning back-reference the design calls for.
struct Node {
    children: BTreeMap<char, usize>,
    parent: Option<usize>,
    /// Ascending by count, len <= TOP_K. See `crate::topk`.
    top_k: Vec<(String, u64)>,
    terminal: bool,
}

impl Node {
    fn root() -> Self {
        Node {
            children: BTreeMap::new(),
            parent: None,
            top_k: Vec::new(),
            terminal: false,
        }
    }

    fn child(parent: usize) -> Self {
        Node {
            children: BTreeMap::new(),
            parent: Some(parent),
            top_k: Vec::new(),
            terminal: false,
        }
    }
}

const ROOT: usize = 0;

/// An in-memory top-K prefix index.
///
/// Built by repeated [`PrefixIndex::insert`] calls, then queried via
/// [`PrefixIndex::lookup`]. A fully-built index is immutable: nothing in
/// this type's public API mutates it after construction except `insert`
/// itself, so once a build loop finishes, concurrent `lookup` calls are
/// race-free by construction (shared references only).
pub struct PrefixIndex {
    nodes: Vec<Node>,
    len: usize,
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixIndex {
    pub fn new() -> Self {
        PrefixIndex {
            nodes: vec![Node::root()],
            len: 0,
        }
    }

    /// Number of phrases inserted so far (including duplicates -- each
    /// `insert` call counts once, regardless of whether the phrase was
    /// seen before).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert `phrase` with `count`, creating nodes along its code-point
    /// path on demand, then climb from the new leaf's parent up to and
    /// including the root, merging `(phrase, count)` into each ancestor's
    /// top-K list.
    ///
    /// Each occurrence is inserted independently: inserting the same
    /// phrase twice gives it two separate chances to win a slot in every
    /// ancestor's top-K, and two entries in the result if it wins twice.
    /// This mirrors the index builder's per-row insertion (see
    /// `struba-builder`) and is intentional, not a bug -- see
    /// `SPEC_FULL.md` §9 on the per-hour-bucket insertion semantics.
    pub fn insert(&mut self, phrase: &str, count: u64) {
        self.len += 1;

        let mut path = Vec::with_capacity(phrase.chars().count() + 1);
        path.push(ROOT);
        let mut current = ROOT;
        for ch in phrase.chars() {
            current = match self.nodes[current].children.get(&ch) {
                Some(&next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(Node::child(current));
                    self.nodes[current].children.insert(ch, next);
                    next
                }
            };
            path.push(current);
        }

        self.nodes[current].terminal = true;

        // Ascend from the leaf's parent up to and including the root.
        for &ancestor in path[..path.len() - 1].iter().rev() {
            merge_insert(&mut self.nodes[ancestor].top_k, phrase, count);
        }
    }

    /// Look up `prefix`. Returns the matching node's top-K phrases in
    /// stored order (ascending by count); returns an empty vector if no
    /// phrase with this prefix was ever inserted. Never errors: a missing
    /// prefix is not a failure, it's an empty result.
    pub fn lookup(&self, prefix: &str) -> Vec<String> {
        let mut current = ROOT;
        for ch in prefix.chars() {
            match self.nodes[current].children.get(&ch) {
                Some(&next) => current = next,
                None => return Vec::new(),
            }
        }
        self.nodes[current]
            .top_k
            .iter()
            .map(|(phrase, _)| phrase.clone())
            .collect()
    }

    /// Same as [`PrefixIndex::lookup`] but pairs each phrase with its
    /// retained count, for callers (tests, diagnostics) that need it.
    pub fn lookup_with_counts(&self, prefix: &str) -> Vec<(String, u64)> {
        let mut current = ROOT;
        for ch in prefix.chars() {
            match self.nodes[current].children.get(&ch) {
                Some(&next) => current = next,
                None => return Vec::new(),
            }
        }
        self.nodes[current].top_k.clone()
    }
}
