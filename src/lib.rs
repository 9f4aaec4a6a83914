//! In-memory top-K prefix index.
//!
//! A [`PrefixIndex`] is a trie over unicode code points. Every node carries
//! a bounded, count-sorted list of the most popular phrases in its
//! subtree ([`TopK`]), maintained incrementally as phrases are inserted.
//! Once a build finishes the index is immutable and safe to share across
//! reader threads.
//!
//! This crate is the pure data-structure core of the `struba` autocomplete
//! service: it knows nothing about the network, the coordination service,
//! or the analytics store that feeds it. See `struba-builder` for the
//! component that drives one full rebuild, and `struba-shard` for the
//! service that serves lookups from a built index.

pub use node_info::{color, Color, NodeInfo};
pub use topk::TOP_K;
pub use trie::PrefixIndex;

pub mod node_info;
pub mod topk;
pub mod trie;
