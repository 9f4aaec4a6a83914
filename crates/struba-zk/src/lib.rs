//! Coordination-service client for the `struba` cluster.
//!
//! Wraps a hierarchical key-value coordination service (the original
//! implementation targets Apache ZooKeeper) behind the
//! [`CoordinationClient`] trait: directories, ephemeral-sequential nodes,
//! versioned reads/writes, and child listings. The coordination service
//! itself is an external collaborator out of this repository's scope (see
//! `SPEC_FULL.md` §1) -- this crate specifies only how the cluster uses
//! it, via the trait plus an in-memory [`fake::FakeCoordinationClient`]
//! for tests. Wiring a real ZooKeeper wire client is left to whoever
//! deploys this as a binary: implement [`CoordinationClient`] against a
//! ZooKeeper driver and hand it to `struba-shard`/`struba-gateway`/
//! `struba-controller`.

pub mod client;
pub mod error;
pub mod fake;
pub mod paths;
pub mod registry;

pub use client::{create_if_absent, ensure_path, id_from_path, CoordinationClient};
pub use error::ZkError;
pub use fake::FakeCoordinationClient;
pub use paths::{generation_path, nodes_path, nodes_path_prefix, ROOT};
pub use registry::{list_members, read_generation, write_generation, Member};
