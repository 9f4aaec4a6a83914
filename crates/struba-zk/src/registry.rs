//------------ Generation pointer + node registry --------------------------------

use crate::client::CoordinationClient;
use crate::error::ZkError;
use struba_store::NodeInfo;

/// Read the cluster generation pointer at `path`, returning the current
/// generation and the coordination version to use for a subsequent
/// compare-and-set.
pub fn read_generation(c: &dyn CoordinationClient, path: &str) -> Result<(i64, i32), ZkError> {
    let (bytes, version) = c.get(path)?;
    let text = std::str::from_utf8(&bytes).unwrap_or("");
    let generation: i64 = if text.trim().is_empty() {
        0
    } else {
        text.trim()
            .parse()
            .map_err(|_| ZkError::InvalidGeneration {
                path: path.to_string(),
                value: bytes.clone(),
            })?
    };
    Ok((generation, version))
}

/// Write a new generation to the pointer, guarded by `expected_version`.
pub fn write_generation(
    c: &dyn CoordinationClient,
    path: &str,
    generation: i64,
    expected_version: i32,
) -> Result<(), ZkError> {
    c.set(path, generation.to_string().as_bytes(), expected_version)
}

/// A member's record together with the full coordination path it lives at
/// (needed to recover its ephemeral-sequence id for color partitioning,
/// and to write back an updated `Version` after a build).
#[derive(Debug, Clone)]
pub struct Member {
    pub path: String,
    pub info: NodeInfo,
}

/// List every member registered under `nodes_path`, parsing each child's
/// JSON payload. A child whose payload fails to parse is skipped with a
/// warning rather than failing the whole listing -- a single malformed
/// registration should not take down gateway routing or promotion.
pub fn list_members(c: &dyn CoordinationClient, nodes_path: &str) -> Result<Vec<Member>, ZkError> {
    let children = c.children(nodes_path)?;
    let mut members = Vec::with_capacity(children.len());
    for child in children {
        let path = format!("{}/{}", nodes_path.trim_end_matches('/'), child);
        let (bytes, _version) = match c.get(&path) {
            Ok(v) => v,
            Err(ZkError::NotFound(_)) => continue, // child vanished between list and read
            Err(err) => return Err(err),
        };
        match serde_json::from_slice::<NodeInfo>(&bytes) {
            Ok(info) => members.push(Member { path, info }),
            Err(source) => {
                log::warn!("skipping malformed node-info at {path}: {source}");
            }
        }
    }
    Ok(members)
}
