//------------ CoordinationClient trait ------------------------------------------

use crate::error::ZkError;

/// Primitive operations against the coordination service. Mirrors the
/// handful of ZooKeeper calls the original implementation uses directly
/// (`Create`, `Exists`, `Get`, `Set`, `Children`), kept as a trait so every
/// higher-level component (`struba-shard`, `struba-gateway`,
/// `struba-controller`) can be exercised in tests against
/// [`crate::fake::FakeCoordinationClient`] instead of a live coordination
/// service.
///
/// The composite helpers built on top of these primitives
/// (`ensure_path`, `create_if_absent`, `id_from_path`, ...) live as free
/// functions in this crate rather than as trait methods, matching how the
/// original `zkutils` package layers them over a bare `*zk.Conn`.
pub trait CoordinationClient: Send + Sync {
    /// Does `path` exist?
    fn exists(&self, path: &str) -> Result<bool, ZkError>;

    /// Create `path` with the given payload. Errors if `path` already
    /// exists.
    fn create(&self, path: &str, data: &[u8]) -> Result<(), ZkError>;

    /// Read `path`, returning its payload and current version.
    fn get(&self, path: &str) -> Result<(Vec<u8>, i32), ZkError>;

    /// Overwrite `path`'s payload, failing with
    /// [`ZkError::Conflict`] if `expected_version` does not match the
    /// path's current version.
    fn set(&self, path: &str, data: &[u8], expected_version: i32) -> Result<(), ZkError>;

    /// List the immediate children of `path` (names only, not full paths).
    fn children(&self, path: &str) -> Result<Vec<String>, ZkError>;

    /// Create a uniquely-numbered child of `path_prefix` whose lifetime is
    /// tied to this client's session. Returns the full path the service
    /// assigned, e.g. `"/struba/backend/nodes/0000000042"`.
    fn create_ephemeral_sequential(&self, path_prefix: &str, data: &[u8]) -> Result<String, ZkError>;
}

/// Idempotently create every ancestor directory of `path`, like `mkdir -p`.
pub fn ensure_path(c: &dyn CoordinationClient, path: &str) -> Result<(), ZkError> {
    let parts: Vec<&str> = path.split('/').collect();
    for i in 1..parts.len() {
        create_if_absent(c, &parts[..=i].join("/"))?;
    }
    Ok(())
}

/// Create `path` with an empty payload if (and only if) it does not
/// already exist.
pub fn create_if_absent(c: &dyn CoordinationClient, path: &str) -> Result<(), ZkError> {
    if path.trim_matches('/').is_empty() {
        return Ok(());
    }
    if !c.exists(path)? {
        c.create(path, b"")?;
    }
    Ok(())
}

/// Extract the integer suffix the coordination service assigned to an
/// ephemeral-sequential path, e.g. `"/struba/backend/nodes/0000000042"` ->
/// `42`.
pub fn id_from_path(path: &str) -> Result<i64, ZkError> {
    path.rsplit('/')
        .next()
        .and_then(|suffix| suffix.parse::<i64>().ok())
        .ok_or_else(|| ZkError::InvalidSequentialPath(path.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeCoordinationClient;

    #[test]
    fn ensure_path_creates_every_ancestor() {
        crate::test_common::init();
        let client = FakeCoordinationClient::new();
        ensure_path(&client, "/struba/backend/nodes").unwrap();
        assert!(client.exists("/struba").unwrap());
        assert!(client.exists("/struba/backend").unwrap());
        assert!(client.exists("/struba/backend/nodes").unwrap());
    }

    #[test]
    fn ensure_path_is_idempotent() {
        crate::test_common::init();
        let client = FakeCoordinationClient::new();
        ensure_path(&client, "/struba/backend/nodes").unwrap();
        ensure_path(&client, "/struba/backend/nodes").unwrap();
    }

    #[test]
    fn id_from_path_extracts_trailing_integer() {
        crate::test_common::init();
        assert_eq!(
            id_from_path("/struba/backend/nodes/0000000042").unwrap(),
            42
        );
        assert!(id_from_path("/struba/backend/nodes/not-a-number").is_err());
    }
}
