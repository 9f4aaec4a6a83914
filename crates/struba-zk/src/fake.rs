//------------ In-memory coordination fake ---------------------------------------

use crate::client::CoordinationClient;
use crate::error::ZkError;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

struct Entry {
    data: Vec<u8>,
    version: i32,
}

/// An in-memory stand-in for the coordination service, used by
/// `struba-shard`, `struba-gateway`, and `struba-controller`'s test suites
/// so cluster-membership and promotion logic can be exercised without a
/// live ZooKeeper-like deployment. Ephemeral semantics (session-scoped
/// deletion) are approximated: [`FakeCoordinationClient::drop_session`]
/// removes every ephemeral path created by this client, standing in for
/// what a real session loss would do.
pub struct FakeCoordinationClient {
    entries: Mutex<BTreeMap<String, Entry>>,
    ephemeral: Mutex<Vec<String>>,
    next_sequence: AtomicI64,
}

impl Default for FakeCoordinationClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeCoordinationClient {
    pub fn new() -> Self {
        FakeCoordinationClient {
            entries: Mutex::new(BTreeMap::new()),
            ephemeral: Mutex::new(Vec::new()),
            next_sequence: AtomicI64::new(0),
        }
    }

    /// Simulate this client's coordination session ending: every
    /// ephemeral-sequential path it created disappears.
    pub fn drop_session(&self) {
        let paths = std::mem::take(&mut *self.ephemeral.lock().unwrap());
        let mut entries = self.entries.lock().unwrap();
        for path in paths {
            entries.remove(&path);
        }
    }
}

impl CoordinationClient for FakeCoordinationClient {
    fn exists(&self, path: &str) -> Result<bool, ZkError> {
        Ok(self.entries.lock().unwrap().contains_key(path))
    }

    fn create(&self, path: &str, data: &[u8]) -> Result<(), ZkError> {
        let mut entries = self.entries.lock().unwrap();
        if entries.contains_key(path) {
            return Err(ZkError::Conflict {
                path: path.to_string(),
            });
        }
        entries.insert(
            path.to_string(),
            Entry {
                data: data.to_vec(),
                version: 0,
            },
        );
        Ok(())
    }

    fn get(&self, path: &str) -> Result<(Vec<u8>, i32), ZkError> {
        self.entries
            .lock()
            .unwrap()
            .get(path)
            .map(|entry| (entry.data.clone(), entry.version))
            .ok_or_else(|| ZkError::NotFound(path.to_string()))
    }

    fn set(&self, path: &str, data: &[u8], expected_version: i32) -> Result<(), ZkError> {
        let mut entries = self.entries.lock().unwrap();
        let entry = entries
            .get_mut(path)
            .ok_or_else(|| ZkError::NotFound(path.to_string()))?;
        if entry.version != expected_version {
            return Err(ZkError::Conflict {
                path: path.to_string(),
            });
        }
        entry.data = data.to_vec();
        entry.version += 1;
        Ok(())
    }

    fn children(&self, path: &str) -> Result<Vec<String>, ZkError> {
        let prefix = format!("{}/", path.trim_end_matches('/'));
        let entries = self.entries.lock().unwrap();
        let mut names: Vec<String> = entries
            .keys()
            .filter_map(|key| {
                let rest = key.strip_prefix(&prefix)?;
                if rest.is_empty() || rest.contains('/') {
                    None
                } else {
                    Some(rest.to_string())
                }
            })
            .collect();
        names.sort();
        Ok(names)
    }

    fn create_ephemeral_sequential(
        &self,
        path_prefix: &str,
        data: &[u8],
    ) -> Result<String, ZkError> {
        let id = self.next_sequence.fetch_add(1, Ordering::SeqCst);
        let full_path = format!("{}{:010}", path_prefix, id);
        self.entries.lock().unwrap().insert(
            full_path.clone(),
            Entry {
                data: data.to_vec(),
                version: 0,
            },
        );
        self.ephemeral.lock().unwrap().push(full_path.clone());
        Ok(full_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_lists_only_immediate_names() {
        crate::test_common::init();
        let client = FakeCoordinationClient::new();
        client.create("/struba", b"").unwrap();
        client.create("/struba/backend", b"").unwrap();
        client
            .create_ephemeral_sequential("/struba/backend/", b"a")
            .unwrap();
        client
            .create_ephemeral_sequential("/struba/backend/", b"b")
            .unwrap();
        let mut children = client.children("/struba/backend").unwrap();
        children.sort();
        assert_eq!(children, vec!["0000000000", "0000000001"]);
    }

    #[test]
    fn set_rejects_stale_version() {
        crate::test_common::init();
        let client = FakeCoordinationClient::new();
        client.create("/struba/v_current", b"4").unwrap();
        let (_, version) = client.get("/struba/v_current").unwrap();
        assert!(client
            .set("/struba/v_current", b"5", version)
            .is_ok());
        // Same (now stale) version must be rejected the second time.
        assert!(client.set("/struba/v_current", b"6", version).is_err());
    }

    #[test]
    fn drop_session_removes_ephemeral_paths() {
        crate::test_common::init();
        let client = FakeCoordinationClient::new();
        let path = client
            .create_ephemeral_sequential("/struba/backend/nodes/", b"info")
            .unwrap();
        assert!(client.exists(&path).unwrap());
        client.drop_session();
        assert!(!client.exists(&path).unwrap());
    }
}
