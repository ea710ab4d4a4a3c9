//! In-memory world state for tests, local demos, and embedding.
//!
//! [`MemoryState`] keeps all entries in a `BTreeMap` behind a `RwLock`, so
//! range scans come out in ascending lexicographic key order for free. It
//! implements the full [`WorldState`] trait and is the backend the contract
//! unit tests and the in-process gateway channel run against.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::error::{StateError, StateResult};
use crate::traits::{KeyValue, RangeScan, WorldState};

/// An in-memory implementation of [`WorldState`].
///
/// All data lives in a `BTreeMap` behind a `RwLock` and is lost when the
/// state is dropped. Range scans snapshot the matching entries under the
/// read lock, so a scan is stable against concurrent writes.
pub struct MemoryState {
    entries: RwLock<BTreeMap<String, Vec<u8>>>,
    open_scans: Arc<AtomicUsize>,
}

impl MemoryState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
            open_scans: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    /// Returns `true` if no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }

    /// Remove all entries.
    pub fn clear(&self) {
        self.entries.write().expect("lock poisoned").clear();
    }

    /// All keys in ascending order.
    pub fn keys(&self) -> Vec<String> {
        let map = self.entries.read().expect("lock poisoned");
        map.keys().cloned().collect()
    }

    /// Number of range scans created but not yet released. Tests use this
    /// to assert the scan resource is released on every exit path.
    pub fn open_scans(&self) -> usize {
        self.open_scans.load(Ordering::SeqCst)
    }

    fn read_guard(&self) -> StateResult<std::sync::RwLockReadGuard<'_, BTreeMap<String, Vec<u8>>>> {
        self.entries
            .read()
            .map_err(|e| StateError::Backend(format!("lock poisoned: {e}")))
    }

    fn write_guard(
        &self,
    ) -> StateResult<std::sync::RwLockWriteGuard<'_, BTreeMap<String, Vec<u8>>>> {
        self.entries
            .write()
            .map_err(|e| StateError::Backend(format!("lock poisoned: {e}")))
    }
}

impl Default for MemoryState {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldState for MemoryState {
    fn get_state(&self, key: &str) -> StateResult<Option<Vec<u8>>> {
        let map = self.read_guard()?;
        Ok(map.get(key).cloned())
    }

    fn put_state(&self, key: &str, value: &[u8]) -> StateResult<()> {
        let mut map = self.write_guard()?;
        map.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete_state(&self, key: &str) -> StateResult<()> {
        let mut map = self.write_guard()?;
        // Absent keys are tolerated; strict callers pre-check existence.
        map.remove(key);
        Ok(())
    }

    fn get_state_by_range(&self, start: &str, end: &str) -> StateResult<RangeScan> {
        let map = self.read_guard()?;
        let lower = if start.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Included(start.to_string())
        };
        let upper = if end.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Excluded(end.to_string())
        };
        let items: Vec<StateResult<KeyValue>> = map
            .range::<String, _>((lower, upper))
            .map(|(key, value)| {
                Ok(KeyValue {
                    key: key.clone(),
                    value: value.clone(),
                })
            })
            .collect();
        drop(map);

        debug!(start, end, results = items.len(), "opened range scan");
        self.open_scans.fetch_add(1, Ordering::SeqCst);
        let open_scans = self.open_scans.clone();
        Ok(RangeScan::new(items, move || {
            open_scans.fetch_sub(1, Ordering::SeqCst);
        }))
    }
}

impl std::fmt::Debug for MemoryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryState")
            .field("key_count", &self.len())
            .field("open_scans", &self.open_scans())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_of_absent_key_is_none_not_error() {
        let state = MemoryState::new();
        assert_eq!(state.get_state("missing").unwrap(), None);
    }

    #[test]
    fn put_then_get_returns_the_value() {
        let state = MemoryState::new();
        state.put_state("k", b"v").unwrap();
        assert_eq!(state.get_state("k").unwrap(), Some(b"v".to_vec()));
    }

    #[test]
    fn put_replaces_the_previous_value() {
        let state = MemoryState::new();
        state.put_state("k", b"old").unwrap();
        state.put_state("k", b"new").unwrap();
        assert_eq!(state.get_state("k").unwrap(), Some(b"new".to_vec()));
    }

    #[test]
    fn delete_removes_and_tolerates_absence() {
        let state = MemoryState::new();
        state.put_state("k", b"v").unwrap();
        state.delete_state("k").unwrap();
        assert_eq!(state.get_state("k").unwrap(), None);
        // Deleting again must not fail.
        state.delete_state("k").unwrap();
    }

    #[test]
    fn unbounded_range_yields_all_keys_in_ascending_order() {
        let state = MemoryState::new();
        state.put_state("b", b"2").unwrap();
        state.put_state("a", b"1").unwrap();
        state.put_state("c", b"3").unwrap();

        let keys: Vec<String> = state
            .get_state_by_range("", "")
            .unwrap()
            .map(|item| item.unwrap().key)
            .collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn bounded_range_is_start_inclusive_end_exclusive() {
        let state = MemoryState::new();
        for key in ["a", "b", "c", "d"] {
            state.put_state(key, b"x").unwrap();
        }

        let keys: Vec<String> = state
            .get_state_by_range("b", "d")
            .unwrap()
            .map(|item| item.unwrap().key)
            .collect();
        assert_eq!(keys, vec!["b", "c"]);
    }

    #[test]
    fn scan_is_a_snapshot_against_later_writes() {
        let state = MemoryState::new();
        state.put_state("a", b"1").unwrap();
        let scan = state.get_state_by_range("", "").unwrap();
        state.put_state("b", b"2").unwrap();
        let keys: Vec<String> = scan.map(|item| item.unwrap().key).collect();
        assert_eq!(keys, vec!["a"]);
    }

    #[test]
    fn open_scan_count_tracks_release() {
        let state = MemoryState::new();
        state.put_state("a", b"1").unwrap();
        assert_eq!(state.open_scans(), 0);

        let scan = state.get_state_by_range("", "").unwrap();
        assert_eq!(state.open_scans(), 1);
        drop(scan);
        assert_eq!(state.open_scans(), 0);

        let scan = state.get_state_by_range("", "").unwrap();
        scan.close();
        assert_eq!(state.open_scans(), 0);
    }
}
