//! The [`WorldState`] trait defining the store interface, and the
//! [`RangeScan`] resource returned by range queries.
//!
//! Any backend (the host ledger's transaction stub, the in-memory fake)
//! implements [`WorldState`] to give contract operations a uniform view of
//! the ordered key space.

use crate::error::StateResult;

/// A key together with the bytes stored under it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: Vec<u8>,
}

/// Ordered key-value snapshot reachable within one transaction.
///
/// All implementations must satisfy these invariants:
/// - Keys are ordered lexicographically by byte value; range scans yield
///   ascending order.
/// - `get_state` returns `Ok(None)` for an absent key, never an error.
/// - `delete_state` of an absent key is not guaranteed to fail; callers
///   that need strict delete semantics pre-check existence.
/// - Writes issued earlier in the same transaction are visible to later
///   reads (read-your-writes).
pub trait WorldState: Send + Sync {
    /// Read the bytes stored under `key`, or `None` if the key is absent.
    fn get_state(&self, key: &str) -> StateResult<Option<Vec<u8>>>;

    /// Write `value` under `key`, replacing any previous value.
    fn put_state(&self, key: &str, value: &[u8]) -> StateResult<()>;

    /// Remove `key`. Absent keys are tolerated.
    fn delete_state(&self, key: &str) -> StateResult<()>;

    /// Scan `[start, end)` in ascending lexicographic key order.
    ///
    /// An empty `start` means "from the beginning of the key space", an
    /// empty `end` means "to the end"; both empty scans everything. The
    /// returned [`RangeScan`] must be released after use — dropping it or
    /// calling [`RangeScan::close`] does so exactly once.
    fn get_state_by_range(&self, start: &str, end: &str) -> StateResult<RangeScan>;
}

/// The resource handle produced by [`WorldState::get_state_by_range`].
///
/// Iteration yields `StateResult<KeyValue>` so backends can report per-item
/// read failures. The release hook fires exactly once: either on an
/// explicit [`close`](Self::close) or when the scan is dropped — including
/// every early-return and panic path through a consumer.
pub struct RangeScan {
    items: std::vec::IntoIter<StateResult<KeyValue>>,
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl RangeScan {
    /// Build a scan over pre-collected items with a release hook.
    pub fn new(
        items: Vec<StateResult<KeyValue>>,
        release: impl FnOnce() + Send + 'static,
    ) -> Self {
        Self {
            items: items.into_iter(),
            release: Some(Box::new(release)),
        }
    }

    /// A scan over items with no release bookkeeping, for test doubles.
    pub fn unmanaged(items: Vec<StateResult<KeyValue>>) -> Self {
        Self::new(items, || {})
    }

    /// Release the scan explicitly.
    pub fn close(mut self) {
        self.fire_release();
    }

    fn fire_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Iterator for RangeScan {
    type Item = StateResult<KeyValue>;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next()
    }
}

impl Drop for RangeScan {
    fn drop(&mut self) {
        self.fire_release();
    }
}

impl std::fmt::Debug for RangeScan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeScan")
            .field("remaining", &self.items.len())
            .field("released", &self.release.is_none())
            .finish()
    }
}
