//! The per-invocation handle through which the world state is reached.

use stay_state::WorldState;

/// Opaque transaction handle passed to every contract operation.
///
/// One context corresponds to one logical transaction boundary supplied by
/// the host ledger: all reads and writes issued through it see each other,
/// and none are committed until the host validates and orders the
/// transaction. The contract never captures the state globally — it is
/// injected per call.
#[derive(Clone, Copy)]
pub struct TransactionContext<'a> {
    state: &'a dyn WorldState,
}

impl<'a> TransactionContext<'a> {
    /// Wrap a world-state capability for one invocation.
    pub fn new(state: &'a dyn WorldState) -> Self {
        Self { state }
    }

    /// The world state reachable within this transaction.
    pub fn state(&self) -> &'a dyn WorldState {
        self.state
    }
}

impl std::fmt::Debug for TransactionContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransactionContext").finish_non_exhaustive()
    }
}
