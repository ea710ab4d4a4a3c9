//! The generic CRUD/enumeration pattern both contract variants share.
//!
//! Everything here is parameterized over [`StateEntity`], so the flat and
//! nested hotel surfaces are two thin instantiations of one set of
//! semantics:
//!
//! - existence is a pure presence check — stored bytes are never decoded
//! - create and update read before they write, so racing transactions are
//!   detectable by the host's read/write-set validation
//! - update replaces the stored record wholesale, never merges
//! - enumeration aborts on the first undecodable value rather than return
//!   a silently truncated list
//! - seeding writes unconditionally, overwriting whatever is present

use tracing::debug;

use stay_types::StateEntity;

use crate::context::TransactionContext;
use crate::error::{ContractError, ContractResult};

/// Returns `true` iff a value is stored under `id`.
///
/// Presence only: malformed bytes under `id` still count as existing.
pub fn exists<E: StateEntity>(ctx: &TransactionContext<'_>, id: &str) -> ContractResult<bool> {
    Ok(ctx.state().get_state(id)?.is_some())
}

/// Write a fresh entity. Fails with [`ContractError::AlreadyExists`] and
/// performs no write if the id is already taken.
pub fn create<E: StateEntity>(ctx: &TransactionContext<'_>, entity: &E) -> ContractResult<()> {
    if exists::<E>(ctx, entity.key())? {
        return Err(ContractError::AlreadyExists {
            entity: E::TYPE_NAME,
            id: entity.key().to_string(),
        });
    }

    let bytes = entity.to_state_bytes()?;
    ctx.state().put_state(entity.key(), &bytes)?;
    debug!(kind = E::TYPE_NAME, id = entity.key(), "created entity");
    Ok(())
}

/// Read and decode the entity stored under `id`.
///
/// An absent key is [`ContractError::NotFound`]; a present key with
/// malformed bytes is a codec error, never masked as not-found.
pub fn read<E: StateEntity>(ctx: &TransactionContext<'_>, id: &str) -> ContractResult<E> {
    let bytes = ctx
        .state()
        .get_state(id)?
        .ok_or_else(|| ContractError::NotFound {
            entity: E::TYPE_NAME,
            id: id.to_string(),
        })?;
    Ok(E::from_state_bytes(&bytes)?)
}

/// Replace the entity stored under the given id wholesale.
///
/// Fails with [`ContractError::NotFound`] and performs no write if the id
/// is absent. Partial field updates are not supported.
pub fn update<E: StateEntity>(ctx: &TransactionContext<'_>, entity: &E) -> ContractResult<()> {
    if !exists::<E>(ctx, entity.key())? {
        return Err(ContractError::NotFound {
            entity: E::TYPE_NAME,
            id: entity.key().to_string(),
        });
    }

    let bytes = entity.to_state_bytes()?;
    ctx.state().put_state(entity.key(), &bytes)?;
    debug!(kind = E::TYPE_NAME, id = entity.key(), "updated entity");
    Ok(())
}

/// Remove the entity stored under `id`.
///
/// Fails with [`ContractError::NotFound`] if the id is absent; the state
/// layer itself does not guarantee that, so existence is checked first.
pub fn delete<E: StateEntity>(ctx: &TransactionContext<'_>, id: &str) -> ContractResult<()> {
    if !exists::<E>(ctx, id)? {
        return Err(ContractError::NotFound {
            entity: E::TYPE_NAME,
            id: id.to_string(),
        });
    }

    ctx.state().delete_state(id)?;
    debug!(kind = E::TYPE_NAME, id, "deleted entity");
    Ok(())
}

/// Enumerate every entity in the key space, in ascending key order.
///
/// Runs one unbounded range scan and decodes each value in scan order. If
/// any single value fails to decode the whole enumeration aborts with that
/// error — no partial list is returned. The scan resource is released
/// exactly once on every exit path: the `for` loop owns it, so normal
/// completion, the `?` early returns, and unwinding all drop it.
pub fn list_all<E: StateEntity>(ctx: &TransactionContext<'_>) -> ContractResult<Vec<E>> {
    let scan = ctx.state().get_state_by_range("", "")?;

    let mut entities = Vec::new();
    for item in scan {
        let kv = item?;
        entities.push(E::from_state_bytes(&kv.value)?);
    }

    debug!(kind = E::TYPE_NAME, count = entities.len(), "enumerated entities");
    Ok(entities)
}

/// Write a fixed batch of seed entities unconditionally.
///
/// No existence check and no rollback across the batch: a failure partway
/// through leaves the prior writes in place within the transaction scope.
/// Batch atomicity is the enclosing ledger transaction's concern.
pub fn init_ledger<E: StateEntity>(ctx: &TransactionContext<'_>, seeds: &[E]) -> ContractResult<()> {
    for seed in seeds {
        let bytes = seed.to_state_bytes()?;
        ctx.state().put_state(seed.key(), &bytes)?;
    }
    debug!(kind = E::TYPE_NAME, count = seeds.len(), "seeded ledger");
    Ok(())
}

#[cfg(test)]
mod tests {
    use stay_state::{KeyValue, MemoryState, RangeScan, StateError, StateResult, WorldState};
    use stay_types::hotel::Hotel;
    use stay_types::CodecError;

    use super::*;

    fn ctx(state: &MemoryState) -> TransactionContext<'_> {
        TransactionContext::new(state)
    }

    fn sample(id: &str) -> Hotel {
        Hotel::new(id, "Legend Saigon", true, 8.1)
    }

    #[test]
    fn create_then_read_yields_the_constructed_entity() {
        let state = MemoryState::new();
        let hotel = sample("5");
        create(&ctx(&state), &hotel).unwrap();
        let read_back: Hotel = read(&ctx(&state), "5").unwrap();
        assert_eq!(read_back, hotel);
    }

    #[test]
    fn create_on_taken_id_fails_and_leaves_prior_value() {
        let state = MemoryState::new();
        let first = sample("5");
        create(&ctx(&state), &first).unwrap();

        let second = Hotel::new("5", "Imposter", false, 1.0);
        let err = create(&ctx(&state), &second).unwrap_err();
        assert_eq!(
            err,
            ContractError::AlreadyExists {
                entity: "hotel",
                id: "5".into()
            }
        );
        assert_eq!(err.to_string(), "the hotel 5 already exists");

        let read_back: Hotel = read(&ctx(&state), "5").unwrap();
        assert_eq!(read_back, first);
    }

    #[test]
    fn read_of_absent_id_is_not_found() {
        let state = MemoryState::new();
        let err = read::<Hotel>(&ctx(&state), "missing").unwrap_err();
        assert_eq!(err.to_string(), "the hotel missing does not exist");
    }

    #[test]
    fn read_of_malformed_bytes_is_a_codec_error_not_not_found() {
        let state = MemoryState::new();
        state.put_state("bad", b"{not json").unwrap();
        let err = read::<Hotel>(&ctx(&state), "bad").unwrap_err();
        assert!(matches!(err, ContractError::Codec(CodecError::Decode(_))));
    }

    #[test]
    fn exists_is_a_presence_check_without_decode() {
        let state = MemoryState::new();
        state.put_state("bad", b"{not json").unwrap();
        // The bytes are undecodable, yet existence holds.
        assert!(exists::<Hotel>(&ctx(&state), "bad").unwrap());
        assert!(!exists::<Hotel>(&ctx(&state), "good").unwrap());
    }

    #[test]
    fn exists_flips_across_the_lifecycle() {
        let state = MemoryState::new();
        assert!(!exists::<Hotel>(&ctx(&state), "5").unwrap());

        create(&ctx(&state), &sample("5")).unwrap();
        assert!(exists::<Hotel>(&ctx(&state), "5").unwrap());

        // Unrelated operations leave it true.
        create(&ctx(&state), &sample("6")).unwrap();
        delete::<Hotel>(&ctx(&state), "6").unwrap();
        assert!(exists::<Hotel>(&ctx(&state), "5").unwrap());

        delete::<Hotel>(&ctx(&state), "5").unwrap();
        assert!(!exists::<Hotel>(&ctx(&state), "5").unwrap());
    }

    #[test]
    fn update_replaces_wholesale() {
        let state = MemoryState::new();
        create(&ctx(&state), &sample("5")).unwrap();

        let replacement = Hotel::new("5", "Renamed", false, 2.5);
        update(&ctx(&state), &replacement).unwrap();
        let read_back: Hotel = read(&ctx(&state), "5").unwrap();
        assert_eq!(read_back, replacement);
    }

    #[test]
    fn update_and_delete_of_absent_id_leave_state_unchanged() {
        let state = MemoryState::new();
        create(&ctx(&state), &sample("present")).unwrap();
        let before: Vec<u8> = state.get_state("present").unwrap().unwrap();

        let err = update(&ctx(&state), &sample("missing")).unwrap_err();
        assert_eq!(err.to_string(), "the hotel missing does not exist");
        let err = delete::<Hotel>(&ctx(&state), "missing").unwrap_err();
        assert_eq!(err.to_string(), "the hotel missing does not exist");

        assert_eq!(state.len(), 1);
        assert_eq!(state.get_state("present").unwrap().unwrap(), before);
    }

    #[test]
    fn delete_on_empty_state_is_not_found() {
        let state = MemoryState::new();
        let err = delete::<Hotel>(&ctx(&state), "missing").unwrap_err();
        assert_eq!(
            err,
            ContractError::NotFound {
                entity: "hotel",
                id: "missing".into()
            }
        );
    }

    #[test]
    fn list_all_returns_everything_in_ascending_key_order() {
        let state = MemoryState::new();
        // Inserted out of order on purpose.
        for id in ["b", "a", "c"] {
            create(&ctx(&state), &sample(id)).unwrap();
        }

        let hotels: Vec<Hotel> = list_all(&ctx(&state)).unwrap();
        let ids: Vec<&str> = hotels.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn list_all_aborts_on_first_undecodable_value_and_releases_the_scan() {
        let state = MemoryState::new();
        create(&ctx(&state), &sample("a")).unwrap();
        state.put_state("b", b"garbage").unwrap();
        create(&ctx(&state), &sample("c")).unwrap();

        let err = list_all::<Hotel>(&ctx(&state)).unwrap_err();
        assert!(matches!(err, ContractError::Codec(CodecError::Decode(_))));
        // No partial list escaped, and the error exit path released the scan.
        assert_eq!(state.open_scans(), 0);
    }

    #[test]
    fn list_all_releases_the_scan_on_normal_completion() {
        let state = MemoryState::new();
        create(&ctx(&state), &sample("a")).unwrap();
        let _hotels: Vec<Hotel> = list_all(&ctx(&state)).unwrap();
        assert_eq!(state.open_scans(), 0);
    }

    #[test]
    fn init_ledger_overwrites_without_an_existence_check() {
        let state = MemoryState::new();
        create(&ctx(&state), &Hotel::new("hotel1", "Squatter", false, 0.0)).unwrap();

        let seeds = [
            Hotel::new("hotel1", "Venice", true, 5.0),
            Hotel::new("hotel2", "Milan", true, 4.5),
        ];
        init_ledger(&ctx(&state), &seeds).unwrap();

        let read_back: Hotel = read(&ctx(&state), "hotel1").unwrap();
        assert_eq!(read_back, seeds[0]);
        assert_eq!(state.len(), 2);
    }

    // World-state double whose reads fail, for storage-error propagation.
    struct FailingState;

    impl WorldState for FailingState {
        fn get_state(&self, _key: &str) -> StateResult<Option<Vec<u8>>> {
            Err(StateError::Backend("connection reset".into()))
        }

        fn put_state(&self, _key: &str, _value: &[u8]) -> StateResult<()> {
            Err(StateError::Backend("connection reset".into()))
        }

        fn delete_state(&self, _key: &str) -> StateResult<()> {
            Err(StateError::Backend("connection reset".into()))
        }

        fn get_state_by_range(&self, _start: &str, _end: &str) -> StateResult<RangeScan> {
            Ok(RangeScan::unmanaged(vec![Err(StateError::Backend(
                "connection reset".into(),
            ))]))
        }
    }

    #[test]
    fn storage_failures_propagate_untouched() {
        let state = FailingState;
        let ctx = TransactionContext::new(&state);

        let err = create(&ctx, &sample("5")).unwrap_err();
        assert!(matches!(err, ContractError::Storage(_)));
        let err = read::<Hotel>(&ctx, "5").unwrap_err();
        assert!(matches!(err, ContractError::Storage(_)));
        let err = list_all::<Hotel>(&ctx).unwrap_err();
        assert!(matches!(err, ContractError::Storage(_)));
    }

    #[test]
    fn scan_item_failures_abort_enumeration() {
        // A scan that yields one good item then a backend failure.
        struct FlakyScanState;

        impl WorldState for FlakyScanState {
            fn get_state(&self, _key: &str) -> StateResult<Option<Vec<u8>>> {
                Ok(None)
            }

            fn put_state(&self, _key: &str, _value: &[u8]) -> StateResult<()> {
                Ok(())
            }

            fn delete_state(&self, _key: &str) -> StateResult<()> {
                Ok(())
            }

            fn get_state_by_range(&self, _start: &str, _end: &str) -> StateResult<RangeScan> {
                let good = sample("a").to_state_bytes().unwrap();
                Ok(RangeScan::unmanaged(vec![
                    Ok(KeyValue {
                        key: "a".into(),
                        value: good,
                    }),
                    Err(StateError::Backend("iterator torn down".into())),
                ]))
            }
        }

        let state = FlakyScanState;
        let err = list_all::<Hotel>(&TransactionContext::new(&state)).unwrap_err();
        assert!(matches!(err, ContractError::Storage(_)));
    }
}
