//! The flat hotel-quality contract surface.

use stay_types::hotel::Hotel;

use crate::context::TransactionContext;
use crate::error::ContractResult;
use crate::ops;

/// Contract managing flat [`Hotel`] records.
///
/// Stateless: every operation reaches the world state through the context
/// it is handed. The public operation names (`InitLedger`, `CreateHotel`,
/// ...) are routed in [`crate::invoke`].
#[derive(Clone, Copy, Debug, Default)]
pub struct HotelContract;

impl HotelContract {
    pub fn new() -> Self {
        Self
    }

    /// The fixed seed records written by `InitLedger`.
    pub fn seed_hotels() -> Vec<Hotel> {
        vec![
            Hotel::new("hotel1", "Venice", true, 5.0),
            Hotel::new("hotel2", "Milan", true, 4.5),
            Hotel::new("hotel3", "Roma", true, 4.2),
        ]
    }

    /// Write the base set of hotels, overwriting any existing records.
    pub fn init_ledger(&self, ctx: &TransactionContext<'_>) -> ContractResult<()> {
        ops::init_ledger(ctx, &Self::seed_hotels())
    }

    /// Issue a new hotel with the given details.
    pub fn create_hotel(
        &self,
        ctx: &TransactionContext<'_>,
        id: &str,
        name: &str,
        is_active: bool,
        rating: f32,
    ) -> ContractResult<()> {
        ops::create(ctx, &Hotel::new(id, name, is_active, rating))
    }

    /// Return the hotel stored under `id`.
    pub fn read_hotel(&self, ctx: &TransactionContext<'_>, id: &str) -> ContractResult<Hotel> {
        ops::read(ctx, id)
    }

    /// Replace the hotel stored under `id` with a record built from the
    /// given fields.
    pub fn update_hotel(
        &self,
        ctx: &TransactionContext<'_>,
        id: &str,
        name: &str,
        is_active: bool,
        rating: f32,
    ) -> ContractResult<()> {
        ops::update(ctx, &Hotel::new(id, name, is_active, rating))
    }

    /// Remove the hotel stored under `id`.
    pub fn delete_hotel(&self, ctx: &TransactionContext<'_>, id: &str) -> ContractResult<()> {
        ops::delete::<Hotel>(ctx, id)
    }

    /// Returns `true` when a hotel with the given id exists.
    pub fn hotel_exists(&self, ctx: &TransactionContext<'_>, id: &str) -> ContractResult<bool> {
        ops::exists::<Hotel>(ctx, id)
    }

    /// All hotels in the world state, in ascending key order.
    pub fn get_all_hotels(&self, ctx: &TransactionContext<'_>) -> ContractResult<Vec<Hotel>> {
        ops::list_all(ctx)
    }
}
