//! The nested service-level-agreement contract surface.
//!
//! Structurally parallel to [`crate::hotel::HotelContract`] — same seven
//! operations, same semantics, richer entity. Service levels and
//! agreements enter the world state only as embedded structure inside
//! their hotel's encoded value; the invocation surface never addresses
//! them independently.

use stay_types::sla::{Agreement, Hotel, ServiceLevel};

use crate::context::TransactionContext;
use crate::error::ContractResult;
use crate::ops;

/// Contract managing nested SLA [`Hotel`] records.
#[derive(Clone, Copy, Debug, Default)]
pub struct SlaContract;

impl SlaContract {
    pub fn new() -> Self {
        Self
    }

    /// The fixed seed record written by `InitLedger`: one hotel with a
    /// "Standard" service level carrying two agreements.
    ///
    /// The seed agreements' back-references are empty and their
    /// compensation counters zero; back-references are informational only
    /// and nothing fills them in.
    pub fn seed_hotels() -> Vec<Hotel> {
        vec![Hotel {
            id: "1".into(),
            name: "Rex Hotel".into(),
            is_active: true,
            rating: 8.4,
            service_levels: vec![ServiceLevel {
                id: "1".into(),
                name: "Standard".into(),
                is_used: true,
                satisfaction_rate: 0.84,
                rule_abiding_rate: 0.0,
                hotel_id: "1".into(),
                agreements: vec![
                    Agreement {
                        id: "1".into(),
                        is_applied: true,
                        total_feedbacks: 100,
                        total_unfulfilled_commitments: 16,
                        is_applied_penalty: false,
                        total_compensations: 0,
                        total_no_compensations: 0,
                        service_level_id: String::new(),
                        hotel_id: String::new(),
                    },
                    Agreement {
                        id: "2".into(),
                        is_applied: true,
                        total_feedbacks: 1000,
                        total_unfulfilled_commitments: 100,
                        is_applied_penalty: false,
                        total_compensations: 0,
                        total_no_compensations: 0,
                        service_level_id: String::new(),
                        hotel_id: String::new(),
                    },
                ],
            }],
        }]
    }

    /// Write the base record set, overwriting any existing records.
    pub fn init_ledger(&self, ctx: &TransactionContext<'_>) -> ContractResult<()> {
        ops::init_ledger(ctx, &Self::seed_hotels())
    }

    /// Issue a new hotel with the given details and no service levels.
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

    /// Issue a new hotel from a fully built record, service levels and all.
    pub fn create_hotel_record(
        &self,
        ctx: &TransactionContext<'_>,
        hotel: &Hotel,
    ) -> ContractResult<()> {
        ops::create(ctx, hotel)
    }

    /// Return the hotel stored under `id`, full nested structure included.
    pub fn read_hotel(&self, ctx: &TransactionContext<'_>, id: &str) -> ContractResult<Hotel> {
        ops::read(ctx, id)
    }

    /// Replace the hotel stored under `id` wholesale.
    ///
    /// The replacement is built from the given scalar fields only — any
    /// previously embedded service levels are dropped, not merged.
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
