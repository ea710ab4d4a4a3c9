//! The invocation boundary: operation name + string arguments in,
//! canonical bytes or a failure message out.
//!
//! The operation identifiers routed here are public and stable — existing
//! callers depend on them verbatim. Results cross the boundary as the
//! codec's canonical encoding (`true`/`false` for existence checks, a JSON
//! array for enumeration, empty bytes for ok-only operations); errors
//! cross as their rendered message.

use stay_types::{CodecError, StateEntity};

use crate::args::{parse_bool, parse_f32};
use crate::context::TransactionContext;
use crate::error::{ContractError, ContractResult};
use crate::hotel::HotelContract;
use crate::sla::SlaContract;

/// Raw bytes returned across the invocation boundary.
pub type Payload = Vec<u8>;

fn expect_arity(operation: &str, args: &[&str], expected: usize) -> ContractResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(ContractError::Validation(format!(
            "{operation} expects {expected} argument(s), got {}",
            args.len()
        )))
    }
}

fn unknown_operation(operation: &str) -> ContractError {
    ContractError::Validation(format!("unknown operation {operation:?}"))
}

fn encode_entity<E: StateEntity>(entity: &E) -> ContractResult<Payload> {
    Ok(entity.to_state_bytes()?)
}

fn encode_list<E: StateEntity>(entities: &[E]) -> ContractResult<Payload> {
    serde_json::to_vec(entities).map_err(|e| CodecError::Encode(e.to_string()).into())
}

fn encode_bool(value: bool) -> Payload {
    if value {
        b"true".to_vec()
    } else {
        b"false".to_vec()
    }
}

impl HotelContract {
    /// Route one named invocation with text arguments to its typed
    /// operation.
    pub fn invoke(
        &self,
        ctx: &TransactionContext<'_>,
        operation: &str,
        args: &[&str],
    ) -> ContractResult<Payload> {
        match operation {
            "InitLedger" => {
                expect_arity(operation, args, 0)?;
                self.init_ledger(ctx)?;
                Ok(Payload::new())
            }
            "CreateHotel" => {
                expect_arity(operation, args, 4)?;
                let is_active = parse_bool("isActive", args[2])?;
                let rating = parse_f32("rating", args[3])?;
                self.create_hotel(ctx, args[0], args[1], is_active, rating)?;
                Ok(Payload::new())
            }
            "ReadHotel" => {
                expect_arity(operation, args, 1)?;
                encode_entity(&self.read_hotel(ctx, args[0])?)
            }
            "UpdateHotel" => {
                expect_arity(operation, args, 4)?;
                let is_active = parse_bool("isActive", args[2])?;
                let rating = parse_f32("rating", args[3])?;
                self.update_hotel(ctx, args[0], args[1], is_active, rating)?;
                Ok(Payload::new())
            }
            "DeleteHotel" => {
                expect_arity(operation, args, 1)?;
                self.delete_hotel(ctx, args[0])?;
                Ok(Payload::new())
            }
            "HotelExists" => {
                expect_arity(operation, args, 1)?;
                Ok(encode_bool(self.hotel_exists(ctx, args[0])?))
            }
            "GetAllHotels" => {
                expect_arity(operation, args, 0)?;
                encode_list(&self.get_all_hotels(ctx)?)
            }
            _ => Err(unknown_operation(operation)),
        }
    }
}

impl SlaContract {
    /// Route one named invocation with text arguments to its typed
    /// operation. Same identifiers as the flat variant; the payloads carry
    /// the richer entity.
    pub fn invoke(
        &self,
        ctx: &TransactionContext<'_>,
        operation: &str,
        args: &[&str],
    ) -> ContractResult<Payload> {
        match operation {
            "InitLedger" => {
                expect_arity(operation, args, 0)?;
                self.init_ledger(ctx)?;
                Ok(Payload::new())
            }
            "CreateHotel" => {
                expect_arity(operation, args, 4)?;
                let is_active = parse_bool("isActive", args[2])?;
                let rating = parse_f32("rating", args[3])?;
                self.create_hotel(ctx, args[0], args[1], is_active, rating)?;
                Ok(Payload::new())
            }
            "ReadHotel" => {
                expect_arity(operation, args, 1)?;
                encode_entity(&self.read_hotel(ctx, args[0])?)
            }
            "UpdateHotel" => {
                expect_arity(operation, args, 4)?;
                let is_active = parse_bool("isActive", args[2])?;
                let rating = parse_f32("rating", args[3])?;
                self.update_hotel(ctx, args[0], args[1], is_active, rating)?;
                Ok(Payload::new())
            }
            "DeleteHotel" => {
                expect_arity(operation, args, 1)?;
                self.delete_hotel(ctx, args[0])?;
                Ok(Payload::new())
            }
            "HotelExists" => {
                expect_arity(operation, args, 1)?;
                Ok(encode_bool(self.hotel_exists(ctx, args[0])?))
            }
            "GetAllHotels" => {
                expect_arity(operation, args, 0)?;
                encode_list(&self.get_all_hotels(ctx)?)
            }
            _ => Err(unknown_operation(operation)),
        }
    }
}
