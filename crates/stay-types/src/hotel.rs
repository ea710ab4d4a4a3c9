//! The flat hotel-quality record.

use serde::{Deserialize, Serialize};

use crate::codec::StateEntity;

/// Rating record for a single hotel.
///
/// `id` is the world-state key and is immutable once created. No bound is
/// enforced on `rating` — any value the argument parser accepts is stored
/// as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    pub rating: f32,
}

impl Hotel {
    pub fn new(id: impl Into<String>, name: impl Into<String>, is_active: bool, rating: f32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_active,
            rating,
        }
    }
}

impl StateEntity for Hotel {
    const TYPE_NAME: &'static str = "hotel";

    fn key(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn encoding_uses_fixed_field_names() {
        let hotel = Hotel::new("5", "Legend Saigon", true, 8.1);
        let bytes = hotel.to_state_bytes().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["id"], "5");
        assert_eq!(value["name"], "Legend Saigon");
        assert_eq!(value["isActive"], true);
        assert_eq!(value["rating"].as_f64().unwrap() as f32, 8.1);
    }

    #[test]
    fn decodes_records_written_by_other_implementations() {
        let bytes = br#"{"id":"hotel2","name":"Milan","isActive":true,"rating":4.5}"#;
        let hotel = Hotel::from_state_bytes(bytes).unwrap();
        assert_eq!(hotel, Hotel::new("hotel2", "Milan", true, 4.5));
    }

    proptest! {
        // No bound exists on rating: zero, negative, and
        // out-of-conventional-range values must all survive the round trip.
        #[test]
        fn roundtrip(id in ".*", name in ".*", is_active: bool, rating in proptest::num::f32::NORMAL | proptest::num::f32::ZERO) {
            let hotel = Hotel::new(id, name, is_active, rating);
            let bytes = hotel.to_state_bytes().unwrap();
            let decoded = Hotel::from_state_bytes(&bytes).unwrap();
            prop_assert_eq!(hotel, decoded);
        }
    }
}
