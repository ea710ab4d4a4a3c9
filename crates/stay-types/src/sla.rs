//! The nested service-level-agreement record family.
//!
//! A [`Hotel`] owns an ordered sequence of [`ServiceLevel`]s, each of which
//! owns an ordered sequence of [`Agreement`]s. Only the hotel is addressable
//! in the world state; the nested records exist solely inside its encoded
//! value. The `hotel_id` / `service_level_id` fields are plain back-reference
//! identifiers, never traversed to reconstruct ownership.

use serde::{Deserialize, Serialize};

use crate::codec::StateEntity;

/// Hotel record carrying its embedded service levels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    pub rating: f32,
    pub service_levels: Vec<ServiceLevel>,
}

/// A service tier offered by a hotel.
///
/// The satisfaction and rule-abiding rates are fractional but unbounded:
/// no range check exists anywhere in the system.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLevel {
    pub id: String,
    pub name: String,
    pub is_used: bool,
    pub satisfaction_rate: f32,
    pub rule_abiding_rate: f32,
    pub hotel_id: String,
    pub agreements: Vec<Agreement>,
}

/// An SLA agreement tracked under a service level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agreement {
    pub id: String,
    pub is_applied: bool,
    pub total_feedbacks: u64,
    pub total_unfulfilled_commitments: u64,
    pub is_applied_penalty: bool,
    pub total_compensations: u64,
    pub total_no_compensations: u64,
    pub service_level_id: String,
    pub hotel_id: String,
}

impl Hotel {
    /// A hotel with no service levels yet.
    pub fn new(id: impl Into<String>, name: impl Into<String>, is_active: bool, rating: f32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_active,
            rating,
            service_levels: Vec::new(),
        }
    }
}

impl StateEntity for Hotel {
    const TYPE_NAME: &'static str = "hotel";

    fn key(&self) -> &str {
        &self.id
    }
}
