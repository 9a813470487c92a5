//! Domain event payload

use crate::core::field::FieldValue;
use serde::{Deserialize, Serialize};

/// Action performed on the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventAction {
    Create,
    Update,
    Delete,
}

/// Outcome of the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventResult {
    Success,
    Compensate,
}

/// Payload describing a domain event: the entity acted upon, its
/// reference id, the action and its outcome, plus free-form event data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventPayload {
    /// Entity being acted upon, e.g. "order", "product".
    pub entity: String,

    /// Unique identifier of the entity, e.g. "ODR_1234567890".
    pub reference_id: String,

    pub action: EventAction,

    pub result: EventResult,

    /// Structured event data, serialized in place.
    pub data: FieldValue,
}

impl EventPayload {
    pub fn new(
        entity: impl Into<String>,
        reference_id: impl Into<String>,
        action: EventAction,
        result: EventResult,
        data: impl Into<FieldValue>,
    ) -> Self {
        Self {
            entity: entity.into(),
            reference_id: reference_id.into(),
            action,
            result,
            data: data.into(),
        }
    }
}
