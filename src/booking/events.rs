use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::Problem;
use super::value_objects::{GuestName, RoomNumber, StayLength};

// ============================================================================
// Booking Events
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingEvent {
    Placed(BookingPlaced),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingPlaced {
    pub guest: GuestName,
    pub room: RoomNumber,
    pub nights: StayLength,
    pub placed_by: String,
}

impl BookingEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Placed(_) => "BookingPlaced",
        }
    }
}

// ============================================================================
// Stored Event Envelope
// ============================================================================

/// Wraps a serialized domain event with the metadata the store keeps per row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredEvent {
    pub event_id: Uuid,
    pub booking_id: Uuid,
    pub event_type: String,
    pub recorded_at: DateTime<Utc>,
    pub payload: String,
}

impl StoredEvent {
    pub fn new(booking_id: Uuid, event_type: &str, payload: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            booking_id,
            event_type: event_type.to_string(),
            recorded_at: Utc::now(),
            payload,
        }
    }
}

// ============================================================================
// Event Serialization Helpers
// ============================================================================

pub fn serialize_event(event: &BookingEvent) -> Result<String, Problem> {
    serde_json::to_string(event).map_err(|e| Problem::Store(e.to_string()))
}

pub fn deserialize_event(json: &str) -> Result<BookingEvent, Problem> {
    serde_json::from_str(json).map_err(|e| Problem::Store(e.to_string()))
}
