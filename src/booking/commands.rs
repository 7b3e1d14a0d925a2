use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::{GuestName, RoomNumber, StayLength};

// ============================================================================
// Booking Commands
// ============================================================================

/// Raw command as received from the caller, before validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceBooking {
    pub booking_id: Uuid,
    pub guest: String,
    pub room: u32,
    pub nights: u32,
}

/// Command after validation: fields carry their value-object invariants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedBooking {
    pub booking_id: Uuid,
    pub guest: GuestName,
    pub room: RoomNumber,
    pub nights: StayLength,
}
