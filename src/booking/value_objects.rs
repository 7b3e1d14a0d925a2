use serde::{Deserialize, Serialize};

// ============================================================================
// Booking Value Objects
// ============================================================================

/// Name of the guest a booking is placed for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestName(pub String);

impl GuestName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Room the booking reserves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomNumber(pub u32);

/// Length of the stay in nights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayLength(pub u32);

/// Caller identity as presented to the pipeline (pre-authorization)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub can_place_bookings: bool,
}

/// Proof that authorization succeeded for this command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authorized {
    pub actor: String,
}
