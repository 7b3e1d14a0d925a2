use uuid::Uuid;

use super::commands::ValidatedBooking;
use super::events::{BookingEvent, BookingPlaced};
use super::value_objects::Authorized;

// ============================================================================
// Booking Aggregate - Domain Decision
// ============================================================================
//
// State is derived from events; the decision emits the events that record
// what was decided. The pipeline persists `pending` afterwards.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub booking_id: Uuid,

    /// Sequence number of the last event already in the store
    pub version: i64,

    /// Events this decision produced, not yet persisted
    pub pending: Vec<BookingEvent>,
}

impl Booking {
    /// Decide what the command changes, given the loaded event history.
    ///
    /// Placing a booking that history shows as already placed is a no-op:
    /// the decision emits nothing rather than failing, so a replayed command
    /// persists an empty event list.
    pub fn decide(
        history: Vec<BookingEvent>,
        validated: ValidatedBooking,
        authorized: Authorized,
    ) -> Self {
        let booking_id = validated.booking_id;
        let version = history.len() as i64;

        let already_placed = history
            .iter()
            .any(|event| matches!(event, BookingEvent::Placed(_)));

        let pending = if already_placed {
            Vec::new()
        } else {
            vec![BookingEvent::Placed(BookingPlaced {
                guest: validated.guest,
                room: validated.room,
                nights: validated.nights,
                placed_by: authorized.actor,
            })]
        };

        Self {
            booking_id,
            version,
            pending,
        }
    }
}
