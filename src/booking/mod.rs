// ============================================================================
// Booking Domain - Worked Consumer of the Outcome Pipeline
// ============================================================================
//
// This module contains ALL booking-specific code:
// - Value objects (GuestName, RoomNumber, StayLength, User, Authorized)
// - Events (BookingPlaced, plus the stored-event envelope)
// - Commands (PlaceBooking, ValidatedBooking)
// - Errors (Problem enum)
// - Aggregate (Booking with the placement decision)
// - Store (BookingStore trait + in-memory implementation)
// - Command Handler (BookingService wiring the pipeline)
//
// The outcome primitive knows nothing about any of this; every function here
// is one of the black-box callbacks the pipeline composes.
//
// ============================================================================

pub mod value_objects;
pub mod events;
pub mod commands;
pub mod errors;
pub mod aggregate;
pub mod store;
pub mod command_handler;

// Re-export for convenience
pub use value_objects::*;
pub use events::*;
pub use commands::*;
pub use errors::*;
pub use aggregate::*;
pub use store::*;
pub use command_handler::*;
