use std::sync::Arc;

use crate::outcome::Outcome;
use crate::pipeline::{handle_command, Receipt};

use super::aggregate::Booking;
use super::commands::{PlaceBooking, ValidatedBooking};
use super::errors::Problem;
use super::events::BookingEvent;
use super::store::BookingStore;
use super::value_objects::{Authorized, GuestName, RoomNumber, StayLength, User};

// ============================================================================
// Booking Command Handler
// ============================================================================
//
// Wires the five pipeline callbacks:
// Command → validate → authorize → load history → decide → persist
//
// ============================================================================

/// Check the raw command's business invariants.
pub fn validate(command: PlaceBooking) -> Outcome<Problem, ValidatedBooking> {
    if command.guest.trim().is_empty() {
        return Outcome::Err(Problem::EmptyGuestName);
    }
    if command.nights == 0 {
        return Outcome::Err(Problem::InvalidStayLength(command.nights));
    }

    Outcome::Ok(ValidatedBooking {
        booking_id: command.booking_id,
        guest: GuestName::new(command.guest),
        room: RoomNumber(command.room),
        nights: StayLength(command.nights),
    })
}

/// Turn a caller identity into an authorization grant, or refuse.
pub fn authorize(user: User) -> Outcome<Problem, Authorized> {
    if user.can_place_bookings {
        Outcome::Ok(Authorized { actor: user.name })
    } else {
        Outcome::Err(Problem::NotAuthorized(user.name))
    }
}

pub struct BookingService<S> {
    store: Arc<S>,
}

impl<S: BookingStore> BookingService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Handle a `PlaceBooking` command end to end.
    ///
    /// The first stage to fail decides the result; later stages never run.
    pub async fn place(
        &self,
        command: PlaceBooking,
        user: User,
    ) -> Outcome<Problem, Receipt<BookingEvent>> {
        let load_store = self.store.clone();
        let persist_store = self.store.clone();

        handle_command(
            command,
            user,
            validate,
            authorize,
            move |validated: ValidatedBooking| async move {
                load_store.load(validated.booking_id).await
            },
            Booking::decide,
            move |booking: Booking| async move {
                persist_store.append(booking.booking_id, booking.pending).await
            },
        )
        .await
    }
}

// ============================================================================
// Tests - End-to-End Pipeline Scenarios
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::store::InMemoryBookingStore;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};
    use uuid::Uuid;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }

    fn place_booking() -> PlaceBooking {
        PlaceBooking {
            booking_id: Uuid::new_v4(),
            guest: "Ada".to_string(),
            room: 12,
            nights: 3,
        }
    }

    fn front_desk() -> User {
        User {
            name: "front-desk".to_string(),
            can_place_bookings: true,
        }
    }

    /// Store wrapper that counts trait calls, to prove stages were skipped.
    struct CountingStore<S> {
        inner: S,
        loads: AtomicU32,
        appends: AtomicU32,
    }

    impl<S> CountingStore<S> {
        fn new(inner: S) -> Self {
            Self {
                inner,
                loads: AtomicU32::new(0),
                appends: AtomicU32::new(0),
            }
        }
    }

    #[async_trait]
    impl<S: BookingStore> BookingStore for CountingStore<S> {
        async fn load(&self, booking_id: Uuid) -> Outcome<Problem, Vec<BookingEvent>> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            self.inner.load(booking_id).await
        }

        async fn append(
            &self,
            booking_id: Uuid,
            events: Vec<BookingEvent>,
        ) -> Outcome<Problem, Vec<BookingEvent>> {
            self.appends.fetch_add(1, Ordering::SeqCst);
            self.inner.append(booking_id, events).await
        }
    }

    /// Store that refuses the configured operations.
    struct FailingStore {
        fail_load: bool,
        fail_append: bool,
    }

    #[async_trait]
    impl BookingStore for FailingStore {
        async fn load(&self, _booking_id: Uuid) -> Outcome<Problem, Vec<BookingEvent>> {
            if self.fail_load {
                Outcome::Err(Problem::Store("history unavailable".to_string()))
            } else {
                Outcome::Ok(Vec::new())
            }
        }

        async fn append(
            &self,
            _booking_id: Uuid,
            events: Vec<BookingEvent>,
        ) -> Outcome<Problem, Vec<BookingEvent>> {
            if self.fail_append {
                Outcome::Err(Problem::Store("write conflict".to_string()))
            } else {
                Outcome::Ok(events)
            }
        }
    }

    #[tokio::test]
    async fn placing_a_booking_succeeds_and_persists_one_event() {
        init_tracing();
        let store = Arc::new(InMemoryBookingStore::new());
        let service = BookingService::new(store.clone());
        let command = place_booking();
        let booking_id = command.booking_id;

        let result = service.place(command, front_desk()).await;

        let receipt = result.fold(
            |problem| panic!("expected success, got {problem}"),
            |receipt| receipt,
        );
        assert_eq!(receipt.emitted.len(), 1);
        assert!(matches!(receipt.emitted[0], BookingEvent::Placed(_)));

        // The event landed in the store.
        assert_eq!(store.load(booking_id).await, Outcome::Ok(receipt.emitted));
    }

    #[tokio::test]
    async fn replaying_a_placed_booking_emits_an_empty_list() {
        let store = Arc::new(InMemoryBookingStore::new());
        let service = BookingService::new(store);
        let command = place_booking();

        service.place(command.clone(), front_desk()).await;
        let replay = service.place(command, front_desk()).await;

        assert_eq!(replay, Outcome::Ok(Receipt { emitted: Vec::new() }));
    }

    #[tokio::test]
    async fn validation_failure_never_touches_the_store() {
        let store = Arc::new(CountingStore::new(InMemoryBookingStore::new()));
        let service = BookingService::new(store.clone());

        let mut command = place_booking();
        command.guest = "  ".to_string();

        let result = service.place(command, front_desk()).await;

        assert_eq!(result, Outcome::Err(Problem::EmptyGuestName));
        assert_eq!(store.loads.load(Ordering::SeqCst), 0);
        assert_eq!(store.appends.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn zero_night_stay_is_rejected_at_validation() {
        let store = Arc::new(InMemoryBookingStore::new());
        let service = BookingService::new(store);

        let mut command = place_booking();
        command.nights = 0;

        let result = service.place(command, front_desk()).await;
        assert_eq!(result, Outcome::Err(Problem::InvalidStayLength(0)));
    }

    #[tokio::test]
    async fn authorization_failure_never_touches_the_store() {
        let store = Arc::new(CountingStore::new(InMemoryBookingStore::new()));
        let service = BookingService::new(store.clone());

        let intruder = User {
            name: "walk-in".to_string(),
            can_place_bookings: false,
        };

        let result = service.place(place_booking(), intruder).await;

        assert_eq!(
            result,
            Outcome::Err(Problem::NotAuthorized("walk-in".to_string()))
        );
        assert_eq!(store.loads.load(Ordering::SeqCst), 0);
        assert_eq!(store.appends.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn load_failure_is_the_result_and_nothing_is_appended() {
        let store = Arc::new(CountingStore::new(FailingStore {
            fail_load: true,
            fail_append: false,
        }));
        let service = BookingService::new(store.clone());

        let result = service.place(place_booking(), front_desk()).await;

        assert_eq!(
            result,
            Outcome::Err(Problem::Store("history unavailable".to_string()))
        );
        assert_eq!(store.loads.load(Ordering::SeqCst), 1);
        assert_eq!(store.appends.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn persist_failure_is_the_result() {
        let store = Arc::new(FailingStore {
            fail_load: false,
            fail_append: true,
        });
        let service = BookingService::new(store);

        let result = service.place(place_booking(), front_desk()).await;

        assert_eq!(
            result,
            Outcome::Err(Problem::Store("write conflict".to_string()))
        );
    }
}
