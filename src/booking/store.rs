use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::outcome::Outcome;

use super::errors::Problem;
use super::events::{deserialize_event, serialize_event, BookingEvent, StoredEvent};

// ============================================================================
// Booking Event Store
// ============================================================================
//
// Append-only store keyed by booking id. Payloads are kept serialized, the
// way a real event store row would hold them, so loading exercises the
// deserialize path. Fallibility surfaces as `Problem::Store`.
//
// ============================================================================

#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Load the full event history for one booking (empty if unknown).
    async fn load(&self, booking_id: Uuid) -> Outcome<Problem, Vec<BookingEvent>>;

    /// Append events for one booking, returning the events actually written.
    async fn append(
        &self,
        booking_id: Uuid,
        events: Vec<BookingEvent>,
    ) -> Outcome<Problem, Vec<BookingEvent>>;
}

#[derive(Default)]
pub struct InMemoryBookingStore {
    events: RwLock<HashMap<Uuid, Vec<StoredEvent>>>,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingStore for InMemoryBookingStore {
    async fn load(&self, booking_id: Uuid) -> Outcome<Problem, Vec<BookingEvent>> {
        let guard = self.events.read().await;
        let rows = guard.get(&booking_id).map(Vec::as_slice).unwrap_or(&[]);

        let mut history = Vec::with_capacity(rows.len());
        for row in rows {
            match deserialize_event(&row.payload) {
                Ok(event) => history.push(event),
                Err(problem) => return Outcome::Err(problem),
            }
        }

        tracing::debug!(%booking_id, events = history.len(), "loaded booking history");
        Outcome::Ok(history)
    }

    async fn append(
        &self,
        booking_id: Uuid,
        events: Vec<BookingEvent>,
    ) -> Outcome<Problem, Vec<BookingEvent>> {
        let mut rows = Vec::with_capacity(events.len());
        for event in &events {
            match serialize_event(event) {
                Ok(payload) => rows.push(StoredEvent::new(booking_id, event.event_type(), payload)),
                Err(problem) => return Outcome::Err(problem),
            }
        }

        let mut guard = self.events.write().await;
        guard.entry(booking_id).or_default().extend(rows);

        tracing::debug!(%booking_id, appended = events.len(), "appended booking events");
        Outcome::Ok(events)
    }
}
