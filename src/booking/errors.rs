// ============================================================================
// Booking Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Problem {
    #[error("Guest name cannot be empty")]
    EmptyGuestName,

    #[error("Stay must be at least one night, got {0}")]
    InvalidStayLength(u32),

    #[error("User {0} may not place bookings")]
    NotAuthorized(String),

    #[error("Event store rejected the operation: {0}")]
    Store(String),
}
