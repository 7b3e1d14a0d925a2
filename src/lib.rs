//! Two-case result primitive with synchronous and asynchronous composition.
//!
//! [`Outcome<E, T>`] holds exactly one of an error or a success value, fixed
//! at construction. Its combinators chain dependent fallible steps - sync or
//! async - in strict declaration order, short-circuiting on the first error:
//! once a chain holds an `Err`, no later step's callback runs.
//!
//! The [`pipeline`] module composes the combinators into a generic command
//! handler (validate → authorize → load → decide → persist), and [`booking`]
//! is a worked event-sourced consumer of that pipeline.

pub mod booking;
pub mod outcome;
pub mod pipeline;

// Re-export the primitive at the crate root
pub use outcome::{Outcome, OutcomeFutureExt};
pub use pipeline::{handle_command, Receipt};
