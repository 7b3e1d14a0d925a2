use serde::{Deserialize, Serialize};

pub mod future;

pub use future::OutcomeFutureExt;

// ============================================================================
// Outcome - Two-Case Result Primitive
// ============================================================================
//
// Exactly one of two cases, fixed at construction:
// - `Ok(value)`  - the step succeeded
// - `Err(error)` - the step failed
//
// Key Principles:
// 1. Immutable: combinators never mutate, they produce a new value
// 2. Short-circuit: once a chain holds an error, no later callback runs
// 3. First error wins and is final (no accumulation, no partial execution)
// 4. `fold` is the only way to look inside - both cases must be handled
//
// This is the GENERIC primitive; domain code picks the error type (see the
// booking module for a worked consumer).
//
// ============================================================================

/// Two-case result value: either `Err(error)` or `Ok(value)`.
///
/// Type Parameters:
/// - `E`: the error case, chosen by the caller (e.g. a domain `Problem`)
/// - `T`: the success case
///
/// There is no unwrap-style accessor: callers go through [`Outcome::fold`]
/// and handle both cases. Callbacks that panic are not caught or translated;
/// that is the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome<E, T> {
    Err(E),
    Ok(T),
}

impl<E, T> Outcome<E, T> {
    /// Transform the success value, passing an error through untouched.
    ///
    /// `f` runs exactly once in the `Ok` case and never in the `Err` case.
    pub fn map<U, F>(self, f: F) -> Outcome<E, U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Monadic bind: chain a dependent fallible step.
    ///
    /// In the `Ok` case, returns whatever `f` produces (including its own
    /// error). In the `Err` case, returns the error without invoking `f`.
    /// This is the short-circuit primitive: once any step in a chain fails,
    /// no subsequent step function runs.
    pub fn and_then<U, F>(self, f: F) -> Outcome<E, U>
    where
        F: FnOnce(T) -> Outcome<E, U>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Consume the outcome by dispatching to exactly one of two handlers.
    ///
    /// The handler matching the active case runs once; the other never runs.
    /// Both must reconcile to the same type.
    pub fn fold<R, FE, FT>(self, on_err: FE, on_ok: FT) -> R
    where
        FE: FnOnce(E) -> R,
        FT: FnOnce(T) -> R,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(error) => on_err(error),
        }
    }

    /// Chain a dependent fallible step and merge both success values.
    ///
    /// Equivalent to binding `second` onto `self` and mapping its result
    /// through `project(first_value, second_value)`. Guarantees:
    /// - `second` runs at most once, and only if `self` is `Ok`
    /// - `project` runs at most once, and only if both steps succeeded
    /// - the first error encountered, left to right, is the result
    ///
    /// The first value is handed to both `second` and `project`, hence the
    /// `Clone` bound. See [`Outcome::zip_with_async`] for steps that suspend.
    pub fn zip_with<U, V, S, P>(self, second: S, project: P) -> Outcome<E, V>
    where
        T: Clone,
        S: FnOnce(T) -> Outcome<E, U>,
        P: FnOnce(T, U) -> V,
    {
        self.and_then(|first| second(first.clone()).map(|b| project(first, b)))
    }
}

impl<E, T> From<Result<T, E>> for Outcome<E, T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<E, T> From<Outcome<E, T>> for Result<T, E> {
    fn from(outcome: Outcome<E, T>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
