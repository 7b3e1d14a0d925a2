use std::future::{ready, Future, IntoFuture, Ready};

use super::Outcome;

// ============================================================================
// Asynchronous Combinators
// ============================================================================
//
// Same short-circuit contract as the synchronous combinators, for steps that
// suspend. One async-first implementation covers every {sync, async} pairing:
// a synchronous step lifts into an already-resolved future (`IntoFuture` /
// `future::ready`), so there is no combinatorial explosion of variants.
//
// Guarantees:
// 1. Steps run strictly in the order they are chained
// 2. On an existing error, no inner future is ever polled - the callback is
//    never invoked and the returned future resolves on its first poll
// 3. The core never schedules work itself; it only awaits whatever the
//    supplied step function returns
//
// ============================================================================

impl<E, T> Outcome<E, T> {
    /// Chain a dependent asynchronous fallible step.
    ///
    /// In the `Ok` case, suspends until `f(value)` completes and propagates
    /// its resolved outcome as-is. In the `Err` case, returns the error
    /// without invoking `f`; the returned future is ready on its first poll.
    pub async fn and_then_async<U, Fut, F>(self, f: F) -> Outcome<E, U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<E, U>>,
    {
        match self {
            Self::Ok(value) => f(value).await,
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Asynchronous form of [`Outcome::zip_with`].
    ///
    /// `second` runs at most once and only if `self` is `Ok`; `project` runs
    /// at most once and only if both steps succeeded; the first error
    /// encountered, left to right, is the result. A synchronous `second`
    /// lifts via [`ready`].
    pub async fn zip_with_async<U, V, Fut, S, P>(self, second: S, project: P) -> Outcome<E, V>
    where
        T: Clone,
        S: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<E, U>>,
        P: FnOnce(T, U) -> V,
    {
        match self {
            Self::Ok(first) => second(first.clone()).await.map(|b| project(first, b)),
            Self::Err(error) => Outcome::Err(error),
        }
    }
}

/// An outcome awaits as itself, without suspension.
///
/// This is the lift from the synchronous world into a pipeline of async
/// steps: an already-resolved value becomes an already-resolved future.
impl<E, T> IntoFuture for Outcome<E, T> {
    type Output = Self;
    type IntoFuture = Ready<Self>;

    fn into_future(self) -> Self::IntoFuture {
        ready(self)
    }
}

// ============================================================================
// Combinators on Futures of Outcomes
// ============================================================================

/// Combinator surface for any future that resolves to an [`Outcome`].
///
/// Lets a pipeline keep chaining without awaiting between steps:
///
/// ```ignore
/// let outcome = load(id)
///     .and_then(|record| enrich(record))
///     .await;
/// ```
// Returned futures inherit Send-ness from the supplied callbacks.
#[allow(async_fn_in_trait)]
pub trait OutcomeFutureExt<E, T>: Future<Output = Outcome<E, T>> + Sized {
    /// Transform the success value of the resolved outcome.
    async fn map_ok<U, F>(self, f: F) -> Outcome<E, U>
    where
        F: FnOnce(T) -> U,
    {
        self.await.map(f)
    }

    /// Chain a dependent asynchronous fallible step onto the resolved
    /// outcome. Short-circuits: `f` never runs once an error is present.
    async fn and_then<U, Fut, F>(self, f: F) -> Outcome<E, U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<E, U>>,
    {
        self.await.and_then_async(f).await
    }

    /// Chain a dependent step and merge both success values, as
    /// [`Outcome::zip_with_async`], starting from a future.
    async fn zip_with<U, V, Fut, S, P>(self, second: S, project: P) -> Outcome<E, V>
    where
        T: Clone,
        S: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<E, U>>,
        P: FnOnce(T, U) -> V,
    {
        self.await.zip_with_async(second, project).await
    }
}

impl<E, T, F> OutcomeFutureExt<E, T> for F where F: Future<Output = Outcome<E, T>> {}

// ============================================================================
// Tests
// ============================================================================
