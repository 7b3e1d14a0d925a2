use std::fmt::Display;
use std::future::Future;

use crate::outcome::Outcome;

// ============================================================================
// Command-Handling Pipeline
// ============================================================================
//
// Orchestrates: Command → Validate → Authorize → Load → Decide → Persist
//
// Every step is a caller-supplied callback; the pipeline only composes them
// with the outcome combinators. Steps run strictly in declaration order and
// the chain stops at the first error - a later callback never runs once an
// earlier step has failed.
//
// This is the GENERIC pipeline; see the booking module for a wired consumer.
//
// ============================================================================

/// Success payload of a handled command: the events persisted on its behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt<Ev> {
    pub emitted: Vec<Ev>,
}

/// Run a command through validate → authorize → load → decide → persist.
///
/// - `validate` and `authorize` are synchronous fallible steps
/// - `load` and `persist` are asynchronous fallible steps
/// - `decide` is the infallible domain decision, given the loaded history
///   plus the validated command and the authorization grant
///
/// The first error encountered is the pipeline's result and no later
/// callback is invoked. `Err: Display` is only used for the exit log line.
pub async fn handle_command<Cmd, Usr, Err, Val, Auth, Ev, Agg, VFn, AFn, LFn, LFut, DFn, PFn, PFut>(
    command: Cmd,
    user: Usr,
    validate: VFn,
    authorize: AFn,
    load: LFn,
    decide: DFn,
    persist: PFn,
) -> Outcome<Err, Receipt<Ev>>
where
    Err: Display,
    Val: Clone,
    Auth: Clone,
    VFn: FnOnce(Cmd) -> Outcome<Err, Val>,
    AFn: FnOnce(Usr) -> Outcome<Err, Auth>,
    LFn: FnOnce(Val) -> LFut,
    LFut: Future<Output = Outcome<Err, Vec<Ev>>>,
    DFn: FnOnce(Vec<Ev>, Val, Auth) -> Agg,
    PFn: FnOnce(Agg) -> PFut,
    PFut: Future<Output = Outcome<Err, Vec<Ev>>>,
{
    tracing::debug!("handling command");

    let outcome = validate(command)
        .zip_with(
            move |_| authorize(user),
            |validated, authorized| (validated, authorized),
        )
        .zip_with_async(
            move |(validated, _)| load(validated),
            move |(validated, authorized), history| decide(history, validated, authorized),
        )
        .await
        .and_then_async(move |aggregate| async move {
            persist(aggregate).await.map(|emitted| Receipt { emitted })
        })
        .await;

    outcome.fold(
        |problem| {
            tracing::debug!(error = %problem, "command rejected");
            Outcome::Err(problem)
        },
        |receipt| {
            tracing::debug!(emitted = receipt.emitted.len(), "command handled");
            Outcome::Ok(receipt)
        },
    )
}

// ============================================================================
// Tests
// ============================================================================
