//! Paced execution of a fixed list of async tasks.

use std::future::Future;

use futures::future::join_all;
use tokio::time;
use tracing::debug;
use tracing::instrument;
use tracing::trace;

use crate::gate::AdmissionGate;
use crate::pacing::Pacing;

/// Terminal result of a single task: its value, or its captured error.
pub type Outcome<T, E> = Result<T, E>;

/// Runs every task and returns their values in submission order, or the first
/// failure in submission order.
///
/// A failure never cuts the run short: every batch is still dispatched and
/// drained before the error is reported, and the error comes back exactly as
/// the task produced it, not wrapped in anything. When several tasks fail,
/// the one with the lowest submission index wins, no matter which finished
/// first.
///
/// See [run_paced_settled] for how the batches are formed and paced, or to
/// keep all outcomes instead of bailing on the first failure.
pub async fn run_paced<I, F, T, E>(tasks: I, pacing: Pacing) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
{
    run_paced_settled(tasks, pacing).await.into_iter().collect()
}

/// Runs every task and returns each task's [Outcome] in submission order.
///
/// The task list is sliced in order into batches of
/// [max_in_flight](Pacing::max_in_flight) tasks. Tasks within a batch run
/// concurrently behind an admission gate; the next batch is dispatched only
/// once the whole previous batch has reached a terminal state and a rest of
/// [delay](Pacing::delay) has passed. No rest is added after the final batch,
/// and an empty task list returns immediately.
///
/// Failures are captured in place, so one bad task never cancels its
/// siblings; every task runs exactly once. There are no retries and no
/// per-task timeout, which means a task that never completes stalls its batch
/// and everything after it.
#[instrument(skip_all, fields(max_in_flight = pacing.max_in_flight(), delay = ?pacing.delay()))]
pub async fn run_paced_settled<I, F, T, E>(tasks: I, pacing: Pacing) -> Vec<Outcome<T, E>>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
{
    let gate = AdmissionGate::new(pacing.max_in_flight());

    // Wrapping is lazy; nothing runs until its batch is dispatched.
    let pending: Vec<_> = tasks.into_iter().map(|task| gate.admit(task)).collect();
    let total = pending.len();

    let mut outcomes = Vec::with_capacity(total);
    let mut queue = pending.into_iter();
    let mut batch_index = 0;

    loop {
        let batch: Vec<_> = queue.by_ref().take(pacing.max_in_flight()).collect();
        if batch.is_empty() {
            break;
        }

        batch_index += 1;
        debug!("Dispatching batch {batch_index} ({} tasks).", batch.len());
        outcomes.extend(join_all(batch).await);

        // Rest between batches, but not after the last one.
        if outcomes.len() < total && !pacing.delay().is_zero() {
            trace!("Batch {batch_index} drained, resting {:?}.", pacing.delay());
            time::sleep(pacing.delay()).await;
        }
    }

    outcomes
}
