//! Admission control for in-flight tasks.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::Semaphore;

/// Counting gate that caps how many tasks run at once.
///
/// Every run constructs its own gate and hands a clone to each task wrapper,
/// so separate runs never contend over the same permits.
#[derive(Debug, Clone)]
pub(crate) struct AdmissionGate {
    permits: Arc<Semaphore>,
}

impl AdmissionGate {
    /// Creates a gate that admits up to `max_in_flight` tasks at a time.
    pub(crate) fn new(max_in_flight: usize) -> Self {
        Self {
            permits: Arc::new(Semaphore::new(max_in_flight)),
        }
    }

    /// Wraps `task` so it holds a permit for its entire run.
    ///
    /// The permit is taken before the task is first polled and returned once
    /// the task reaches a terminal state, success or failure alike.
    pub(crate) fn admit<F>(&self, task: F) -> impl Future<Output = F::Output>
    where
        F: Future,
    {
        let permits = Arc::clone(&self.permits);

        async move {
            // The gate is never closed, so acquiring can wait but not fail.
            let _permit = permits
                .acquire_owned()
                .await
                .expect("admission gate can't be closed");

            task.await
        }
    }
}

#[cfg(test)]
mod test {
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_admitted_tasks_never_overlap_past_the_cap() {
        let gate = AdmissionGate::new(1);
        let in_flight = AtomicUsize::new(0);
        let peak = AtomicUsize::new(0);

        let tasks = (0..3).map(|_| {
            let in_flight = &in_flight;
            let peak = &peak;

            gate.admit(async move {
                let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                peak.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(10)).await;
                in_flight.fetch_sub(1, Ordering::SeqCst);
            })
        });

        futures::future::join_all(tasks).await;

        assert_eq!(peak.load(Ordering::SeqCst), 1);
    }
}
