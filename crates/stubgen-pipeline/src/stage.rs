//! Bounded concurrent stage execution
//!
//! Each concurrent stage is a supervisor loop over its input channel with a
//! semaphore-gated task pool. A permit is acquired before spawning the item
//! worker, so at most `limit` items occupy the stage at once and, once the
//! bound is reached, further input stays queued in the channel (which is how
//! backpressure reaches the upstream stage). The call returns only after the
//! input channel closes and every in-flight worker has finished, at which
//! point the caller drops its downstream sender to propagate completion.

use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::error;

/// Run `worker` over every item of `input` with at most `limit` items in
/// flight. Resolves once the input is exhausted and all workers are done.
pub(crate) async fn run_bounded<T, W, Fut>(mut input: mpsc::Receiver<T>, limit: usize, worker: W)
where
    T: Send + 'static,
    W: Fn(T) -> Fut,
    Fut: Future<Output = ()> + Send + 'static,
{
    let semaphore = Arc::new(Semaphore::new(limit));
    let mut in_flight: JoinSet<()> = JoinSet::new();

    while let Some(item) = input.recv().await {
        let permit = match Arc::clone(&semaphore).acquire_owned().await {
            Ok(permit) => permit,
            // The semaphore is never closed; this arm is unreachable in
            // practice but must not panic the supervisor.
            Err(_) => break,
        };

        let fut = worker(item);
        in_flight.spawn(async move {
            fut.await;
            drop(permit);
        });

        // Reap already-finished workers so the set does not grow with
        // completed handles over a long run.
        while let Some(result) = in_flight.try_join_next() {
            if let Err(e) = result {
                error!("Stage worker panicked: {}", e);
            }
        }
    }

    // Input closed: drain all in-flight work before signaling completion.
    while let Some(result) = in_flight.join_next().await {
        if let Err(e) = result {
            error!("Stage worker panicked: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Tracks how many workers are inside the stage at once.
    #[derive(Default)]
    struct Gauge {
        current: AtomicUsize,
        max: AtomicUsize,
    }

    impl Gauge {
        fn enter(&self) {
            let now = self.current.fetch_add(1, Ordering::SeqCst) + 1;
            self.max.fetch_max(now, Ordering::SeqCst);
        }

        fn leave(&self) {
            self.current.fetch_sub(1, Ordering::SeqCst);
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_all_items_processed() {
        let (tx, rx) = mpsc::channel(8);
        let processed = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&processed);
        let stage = tokio::spawn(run_bounded(rx, 2, move |_item: u32| {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        }));

        for i in 0..20u32 {
            tx.send(i).await.unwrap();
        }
        drop(tx);

        stage.await.unwrap();
        assert_eq!(processed.load(Ordering::SeqCst), 20);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrency_bound_respected() {
        let (tx, rx) = mpsc::channel(16);
        let gauge = Arc::new(Gauge::default());

        let observer = Arc::clone(&gauge);
        let stage = tokio::spawn(run_bounded(rx, 3, move |_item: u32| {
            let observer = Arc::clone(&observer);
            async move {
                observer.enter();
                tokio::time::sleep(Duration::from_millis(20)).await;
                observer.leave();
            }
        }));

        for i in 0..12u32 {
            tx.send(i).await.unwrap();
        }
        drop(tx);
        stage.await.unwrap();

        assert!(gauge.max.load(Ordering::SeqCst) <= 3);
        assert_eq!(gauge.current.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_completes_with_empty_input() {
        let (tx, rx) = mpsc::channel::<u32>(1);
        drop(tx);

        // Must resolve immediately with nothing to do.
        run_bounded(rx, 4, |_item| async {}).await;
    }
}
