//! Runs a `BatchPlan` against the backend.
//!
//! The calls of one batch are awaited together, then the runner sleeps for the
//! plan's delay before starting the next batch. Progress is written into the
//! signal when a batch starts and again once all of its calls have settled;
//! the signal is reset to `None` when the run is over.

use std::future::Future;

use contracts::shared::batch::{BatchPlan, BatchProgress};
use futures_util::future::join_all;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

pub async fn run_batches<T, F, Fut>(
    plan: BatchPlan<T>,
    progress: RwSignal<Option<BatchProgress>>,
    action: F,
) -> BatchProgress
where
    F: Fn(T) -> Fut,
    Fut: Future<Output = bool>,
{
    let mut state = BatchProgress::for_plan(&plan);
    progress.set(Some(state));

    let delays: Vec<Option<u32>> = (0..plan.total_batches()).map(|i| plan.delay_after(i)).collect();

    for (index, (batch, delay)) in plan.into_batches().into_iter().zip(delays).enumerate() {
        state.start_batch(index);
        progress.set(Some(state));
        log::info!("batch {}/{}: {} item(s)", state.current_batch, state.total_batches, batch.len());

        let results = join_all(batch.into_iter().map(&action)).await;
        for ok in results {
            state.record(ok);
        }
        progress.set(Some(state));

        if let Some(ms) = delay {
            TimeoutFuture::new(ms).await;
        }
    }

    progress.set(None);
    state
}
