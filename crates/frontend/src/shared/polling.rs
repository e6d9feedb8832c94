//! Periodic silent refresh for status boards.
//!
//! A `TimeoutFuture` loop rather than a callback `Interval`: the loop owns
//! nothing that has to be dropped, it simply stops once the screen's owner is
//! disposed.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Run `tick` every `interval_ms` until the calling component unmounts.
/// The pause flag skips ticks without stopping the loop.
pub fn use_polling(interval_ms: u32, paused: Signal<bool>, tick: impl Fn() + 'static) {
    let alive = StoredValue::new(true);
    spawn_local(async move {
        loop {
            TimeoutFuture::new(interval_ms).await;
            if alive.try_get_value() != Some(true) {
                log::debug!("polling stopped");
                break;
            }
            if !paused.try_get_untracked().unwrap_or(true) {
                tick();
            }
        }
    });
}
