//! Interval tick source and countdown driver.
//!
//! A [`Ticker`] owns one background thread that fires a callback once
//! immediately and then on a fixed cadence. Dropping the ticker (or calling
//! [`Ticker::stop`]) wakes the thread through channel disconnection and
//! joins it, so teardown is deterministic on every exit path.

use crate::models::TimerState;
use crate::runtime::clock::Clock;
use crate::unit_status_at;
use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

/// Repeating callback on a named background thread.
pub struct Ticker {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Start ticking. The callback runs once before the first wait.
    pub fn start<F>(interval: Duration, tick: F) -> Self
    where
        F: Fn() + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let handle = std::thread::Builder::new()
            .name("countdown-tick".to_string())
            .spawn(move || {
                tick();
                loop {
                    match stop_rx.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => tick(),
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
            })
            .ok();

        if handle.is_none() {
            log::warn!("Could not spawn tick thread; countdown will not refresh");
        }

        Self {
            stop_tx: Some(stop_tx),
            handle,
        }
    }

    /// Stop the tick thread and wait for it to finish. Idempotent.
    pub fn stop(&mut self) {
        drop(self.stop_tx.take());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Inputs one countdown view is parameterized on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownParams {
    /// Raw RFC 3339 enrollment timestamp; malformed input surfaces as the
    /// unavailable sentinel on every tick.
    pub enrollment: String,
    pub unit_index: i64,
    pub total_units: Option<u32>,
}

/// Drives repeated evaluation for one countdown view.
///
/// Holds at most one ticker; re-parameterizing cancels the old interval
/// before the new one starts, and dropping the driver stops ticking.
pub struct CountdownDriver<C: Clock + Send + Sync + 'static> {
    clock: Arc<C>,
    interval: Duration,
    params: Option<CountdownParams>,
    ticker: Option<Ticker>,
}

impl<C: Clock + Send + Sync + 'static> CountdownDriver<C> {
    /// One-second cadence, matching the display refresh.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self::with_interval(clock, Duration::from_secs(1))
    }

    #[must_use]
    pub fn with_interval(clock: C, interval: Duration) -> Self {
        Self {
            clock: Arc::new(clock),
            interval,
            params: None,
            ticker: None,
        }
    }

    /// Point the driver at new parameters. Identical params are a no-op so
    /// re-renders do not restart the interval.
    pub fn set_params<F>(&mut self, params: CountdownParams, on_tick: F)
    where
        F: Fn(TimerState) + Send + 'static,
    {
        if self.params.as_ref() == Some(&params) {
            return;
        }

        // Old interval goes down before the new one starts.
        self.ticker = None;
        self.params = Some(params.clone());

        let clock = Arc::clone(&self.clock);
        self.ticker = Some(Ticker::start(self.interval, move || {
            let state = unit_status_at(
                &params.enrollment,
                params.unit_index,
                params.total_units,
                clock.now(),
            );
            on_tick(state);
        }));
    }

    /// Stop ticking without dropping the driver.
    pub fn shutdown(&mut self) {
        self.ticker = None;
        self.params = None;
    }
}
