//! Periodic "now" refresh.
//!
//! The time-grid views redraw their now-indicator and re-center the scroll
//! about once a minute. [`TickGate`] is the pure schedule (injected clock,
//! testable without sleeping); [`NowTicker`] is the owned background task
//! that drives a callback and stops on cancel or drop.

use chrono::{DateTime, Duration, Local};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration as StdDuration;

/// Default refresh cadence for the now indicator.
pub const DEFAULT_TICK_SECS: u64 = 60;

/// Decides when the next refresh is due against an injected clock.
#[derive(Debug)]
pub struct TickGate {
    interval: Duration,
    next_due_at: Option<DateTime<Local>>,
}

impl TickGate {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due_at: None,
        }
    }

    pub fn every_minute() -> Self {
        Self::new(Duration::seconds(DEFAULT_TICK_SECS as i64))
    }

    /// Whether a refresh is due at `now`. The first call after construction
    /// or `reset` always fires (initial scroll-to-now happens immediately).
    pub fn is_due(&mut self, now: DateTime<Local>) -> bool {
        match self.next_due_at {
            Some(due) if now < due => false,
            _ => {
                self.next_due_at = Some(now + self.interval);
                true
            }
        }
    }

    /// Re-arm so the next poll fires immediately (view or date changed).
    pub fn reset(&mut self) {
        self.next_due_at = None;
    }
}

/// Cancellable periodic task owned by the hosting view's lifetime.
///
/// The thread invokes the callback every `interval` until `stop` is called
/// or the ticker is dropped; teardown never leaves the timer running.
pub struct NowTicker {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl NowTicker {
    pub fn spawn<F>(interval: StdDuration, mut on_tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);

        let handle = thread::spawn(move || {
            // Poll the stop flag at a finer grain than the tick interval so
            // teardown doesn't block for a whole minute.
            let poll = StdDuration::from_millis(50).min(interval);
            let mut elapsed = StdDuration::ZERO;
            while flag.load(Ordering::Relaxed) {
                thread::sleep(poll);
                elapsed += poll;
                if elapsed >= interval {
                    elapsed = StdDuration::ZERO;
                    if flag.load(Ordering::Relaxed) {
                        on_tick();
                    }
                }
            }
        });

        Self {
            running,
            handle: Some(handle),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Stop the task and wait for the thread to exit.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("now ticker thread panicked during shutdown");
            }
        }
    }
}

impl Drop for NowTicker {
    fn drop(&mut self) {
        self.stop();
    }
}
