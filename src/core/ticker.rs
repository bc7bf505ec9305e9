//! Periodic elapsed-time ticker bound to a running session.
//!
//! The ticker lives exactly as long as the session is Running: it is started
//! on a successful check-in and cancelled on check-out (or when the handle is
//! dropped). After `stop()` returns, no further tick is emitted.

use crate::core::tracker::Tracker;
use crate::models::SessionState;
use crate::utils::time::format_hms;
use chrono::Local;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub struct Ticker {
    cancelled: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Spawn a tick thread that formats the tracker's elapsed duration every
    /// `interval` and hands it to `on_tick`. The thread exits on its own if
    /// the session leaves the Running state.
    pub fn spawn<F>(tracker: Arc<Mutex<Tracker>>, interval: Duration, on_tick: F) -> Self
    where
        F: Fn(String) + Send + 'static,
    {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);

        let handle = thread::spawn(move || {
            loop {
                thread::sleep(interval);
                if flag.load(Ordering::SeqCst) {
                    break;
                }

                let elapsed = {
                    let tracker = match tracker.lock() {
                        Ok(t) => t,
                        Err(_) => break,
                    };
                    if tracker.state() != SessionState::Running {
                        break;
                    }
                    tracker.elapsed(Local::now())
                };

                // Re-check after releasing the lock: a check-out may have
                // landed while we were formatting.
                if flag.load(Ordering::SeqCst) {
                    break;
                }
                on_tick(format_hms(elapsed));
            }
        });

        Self {
            cancelled,
            handle: Some(handle),
        }
    }

    /// Cancel the ticker and wait for the tick thread to exit.
    pub fn stop(&mut self) {
        self.cancelled.store(true, Ordering::SeqCst);
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
