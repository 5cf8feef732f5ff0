//! Periodic background flush of registered loggers

use super::registry::Registry;
use crossbeam_channel::{bounded, select, tick, Sender};
use std::sync::{Arc, Weak};
use std::thread;
use std::time::Duration;

/// Default interval between background flushes (10 seconds)
pub const DEFAULT_FLUSH_INTERVAL: Duration = Duration::from_secs(10);

/// Background thread flushing every logger of a registry at a fixed interval.
///
/// The worker only holds a weak reference to the registry and stops when the
/// registry is gone or the flusher is dropped.
pub struct PeriodicFlusher {
    interval: Duration,
    stop: Option<Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl PeriodicFlusher {
    /// Start flushing `registry` every `interval`.
    ///
    /// A zero interval disables periodic flushing; no thread is started.
    pub fn start(registry: &Arc<Registry>, interval: Duration) -> Self {
        if interval.is_zero() {
            return Self {
                interval,
                stop: None,
                handle: None,
            };
        }

        let (stop_tx, stop_rx) = bounded::<()>(0);
        let registry: Weak<Registry> = Arc::downgrade(registry);

        let spawned = thread::Builder::new()
            .name("logger-flusher".to_string())
            .spawn(move || {
                let ticker = tick(interval);
                loop {
                    select! {
                        recv(ticker) -> _ => {
                            let Some(registry) = registry.upgrade() else {
                                break;
                            };
                            if let Err(e) = registry.flush_all() {
                                eprintln!("[LOGGER ERROR] Periodic flush failed: {}", e);
                            }
                        }
                        recv(stop_rx) -> _ => break,
                    }
                }
            });

        let handle = match spawned {
            Ok(handle) => Some(handle),
            Err(e) => {
                eprintln!(
                    "[LOGGER WARNING] Could not start flusher thread: {}. \
                     Loggers will only flush on demand.",
                    e
                );
                None
            }
        };

        Self {
            interval,
            stop: Some(stop_tx),
            handle,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for PeriodicFlusher {
    fn drop(&mut self) {
        // Disconnecting the stop channel wakes the worker
        drop(self.stop.take());

        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.join() {
                eprintln!("[LOGGER ERROR] Flusher thread panicked: {:?}", e);
            }
        }
    }
}
