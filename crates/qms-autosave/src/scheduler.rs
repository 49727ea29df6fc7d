//! # Autosave Scheduler
//!
//! ## Timer lifecycle
//!
//! ```text
//! observe(d) ──▶ latest = d ──▶ abort pending timer ──▶ arm timer(now + delay)
//!                                                          │
//!                                          deadline hit    ▼
//!                                   spawn detached save(latest) ── Err ──▶ log
//! ```
//!
//! At most one timer is pending per instance. The save itself runs in its
//! own task, so re-arming or tearing down never cancels a save that has
//! already started.
//!
//! ## Status
//!
//! `is_saving` is true while at least one save is in flight. It is cleared
//! by a drop guard, so it resets on success, on failure, and if the save
//! future is cancelled. `last_saved` only moves on success.

use std::fmt::Display;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use qms_core::Timestamp;

use crate::config::AutoSaveConfig;

type SaveFuture<E> = Pin<Box<dyn Future<Output = Result<(), E>> + Send>>;
type SaveFn<T, E> = Arc<dyn Fn(T) -> SaveFuture<E> + Send + Sync>;

// ─── Status ──────────────────────────────────────────────────────────

/// Observable save state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoSaveStatus {
    /// A save is in flight.
    pub is_saving: bool,
    /// Completion time of the last successful save.
    pub last_saved: Option<Timestamp>,
}

/// Errors constructing an [`AutoSave`].
#[derive(Error, Debug)]
pub enum AutoSaveError {
    /// Created outside a tokio runtime.
    #[error("autosave requires a tokio runtime: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}

// ─── Shared state ────────────────────────────────────────────────────

struct SaveState<T> {
    latest: Option<T>,
    in_flight: usize,
    last_saved: Option<Timestamp>,
}

struct Shared<T, E> {
    state: Mutex<SaveState<T>>,
    save: SaveFn<T, E>,
}

/// Decrements the in-flight count however the save future ends.
struct InFlight<'a, T> {
    state: &'a Mutex<SaveState<T>>,
}

impl<T> Drop for InFlight<'_, T> {
    fn drop(&mut self) {
        let mut state = self.state.lock();
        state.in_flight = state.in_flight.saturating_sub(1);
    }
}

impl<T: Clone, E> Shared<T, E> {
    /// Save the latest snapshot. `Ok(())` without calling the save function
    /// when nothing has been observed yet.
    async fn run_save(&self) -> Result<(), E> {
        let data = {
            let mut state = self.state.lock();
            match state.latest.clone() {
                Some(data) => {
                    state.in_flight += 1;
                    data
                }
                None => return Ok(()),
            }
        };
        let _in_flight = InFlight { state: &self.state };

        let result = (self.save)(data).await;
        if result.is_ok() {
            let saved_at = Timestamp::now();
            self.state.lock().last_saved = Some(saved_at);
            tracing::info!(%saved_at, "autosave completed");
        }
        result
    }
}

// ─── AutoSave ────────────────────────────────────────────────────────

/// Debounced background saver for values of type `T`.
///
/// Must be created inside a tokio runtime; timers and saves are spawned on
/// that runtime. Dropping the scheduler cancels any pending timer.
pub struct AutoSave<T, E> {
    shared: Arc<Shared<T, E>>,
    delay: std::time::Duration,
    enabled: AtomicBool,
    pending: Mutex<Option<JoinHandle<()>>>,
    runtime: Handle,
}

impl<T, E> std::fmt::Debug for AutoSave<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutoSave")
            .field("delay", &self.delay)
            .field("enabled", &self.enabled.load(Ordering::Relaxed))
            .field("pending", &self.has_pending())
            .finish_non_exhaustive()
    }
}

impl<T, E> AutoSave<T, E>
where
    T: Clone + Send + 'static,
    E: Display + Send + 'static,
{
    /// Create a scheduler calling `save` with the latest observed value.
    pub fn new<F, Fut>(config: AutoSaveConfig, save: F) -> Result<Self, AutoSaveError>
    where
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), E>> + Send + 'static,
    {
        let runtime = Handle::try_current()?;
        let save: SaveFn<T, E> = Arc::new(move |data| Box::pin(save(data)) as SaveFuture<E>);
        Ok(Self {
            shared: Arc::new(Shared {
                state: Mutex::new(SaveState {
                    latest: None,
                    in_flight: 0,
                    last_saved: None,
                }),
                save,
            }),
            delay: config.delay,
            enabled: AtomicBool::new(config.enabled),
            pending: Mutex::new(None),
            runtime,
        })
    }

    /// Record a new value and restart the debounce timer.
    pub fn observe(&self, data: T) {
        self.shared.state.lock().latest = Some(data);
        if self.is_enabled() {
            self.arm();
        }
    }

    /// Save the latest value now, bypassing the debounce.
    ///
    /// Returns immediately with `Ok(())` when disabled or when nothing has
    /// been observed. The pending timer, if any, is left alone.
    pub async fn save_now(&self) -> Result<(), E> {
        if !self.is_enabled() {
            tracing::debug!("save_now skipped: autosave disabled");
            return Ok(());
        }
        let result = self.shared.run_save().await;
        if let Err(e) = &result {
            tracing::error!(error = %e, "manual save failed");
        }
        result
    }

    /// Enable or disable scheduling. Disabling cancels the pending timer;
    /// enabling arms one if a value has been observed.
    pub fn set_enabled(&self, enabled: bool) {
        let was = self.enabled.swap(enabled, Ordering::SeqCst);
        if was == enabled {
            return;
        }
        if enabled {
            if self.shared.state.lock().latest.is_some() {
                self.arm();
            }
        } else {
            self.cancel_pending();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Current save status.
    pub fn status(&self) -> AutoSaveStatus {
        let state = self.shared.state.lock();
        AutoSaveStatus {
            is_saving: state.in_flight > 0,
            last_saved: state.last_saved,
        }
    }

    /// The most recently observed value.
    pub fn latest(&self) -> Option<T> {
        self.shared.state.lock().latest.clone()
    }

    /// Cancel the pending timer. Saves already running are not affected.
    pub fn shutdown(&self) {
        self.cancel_pending();
    }

    fn arm(&self) {
        let shared = Arc::clone(&self.shared);
        let deadline = Instant::now() + self.delay;
        let runtime = self.runtime.clone();
        let timer = self.runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            runtime.spawn(async move {
                if let Err(e) = shared.run_save().await {
                    tracing::error!(error = %e, "scheduled autosave failed");
                }
            });
        });
        if let Some(previous) = self.pending.lock().replace(timer) {
            previous.abort();
        }
        tracing::debug!(delay = ?self.delay, "autosave timer armed");
    }
}

impl<T, E> AutoSave<T, E> {
    /// Whether a timer is armed and has not fired yet.
    pub fn has_pending(&self) -> bool {
        self.pending
            .lock()
            .as_ref()
            .is_some_and(|timer| !timer.is_finished())
    }

    fn cancel_pending(&self) {
        if let Some(timer) = self.pending.lock().take() {
            timer.abort();
            tracing::debug!("autosave timer cancelled");
        }
    }
}

impl<T, E> Drop for AutoSave<T, E> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
