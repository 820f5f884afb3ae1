//! UI state: the toast queue and the busy overlay counter.
//!
//! DESIGN
//! ======
//! Each toast owns a pending expiry deadline and one task in the store's
//! [`ExpiryScheduler`]. Dismissing a toast cancels both, and a task only
//! expires a toast whose deadline is still pending, so a late timer is a
//! no-op. Busy is a depth counter so overlapping long operations do not clear
//! each other's overlay.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::util::clock;

/// How long a toast stays up without user dismissal.
pub const TOAST_TTL: Duration = Duration::from_secs(3);

/// Toast severity; drives the toast's color class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// Toast identifier, strictly increasing per [`UiState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(u64);

impl ToastId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
}

/// Toast queue and busy depth, free of any reactive or browser types.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    toasts: Vec<Toast>,
    /// Pending expiry deadline (epoch ms) per live toast.
    expiries: BTreeMap<ToastId, u64>,
    last_id: u64,
    busy_depth: u32,
}

impl UiState {
    /// Active toasts, oldest first.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Append a toast and schedule its expiry at `now_ms + TOAST_TTL`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyMessage`] for blank messages.
    pub fn show(&mut self, message: &str, severity: Severity, now_ms: u64) -> Result<ToastId, StoreError> {
        if message.trim().is_empty() {
            return Err(StoreError::EmptyMessage);
        }
        self.last_id += 1;
        let id = ToastId(self.last_id);
        self.toasts.push(Toast {
            id,
            message: message.to_owned(),
            severity,
        });
        self.expiries.insert(id, deadline_after(now_ms));
        Ok(id)
    }

    /// Remove `id` and cancel its pending expiry. Returns whether it was live.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        self.expiries.remove(&id);
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Remove every toast whose deadline is at or before `now_ms`.
    pub fn expire_due(&mut self, now_ms: u64) -> Vec<ToastId> {
        let due: Vec<ToastId> = self
            .expiries
            .iter()
            .filter(|&(_, &deadline)| deadline <= now_ms)
            .map(|(&id, _)| id)
            .collect();
        for id in &due {
            self.dismiss(*id);
        }
        due
    }

    /// Expire `id` if its deadline is still pending. Returns whether it was
    /// removed; an already dismissed toast is left alone.
    pub fn expire(&mut self, id: ToastId) -> bool {
        self.expiries.contains_key(&id) && self.dismiss(id)
    }

    /// Toasts whose expiry is still pending, in id order.
    pub fn pending_ids(&self) -> Vec<ToastId> {
        self.expiries.keys().copied().collect()
    }

    /// Deadline of `id`, if its expiry is still pending.
    pub fn expiry_of(&self, id: ToastId) -> Option<u64> {
        self.expiries.get(&id).copied()
    }

    pub fn set_busy(&mut self, busy: bool) {
        if busy {
            self.busy_depth = self.busy_depth.saturating_add(1);
        } else {
            self.busy_depth = self.busy_depth.saturating_sub(1);
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy_depth > 0
    }

    pub fn busy_depth(&self) -> u32 {
        self.busy_depth
    }
}

#[allow(clippy::cast_possible_truncation)]
fn deadline_after(now_ms: u64) -> u64 {
    now_ms.saturating_add(TOAST_TTL.as_millis() as u64)
}

/// Task run once a toast's time-to-live has elapsed.
pub type ExpiryCallback = Box<dyn FnOnce() + Send>;

/// Owns one pending expiry task per live toast.
pub trait ExpiryScheduler {
    /// Run `on_due` after `delay`, replacing any task held for `id`.
    fn schedule(&mut self, id: ToastId, delay: Duration, on_due: ExpiryCallback);
    /// Drop the task for `id` so it never runs.
    fn cancel(&mut self, id: ToastId);
    /// Forget tasks whose toast is not in `live`.
    fn retain(&mut self, live: &[ToastId]);
}

#[cfg(feature = "hydrate")]
pub type BoxedScheduler = Box<dyn ExpiryScheduler>;
#[cfg(not(feature = "hydrate"))]
pub type BoxedScheduler = Box<dyn ExpiryScheduler + Send + Sync>;

#[cfg(feature = "hydrate")]
type SchedulerCell = StoredValue<BoxedScheduler, LocalStorage>;
#[cfg(not(feature = "hydrate"))]
type SchedulerCell = StoredValue<BoxedScheduler>;

/// One browser timeout per toast. Dropping a `Timeout` clears it, so
/// replacing or removing an entry cancels that toast's expiry.
#[cfg(feature = "hydrate")]
#[derive(Default)]
pub struct BrowserTimers(std::collections::HashMap<ToastId, gloo_timers::callback::Timeout>);

#[cfg(feature = "hydrate")]
impl ExpiryScheduler for BrowserTimers {
    fn schedule(&mut self, id: ToastId, delay: Duration, on_due: ExpiryCallback) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        self.0.insert(id, gloo_timers::callback::Timeout::new(millis, on_due));
    }

    fn cancel(&mut self, id: ToastId) {
        self.0.remove(&id);
    }

    fn retain(&mut self, live: &[ToastId]) {
        self.0.retain(|id, _| live.contains(id));
    }
}

/// Scheduler for hosts without timers; expiry runs only through
/// [`UiStore::expire_due`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ManualExpiry;

impl ExpiryScheduler for ManualExpiry {
    fn schedule(&mut self, _id: ToastId, _delay: Duration, _on_due: ExpiryCallback) {}

    fn cancel(&mut self, _id: ToastId) {}

    fn retain(&mut self, _live: &[ToastId]) {}
}

#[cfg(feature = "hydrate")]
fn default_scheduler() -> BoxedScheduler {
    Box::new(BrowserTimers::default())
}

#[cfg(not(feature = "hydrate"))]
fn default_scheduler() -> BoxedScheduler {
    Box::new(ManualExpiry)
}

/// Reactive handle over [`UiState`], shared by copy with every view.
///
/// It also owns the expiry scheduler: browser timeouts in the `hydrate`
/// build, [`ManualExpiry`] elsewhere.
#[derive(Clone, Copy)]
pub struct UiStore {
    state: RwSignal<UiState>,
    scheduler: SchedulerCell,
}

impl UiStore {
    pub fn new() -> Self {
        Self::with_scheduler(default_scheduler())
    }

    /// Store whose toast expiry is driven by `scheduler`.
    pub fn with_scheduler(scheduler: BoxedScheduler) -> Self {
        #[cfg(feature = "hydrate")]
        let scheduler = StoredValue::new_local(scheduler);
        #[cfg(not(feature = "hydrate"))]
        let scheduler = StoredValue::new(scheduler);
        Self {
            state: RwSignal::new(UiState::default()),
            scheduler,
        }
    }

    fn read<U>(&self, fun: impl FnOnce(&UiState) -> U) -> Result<U, StoreError> {
        self.state.try_with(fun).ok_or(StoreError::Disposed("ui"))
    }

    fn write<U>(&self, fun: impl FnOnce(&mut UiState) -> U) -> U {
        self.state
            .try_update(fun)
            .unwrap_or_else(|| panic!("{}", StoreError::Disposed("ui")))
    }

    /// # Errors
    ///
    /// Returns [`StoreError::Disposed`] after the store has been torn down.
    pub fn try_active_notifications(&self) -> Result<Vec<Toast>, StoreError> {
        self.read(|s| s.toasts.clone())
    }

    /// Active toasts, oldest first; tracked inside a reactive scope.
    ///
    /// # Panics
    ///
    /// Panics with a configuration error after the store has been torn down.
    pub fn active_notifications(&self) -> Vec<Toast> {
        self.try_active_notifications().unwrap_or_else(|e| panic!("{e}"))
    }

    /// # Errors
    ///
    /// Returns [`StoreError::Disposed`] after the store has been torn down.
    pub fn try_is_busy(&self) -> Result<bool, StoreError> {
        self.read(UiState::is_busy)
    }

    /// # Panics
    ///
    /// Panics with a configuration error after the store has been torn down.
    pub fn is_busy(&self) -> bool {
        self.try_is_busy().unwrap_or_else(|e| panic!("{e}"))
    }

    /// `true` enters a busy section, `false` leaves one.
    ///
    /// # Panics
    ///
    /// Panics with a configuration error after the store has been torn down.
    pub fn set_busy(&self, busy: bool) {
        self.write(|s| s.set_busy(busy));
    }

    /// Enter a busy section that ends when the guard drops.
    #[must_use = "the busy section ends as soon as the guard is dropped"]
    pub fn busy_guard(&self) -> BusyGuard {
        self.set_busy(true);
        BusyGuard { store: *self }
    }

    /// Show a toast and schedule its removal after [`TOAST_TTL`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyMessage`] for blank messages.
    ///
    /// # Panics
    ///
    /// Panics with a configuration error after the store has been torn down.
    pub fn show(&self, message: &str, severity: Severity) -> Result<ToastId, StoreError> {
        let now = clock::now_ms();
        let (id, live) = self.write(|s| {
            let id = s.show(message, severity, now)?;
            Ok::<_, StoreError>((id, s.pending_ids()))
        })?;
        let store = *self;
        // Tasks that already fired are pruned here, never from inside their own callback.
        self.scheduler.update_value(|scheduler| {
            scheduler.retain(&live);
            scheduler.schedule(id, TOAST_TTL, Box::new(move || store.expire_from_timer(id)));
        });
        Ok(id)
    }

    /// [`Self::show`] with [`Severity::Info`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyMessage`] for blank messages.
    pub fn info(&self, message: &str) -> Result<ToastId, StoreError> {
        self.show(message, Severity::Info)
    }

    /// Remove a toast and cancel its expiry task. Unknown ids are a no-op.
    ///
    /// # Panics
    ///
    /// Panics with a configuration error after the store has been torn down.
    pub fn dismiss(&self, id: ToastId) {
        self.write(|s| s.dismiss(id));
        self.scheduler.update_value(|scheduler| scheduler.cancel(id));
    }

    /// Expire every toast whose deadline is at or before `now_ms`, for hosts
    /// that drive expiry without timers.
    ///
    /// # Panics
    ///
    /// Panics with a configuration error after the store has been torn down.
    pub fn expire_due(&self, now_ms: u64) -> Vec<ToastId> {
        self.write(|s| s.expire_due(now_ms))
    }

    /// Tear down the backing signal and drop pending expiry tasks.
    pub fn dispose(self) {
        self.scheduler.dispose();
        self.state.dispose();
    }

    /// Scheduled task body. Tolerates the toast being gone and the store
    /// being torn down.
    fn expire_from_timer(&self, id: ToastId) {
        self.state.try_update(|s| s.expire(id));
    }
}

impl Default for UiStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Busy section bracket returned by [`UiStore::busy_guard`].
pub struct BusyGuard {
    store: UiStore,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.store.state.try_update(|s| s.set_busy(false));
    }
}
