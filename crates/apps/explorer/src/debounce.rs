//! Restartable single-shot timer used for search settling and tooltip hiding.

use std::time::Duration;

use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;

#[derive(Clone, Copy)]
/// Runs the most recently scheduled callback once `delay` passes without another call.
pub struct Debouncer {
    delay: Duration,
    pending: StoredValue<Option<TimeoutHandle>>,
}

impl Debouncer {
    /// Creates a debouncer owned by the current reactive scope.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: store_value(None),
        }
    }

    /// Cancels any pending callback and schedules `callback`.
    pub fn schedule(&self, callback: impl FnOnce() + 'static) {
        self.cancel();
        match set_timeout_with_handle(callback, self.delay) {
            Ok(handle) => self.pending.set_value(Some(handle)),
            Err(err) => logging::warn!("debounce timer failed to start: {err:?}"),
        }
    }

    /// Drops the pending callback, if any.
    pub fn cancel(&self) {
        if let Some(handle) = self.pending.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    }
}
