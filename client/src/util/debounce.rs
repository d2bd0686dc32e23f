//! Single-timer debounce for search inputs.
//!
//! DESIGN
//! ======
//! [`DebounceGate`] holds at most one pending value tagged with a generation
//! token. Each `schedule` supersedes the previous value; a timer that wakes
//! with an old token finds nothing to fire. This keeps the coalescing rule
//! testable without a clock. [`debounced`] wires the gate to `gloo-timers`.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::time::Duration;

use leptos::prelude::*;

/// Quiet period before a search keystroke triggers a fetch.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Pending-value holder that only releases the most recent value.
#[derive(Clone, Debug)]
pub struct DebounceGate<T> {
    generation: u64,
    pending: Option<(u64, T)>,
}

impl<T> Default for DebounceGate<T> {
    fn default() -> Self {
        Self { generation: 0, pending: None }
    }
}

impl<T> DebounceGate<T> {
    /// Replace any pending value and return the token its timer must present.
    pub fn schedule(&mut self, value: T) -> u64 {
        self.generation += 1;
        self.pending = Some((self.generation, value));
        self.generation
    }

    /// Release the pending value if `token` is still the latest.
    pub fn fire(&mut self, token: u64) -> Option<T> {
        match self.pending.take() {
            Some((pending_token, value)) if pending_token == token => Some(value),
            other => {
                self.pending = other;
                None
            }
        }
    }

    /// Drop any pending value (keystroke superseded by unmount).
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Wrap `on_fire` so calls coalesce until `delay` passes without a new one.
///
/// The pending value is dropped when the owning component unmounts.
pub fn debounced<T>(delay: Duration, on_fire: Callback<T>) -> Callback<T>
where
    T: Send + Sync + 'static,
{
    let gate = StoredValue::new(DebounceGate::<T>::default());
    on_cleanup(move || {
        gate.try_update_value(DebounceGate::cancel);
    });

    Callback::new(move |value: T| {
        let Some(token) = gate.try_update_value(|g| g.schedule(value)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(delay).await;
            if let Some(value) = gate.try_update_value(|g| g.fire(token)).flatten() {
                on_fire.run(value);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, delay, on_fire);
        }
    })
}
