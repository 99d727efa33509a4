//! Single-slot debounced timeouts for tooltips, copy feedback, and confirmation windows.

use std::time::Duration;

use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;

#[derive(Clone, Copy)]
/// Owns at most one pending browser timeout.
///
/// Scheduling clears the previous timeout first, and the pending timeout is cleared when the
/// owning component is disposed. Outside the browser there is no timer: the callback is held
/// until it is replaced, cleared, or run by the host.
pub struct TimeoutSlot {
    handle: StoredValue<Option<TimeoutHandle>>,
    #[cfg(not(target_arch = "wasm32"))]
    deferred: StoredValue<Option<Box<dyn FnOnce()>>>,
}

impl TimeoutSlot {
    /// Creates a slot bound to the current reactive owner.
    pub fn new() -> Self {
        let slot = Self {
            handle: store_value(None::<TimeoutHandle>),
            #[cfg(not(target_arch = "wasm32"))]
            deferred: store_value(None::<Box<dyn FnOnce()>>),
        };
        on_cleanup(move || slot.clear());
        slot
    }

    /// Replaces any pending timeout with `callback` after `delay`.
    pub fn schedule(&self, delay: Duration, callback: impl FnOnce() + 'static) {
        self.clear();

        #[cfg(target_arch = "wasm32")]
        {
            match set_timeout_with_handle(callback, delay) {
                Ok(pending) => {
                    self.handle.try_set_value(Some(pending));
                }
                Err(err) => logging::warn!("timeout scheduling failed: {err:?}"),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = delay;
            let callback: Box<dyn FnOnce()> = Box::new(callback);
            self.deferred.try_set_value(Some(callback));
        }
    }

    /// Clears the pending timeout, if any.
    pub fn clear(&self) {
        self.handle.try_update_value(|pending| {
            if let Some(pending) = pending.take() {
                pending.clear();
            }
        });
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.deferred.try_set_value(None);
        }
    }

    /// Runs the held callback as if its delay had elapsed. Returns `false` when nothing was
    /// pending.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn elapse(&self) -> bool {
        match self.deferred.try_update_value(Option::take).flatten() {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }
}

impl Default for TimeoutSlot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn rescheduling_replaces_the_pending_callback() {
        let runtime = create_runtime();
        let fired = Rc::new(Cell::new(0));
        let slot = TimeoutSlot::new();

        let first = Rc::clone(&fired);
        slot.schedule(Duration::from_millis(10), move || first.set(first.get() + 1));
        let second = Rc::clone(&fired);
        slot.schedule(Duration::from_millis(10), move || second.set(second.get() + 10));

        assert!(slot.elapse());
        assert_eq!(fired.get(), 10);
        assert!(!slot.elapse());

        let third = Rc::clone(&fired);
        slot.schedule(Duration::from_millis(10), move || third.set(third.get() + 100));
        slot.clear();
        assert!(!slot.elapse());
        assert_eq!(fired.get(), 10);
        runtime.dispose();
    }
}
