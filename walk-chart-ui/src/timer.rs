//! Cancellable deferred actions backed by `window.setTimeout`.

use dioxus::core::Task;
use dioxus::prelude::*;
use wasm_bindgen_futures::JsFuture;

/// Resolve after `ms` milliseconds.
///
/// Never resolves if there is no `window` (e.g. outside a browser).
pub async fn sleep_ms(ms: u32) {
    let delay = i32::try_from(ms).unwrap_or(i32::MAX);
    let promise = js_sys::Promise::new(&mut |resolve, _reject| match web_sys::window() {
        Some(window) => {
            if let Err(e) =
                window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, delay)
            {
                log::warn!("timer: setTimeout failed: {:?}", e);
            }
        }
        None => log::warn!("timer: no window, deferred action will not run"),
    });
    let _ = JsFuture::from(promise).await;
}

/// A single slot for one pending delayed action.
///
/// Scheduling replaces (and cancels) whatever was pending. The underlying
/// task belongs to the component that created the slot, so it is dropped
/// with that component.
#[derive(Clone, Copy, PartialEq)]
pub struct DeferredAction {
    pending: Signal<Option<Task>>,
}

/// Create a [`DeferredAction`] scoped to the calling component.
pub fn use_deferred_action() -> DeferredAction {
    let pending = use_signal(|| None);
    DeferredAction { pending }
}

impl DeferredAction {
    /// Run `action` after `delay_ms`, unless cancelled or rescheduled first.
    pub fn schedule(mut self, delay_ms: u32, action: impl FnOnce() + 'static) {
        self.cancel();
        let mut pending = self.pending;
        let task = spawn(async move {
            sleep_ms(delay_ms).await;
            pending.set(None);
            action();
        });
        self.pending.set(Some(task));
    }

    /// Drop the pending action, if any.
    pub fn cancel(mut self) {
        if let Some(task) = self.pending.write().take() {
            task.cancel();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.peek().is_some()
    }
}
