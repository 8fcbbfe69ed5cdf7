//! Single-slot toast notification state.
//!
//! DESIGN
//! ======
//! One toast is visible at a time. Each `show` bumps a generation counter
//! and the auto-dismiss timer only clears its own generation, so a timer
//! left over from an earlier toast can never dismiss a newer one.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// How long a toast stays visible.
pub const TOAST_DURATION_MS: u32 = 2_500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

/// Shared toast slot, provided as context from the app root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub current: Option<Toast>,
    pub generation: u64,
}

impl ToastState {
    /// Replace the visible toast; returns the generation owning it.
    pub fn show(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.generation += 1;
        self.current = Some(Toast {
            kind,
            message: message.into(),
        });
        self.generation
    }

    /// Dismiss only while `generation` still owns the visible toast.
    pub fn dismiss(&mut self, generation: u64) {
        if self.generation == generation {
            self.current = None;
        }
    }
}

/// Show a toast and schedule its auto-dismiss.
pub fn show_toast(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    let mut generation = 0;
    toasts.update(|state| generation = state.show(kind, message));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
        toasts.update(|state| state.dismiss(generation));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = generation;
    }
}
