//! Host component rendering the shared toast slot.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    }
}

/// Renders the current toast, if any. Mounted once at the app root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        {move || {
            toasts.get().current.map(|toast| {
                view! { <div class=toast_class(toast.kind)>{toast.message}</div> }
            })
        }}
    }
}
