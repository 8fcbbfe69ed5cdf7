//! Top bar with the drawer toggle, brand block, and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::util::guard::LOGIN_PATH;
use crate::util::session::{BrowserSessionStore, SessionStore};

#[component]
pub fn Topbar(on_menu: Callback<()>) -> impl IntoView {
    let navigate = use_navigate();

    // Logout is unconditional: wipe the session scope, then leave.
    let on_logout = move |_| {
        BrowserSessionStore.clear();
        navigate(
            LOGIN_PATH,
            NavigateOptions {
                replace: true,
                ..NavigateOptions::default()
            },
        );
    };

    view! {
        <header class="topbar">
            <div class="topbar__left">
                <button class="topbar__menu" on:click=move |_| on_menu.run(())>
                    "☰"
                </button>
                <div class="topbar__brand">
                    <h1 class="topbar__title">"ATELIER"</h1>
                    <p class="topbar__subtitle">"Design Studio"</p>
                </div>
            </div>
            <button class="topbar__logout" on:click=on_logout>
                "Logout"
            </button>
        </header>
    }
}
