//! Authenticated shell around every admin route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Applies the protected-view session policy before rendering: the routed
//! child only mounts under an `Allow` verdict, and a `Redirect` verdict
//! navigates (replace) to the login entry point instead. The verdict is
//! recomputed on every protected navigation, which is where session expiry
//! is detected.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::sidebar::Sidebar;
use crate::components::topbar::Topbar;
use crate::util::guard::{Verdict, evaluate, protected_verdict};
use crate::util::session::{BrowserSessionStore, now_ms};

#[component]
pub fn AdminLayout() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();
    let pathname = location.pathname;

    let verdict = Memo::new(move |_| {
        protected_verdict(evaluate(&BrowserSessionStore, now_ms()), &pathname.get())
    });

    Effect::new(move || {
        if let Verdict::Redirect(target) = verdict.get() {
            navigate(
                &target,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    let sidebar_open = RwSignal::new(false);
    let open_sidebar = Callback::new(move |()| sidebar_open.set(true));
    let close_sidebar = Callback::new(move |()| sidebar_open.set(false));

    view! {
        <Show when=move || verdict.get() == Verdict::Allow>
            <div class="admin-layout">
                <aside class="admin-layout__sidebar">
                    <Sidebar/>
                </aside>
                <Show when=move || sidebar_open.get()>
                    <div class="admin-layout__drawer">
                        <div
                            class="admin-layout__backdrop"
                            on:click=move |_| sidebar_open.set(false)
                        ></div>
                        <aside class="admin-layout__drawer-panel">
                            <Sidebar on_navigate=close_sidebar/>
                        </aside>
                    </div>
                </Show>
                <div class="admin-layout__main">
                    <Topbar on_menu=open_sidebar/>
                    <main class="admin-layout__content">
                        <Outlet/>
                    </main>
                </div>
            </div>
        </Show>
    }
}
