//! Admin navigation sidebar.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// CSS class for a sidebar link, highlighting the active route.
fn nav_link_class(current_path: &str, target: &str, exact: bool) -> &'static str {
    let active = if exact {
        current_path == target
    } else {
        current_path.starts_with(target)
    };
    if active {
        "sidebar__link sidebar__link--active"
    } else {
        "sidebar__link"
    }
}

/// Navigation column shared by the desktop rail and the mobile drawer.
/// `on_navigate` lets the drawer close itself when a link is followed.
#[component]
pub fn Sidebar(#[prop(into, optional)] on_navigate: Option<Callback<()>>) -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;

    let notify = move |_| {
        if let Some(callback) = on_navigate {
            callback.run(());
        }
    };

    view! {
        <div class="sidebar">
            <div class="sidebar__brand">
                <h2>"ATELIER"</h2>
            </div>
            <nav class="sidebar__nav">
                <a
                    class=move || nav_link_class(&pathname.get(), "/admin/dashboard", true)
                    href="/admin/dashboard"
                    on:click=notify
                >
                    "Dashboard"
                </a>
                <a
                    class=move || nav_link_class(&pathname.get(), "/admin/projects", true)
                    href="/admin/projects"
                    on:click=notify
                >
                    "Projects"
                </a>
                <a
                    class=move || nav_link_class(&pathname.get(), "/admin/projects/add", false)
                    href="/admin/projects/add"
                    on:click=notify
                >
                    "Add Project"
                </a>
            </nav>
        </div>
    }
}
