//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::admin_layout::AdminLayout;
use crate::components::toast_host::ToastHost;
use crate::pages::{
    add_project::AddProjectPage, dashboard::DashboardPage, edit_project::EditProjectPage,
    login::LoginPage, projects::ProjectsPage,
};
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared toast context and sets up client-side routing. The
/// login page applies the login-view session policy itself; every route
/// under `/admin` renders through `AdminLayout`, which applies the
/// protected-view policy before mounting its child.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(ToastState::default());
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/atelier-admin.css"/>
        <Title text="Atelier Admin"/>

        <Router>
            <ToastHost/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <ParentRoute path=StaticSegment("admin") view=AdminLayout>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route
                        path=(StaticSegment("projects"), StaticSegment("add"))
                        view=AddProjectPage
                    />
                    <Route
                        path=(StaticSegment("projects"), StaticSegment("edit"), ParamSegment("id"))
                        view=EditProjectPage
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
