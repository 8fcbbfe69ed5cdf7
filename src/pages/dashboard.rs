//! Dashboard landing page with catalog statistics.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the default post-login screen. It fetches the project list once
//! and derives everything shown (totals, category count, recent uploads)
//! locally; a fetch failure degrades to an empty catalog rather than
//! blocking the shell.

use leptos::prelude::*;

use crate::util::catalog::{distinct_category_count, recent_projects};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let projects = LocalResource::new(|| async {
        match crate::net::api::fetch_projects().await {
            Ok(list) => list,
            Err(_e) => {
                #[cfg(feature = "hydrate")]
                log::error!("failed to fetch projects: {_e}");
                Vec::new()
            }
        }
    });

    view! {
        <div class="dashboard-page">
            <section class="dashboard-page__hero">
                <h1>"Welcome, Admin"</h1>
                <p>
                    {move || {
                        projects.get().map_or_else(
                            || "Loading projects...".to_owned(),
                            |list| format!("Total Projects: {}", list.len()),
                        )
                    }}
                </p>
            </section>

            <Suspense fallback=move || {
                view! { <div class="dashboard-page__stats dashboard-page__stats--loading"></div> }
            }>
                {move || {
                    projects
                        .get()
                        .map(|list| {
                            let total = list.len();
                            let categories = distinct_category_count(&list);
                            let recent = recent_projects(&list);
                            let recent_count = recent.len();
                            view! {
                                <div class="dashboard-page__stats">
                                    <div class="stat-card">
                                        <p class="stat-card__label">"Total Projects"</p>
                                        <h2 class="stat-card__value">{total}</h2>
                                    </div>
                                    <div class="stat-card">
                                        <p class="stat-card__label">"Categories"</p>
                                        <h2 class="stat-card__value">{categories}</h2>
                                    </div>
                                    <div class="stat-card">
                                        <p class="stat-card__label">"Recent Uploads"</p>
                                        <h2 class="stat-card__value">{recent_count}</h2>
                                    </div>
                                </div>

                                <div class="dashboard-page__recent">
                                    <h3>"Recent Projects"</h3>
                                    {if recent.is_empty() {
                                        view! {
                                            <p class="dashboard-page__empty">"No projects added yet"</p>
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <div class="dashboard-page__recent-grid">
                                                {recent
                                                    .iter()
                                                    .map(|p| {
                                                        let src = p
                                                            .images
                                                            .first()
                                                            .map(|img| img.src().to_owned())
                                                            .unwrap_or_default();
                                                        view! {
                                                            <img src=src alt=p.title.clone() loading="lazy"/>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                        }
                                            .into_any()
                                    }}
                                </div>
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
