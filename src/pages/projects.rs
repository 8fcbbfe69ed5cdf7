//! Projects list with search, filters, an explore modal, and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list is fetched once and filtered locally; search input is debounced
//! so filtering tracks typing without thrashing. Delete confirms, calls the
//! API, and drops the row from the held list on success so no refetch is
//! needed.

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::net::types::Project;
#[cfg(feature = "hydrate")]
use crate::state::toast::{ToastKind, ToastState, show_toast};
use crate::util::catalog::{
    ALL_OPTION, category_options, filter_projects, next_image_index, prev_image_index,
    year_options,
};
#[cfg(feature = "hydrate")]
use crate::util::catalog::remove_project;

#[cfg(feature = "hydrate")]
const SEARCH_DEBOUNCE_MS: u32 = 400;

#[cfg(feature = "hydrate")]
fn confirm_delete() -> bool {
    web_sys::window()
        .is_some_and(|w| w.confirm_with_message("Delete this project permanently?").unwrap_or(false))
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let toasts = expect_context::<RwSignal<ToastState>>();

    let projects = RwSignal::new(Vec::<Project>::new());
    let search = RwSignal::new(String::new());
    let debounced_search = RwSignal::new(String::new());
    let category = RwSignal::new(ALL_OPTION.to_owned());
    let year = RwSignal::new(ALL_OPTION.to_owned());
    let selected = RwSignal::new(None::<Project>);
    let active_image = RwSignal::new(0usize);
    let debounce_generation = StoredValue::new(0u64);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_projects().await {
            Ok(list) => projects.set(list),
            Err(_e) => {
                log::error!("failed to fetch projects: {_e}");
                show_toast(toasts, ToastKind::Error, "Failed to fetch projects");
            }
        }
    });

    let filtered = Memo::new(move |_| {
        filter_projects(
            &projects.get(),
            &debounced_search.get(),
            &category.get(),
            &year.get(),
        )
    });
    let categories = Memo::new(move |_| category_options(&projects.get()));
    let years = Memo::new(move |_| year_options(&projects.get()));

    let on_search_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        search.set(value.clone());
        let generation = debounce_generation.get_value() + 1;
        debounce_generation.set_value(generation);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            // A newer keystroke owns the debounce slot; drop this one.
            if debounce_generation.get_value() == generation {
                debounced_search.set(value);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = generation;
            debounced_search.set(value);
        }
    };

    let on_explore = Callback::new(move |project: Project| {
        selected.set(Some(project));
        active_image.set(0);
    });

    let on_delete = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            if !confirm_delete() {
                return;
            }
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_project(&id).await {
                    Ok(()) => {
                        projects.update(|list| remove_project(list, &id));
                        show_toast(toasts, ToastKind::Success, "Project deleted successfully");
                    }
                    Err(_) => {
                        show_toast(toasts, ToastKind::Error, "Failed to delete project");
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <div class="projects-page">
            <h2 class="projects-page__heading">"Projects"</h2>

            <div class="projects-page__filters">
                <input
                    class="projects-page__search"
                    placeholder="Search by title or location"
                    prop:value=move || search.get()
                    on:input=on_search_input
                />
                <select
                    class="projects-page__select"
                    prop:value=move || category.get()
                    on:change=move |ev| category.set(event_target_value(&ev))
                >
                    {move || {
                        categories
                            .get()
                            .into_iter()
                            .map(|option| {
                                view! { <option value=option.clone()>{option}</option> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
                <select
                    class="projects-page__select"
                    prop:value=move || year.get()
                    on:change=move |ev| year.set(event_target_value(&ev))
                >
                    {move || {
                        years
                            .get()
                            .into_iter()
                            .map(|option| {
                                view! { <option value=option.clone()>{option}</option> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </div>

            <div class="projects-page__grid">
                {move || {
                    filtered
                        .get()
                        .into_iter()
                        .map(|project| {
                            view! {
                                <ProjectCard
                                    project=project
                                    on_explore=on_explore
                                    on_delete=on_delete
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <Show when=move || selected.get().is_some()>
                {move || {
                    selected
                        .get()
                        .map(|project| {
                            let image_count = project.images.len();
                            let images = project.images.clone();
                            let current_src = move || {
                                images
                                    .get(active_image.get())
                                    .map(|img| img.src().to_owned())
                                    .unwrap_or_default()
                            };
                            let meta = format!(
                                "{} • {} • {}",
                                project.category, project.year, project.location,
                            );
                            view! {
                                <div class="modal-backdrop" on:click=move |_| selected.set(None)>
                                    <div class="modal" on:click=|ev| ev.stop_propagation()>
                                        <button
                                            class="modal__close"
                                            on:click=move |_| selected.set(None)
                                        >
                                            "✕"
                                        </button>
                                        <h2 class="modal__title">{project.title.clone()}</h2>
                                        <p class="modal__meta">{meta}</p>
                                        <p class="modal__description">
                                            {project.description.clone()}
                                        </p>
                                        <div class="modal__slider">
                                            <div class="modal__image">
                                                <img src=current_src/>
                                            </div>
                                            <Show when=move || image_count > 1>
                                                <button
                                                    class="modal__nav modal__nav--prev"
                                                    on:click=move |_| {
                                                        active_image
                                                            .update(|i| *i = prev_image_index(*i, image_count));
                                                    }
                                                >
                                                    "‹"
                                                </button>
                                                <button
                                                    class="modal__nav modal__nav--next"
                                                    on:click=move |_| {
                                                        active_image
                                                            .update(|i| *i = next_image_index(*i, image_count));
                                                    }
                                                >
                                                    "›"
                                                </button>
                                            </Show>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                }}
            </Show>
        </div>
    }
}
