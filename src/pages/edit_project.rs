//! Edit-project form: load, restage images, update.
//!
//! SYSTEM CONTEXT
//! ==============
//! Existing images come back as stored URLs and newly staged ones as data
//! URLs; both flow through the same staging list so captions and removal
//! work uniformly. Captions are submitted exactly as typed.

#[cfg(test)]
#[path = "edit_project_test.rs"]
mod edit_project_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::state::toast::{ToastKind, ToastState, show_toast};
use crate::util::images::{StagedImage, remove_image, set_caption};
#[cfg(feature = "hydrate")]
use crate::net::types::ProjectPayload;
#[cfg(feature = "hydrate")]
use crate::util::images::{MAX_IMAGES_MESSAGE, can_accept, edit_payload};
use crate::net::types::Project;

fn validate_update(title: &str, category: &str, year: &str) -> Result<i32, &'static str> {
    if title.trim().is_empty() || category.trim().is_empty() || year.trim().is_empty() {
        return Err("Required fields missing");
    }
    year.trim().parse::<i32>().map_err(|_| "Year must be a number")
}

fn staged_from_project(project: &Project) -> Vec<StagedImage> {
    project
        .images
        .iter()
        .map(|image| StagedImage {
            url: image.url.clone(),
            base64: image.base64.clone(),
            caption: image.caption.clone(),
        })
        .collect()
}

#[component]
pub fn EditProjectPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();
    #[cfg(feature = "hydrate")]
    let params = use_params_map();

    let loading = RwSignal::new(true);
    let title = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let year = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let images = RwSignal::new(Vec::<StagedImage>::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(id) = params.read().get("id") else {
            return;
        };
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_project(&id).await {
                Ok(project) => {
                    title.set(project.title.clone());
                    category.set(project.category.clone());
                    year.set(project.year.to_string());
                    location.set(project.location.clone());
                    description.set(project.description.clone());
                    images.set(staged_from_project(&project));
                    loading.set(false);
                }
                Err(_e) => {
                    log::error!("failed to load project: {_e}");
                    show_toast(toasts, ToastKind::Error, "Failed to load project");
                    loading.set(false);
                }
            }
        });
    });

    let on_files = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let Some(files) = input.files() else {
                return;
            };
            if !can_accept(images.get_untracked().len(), files.length() as usize) {
                show_toast(toasts, ToastKind::Error, MAX_IMAGES_MESSAGE);
                return;
            }
            leptos::task::spawn_local(async move {
                let staged = crate::util::images::stage_files(files).await;
                images.update(|list| list.extend(staged));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let year_value = match validate_update(&title.get(), &category.get(), &year.get()) {
            Ok(year) => year,
            Err(message) => {
                show_toast(toasts, ToastKind::Error, message);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let Some(id) = params.read_untracked().get("id") else {
                busy.set(false);
                return;
            };
            let navigate = navigate.clone();
            let payload = ProjectPayload {
                title: title.get_untracked().trim().to_owned(),
                category: category.get_untracked().trim().to_owned(),
                year: year_value,
                location: location.get_untracked().trim().to_owned(),
                description: description.get_untracked().trim().to_owned(),
                images: edit_payload(&images.get_untracked()),
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::update_project(&id, &payload).await {
                    Ok(()) => {
                        show_toast(toasts, ToastKind::Success, "Project updated successfully");
                        gloo_timers::future::TimeoutFuture::new(super::REDIRECT_DELAY_MS).await;
                        navigate("/admin/projects", NavigateOptions::default());
                    }
                    Err(message) => {
                        show_toast(toasts, ToastKind::Error, message);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = year_value;
            busy.set(false);
        }
    };

    view! {
        <div class="form-page">
            <h2 class="form-page__heading">"Edit Project"</h2>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="form-page__loading">"Loading..."</p> }
            >
                <form class="form-page__form" on:submit=on_submit>
                    <input
                        class="form-page__input"
                        placeholder="Title"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                    <input
                        class="form-page__input"
                        placeholder="Category"
                        prop:value=move || category.get()
                        on:input=move |ev| category.set(event_target_value(&ev))
                    />
                    <input
                        class="form-page__input"
                        type="number"
                        placeholder="Year"
                        prop:value=move || year.get()
                        on:input=move |ev| year.set(event_target_value(&ev))
                    />
                    <input
                        class="form-page__input"
                        placeholder="Location"
                        prop:value=move || location.get()
                        on:input=move |ev| location.set(event_target_value(&ev))
                    />
                    <textarea
                        class="form-page__textarea"
                        rows="4"
                        placeholder="Description"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>

                    <input type="file" multiple accept="image/*" on:change=on_files/>

                    <div class="form-page__previews">
                        {move || {
                            images
                                .get()
                                .iter()
                                .enumerate()
                                .map(|(index, image)| {
                                    let src = image.src().to_owned();
                                    let caption = image.caption.clone();
                                    view! {
                                        <div class="image-tile">
                                            <div class="image-tile__frame">
                                                <img src=src/>
                                            </div>
                                            <input
                                                class="image-tile__caption"
                                                placeholder="Caption"
                                                prop:value=caption
                                                on:change=move |ev| {
                                                    images
                                                        .update(|list| {
                                                            set_caption(list, index, event_target_value(&ev));
                                                        });
                                                }
                                            />
                                            <button
                                                class="image-tile__remove"
                                                type="button"
                                                on:click=move |_| {
                                                    images.update(|list| remove_image(list, index));
                                                }
                                            >
                                                "Remove"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>

                    <button class="form-page__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Updating..." } else { "Update Project" }}
                    </button>
                </form>
            </Show>
        </div>
    }
}
