//! Add-project form with image staging.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validation runs before any network call: a rejected submit never sends a
//! partial project. The submit button stays disabled while the create
//! request is in flight and is re-enabled on failure so the form remains
//! re-enterable.

#[cfg(test)]
#[path = "add_project_test.rs"]
mod add_project_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::toast::{ToastKind, ToastState, show_toast};
use crate::util::images::StagedImage;
#[cfg(feature = "hydrate")]
use crate::net::types::ProjectPayload;
#[cfg(feature = "hydrate")]
use crate::util::images::{MAX_IMAGES_MESSAGE, can_accept, create_payload};

fn validate_new_project(
    title: &str,
    category: &str,
    year: &str,
    location: &str,
    description: &str,
    image_count: usize,
) -> Result<i32, &'static str> {
    let fields = [title, category, year, location, description];
    if fields.iter().any(|field| field.trim().is_empty()) {
        return Err("Please fill all fields");
    }
    let Ok(year) = year.trim().parse::<i32>() else {
        return Err("Year must be a number");
    };
    if image_count == 0 {
        return Err("Please add at least one image");
    }
    Ok(year)
}

#[component]
pub fn AddProjectPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let title = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let year = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let images = RwSignal::new(Vec::<StagedImage>::new());
    let busy = RwSignal::new(false);

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
        let validated = validate_new_project(
            &title.get(),
            &category.get(),
            &year.get(),
            &location.get(),
            &description.get(),
            images.get().len(),
        );
        let year_value = match validated {
            Ok(year) => year,
            Err(message) => {
                show_toast(toasts, ToastKind::Error, message);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let payload = ProjectPayload {
                title: title.get_untracked().trim().to_owned(),
                category: category.get_untracked().trim().to_owned(),
                year: year_value,
                location: location.get_untracked().trim().to_owned(),
                description: description.get_untracked().trim().to_owned(),
                images: create_payload(&images.get_untracked()),
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::create_project(&payload).await {
                    Ok(()) => {
                        show_toast(toasts, ToastKind::Success, "Project added successfully");
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
            <h2 class="form-page__heading">"Add Project"</h2>

            <form class="form-page__form" on:submit=on_submit>
                <div class="form-page__grid">
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
                </div>

                <textarea
                    class="form-page__textarea"
                    rows="4"
                    placeholder="Project Description"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>

                <div class="form-page__files">
                    <label class="form-page__file-button">
                        "Choose Images"
                        <input type="file" multiple accept="image/*" hidden on:change=on_files/>
                    </label>
                    <p class="form-page__file-hint">"Max 5 images • JPG / PNG"</p>
                </div>

                <div class="form-page__previews">
                    {move || {
                        images
                            .get()
                            .iter()
                            .map(|image| {
                                let src = image.src().to_owned();
                                view! {
                                    <div class="image-tile">
                                        <div class="image-tile__frame">
                                            <img src=src alt="preview"/>
                                        </div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <button class="form-page__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Save Project" }}
                </button>
            </form>
        </div>
    }
}
