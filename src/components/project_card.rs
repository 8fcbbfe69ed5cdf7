//! Card for one project row in the projects list.

#[cfg(test)]
#[path = "project_card_test.rs"]
mod project_card_test;

use leptos::prelude::*;

use crate::net::types::Project;
use crate::util::catalog::description_preview;

const PLACEHOLDER_IMAGE: &str = "/placeholder.jpg";
const PREVIEW_CHARS: usize = 80;

fn card_image_src(project: &Project) -> String {
    match project.images.first() {
        Some(image) if !image.src().is_empty() => image.src().to_owned(),
        _ => PLACEHOLDER_IMAGE.to_owned(),
    }
}

/// A catalog card with explore, edit, and delete actions.
#[component]
pub fn ProjectCard(
    project: Project,
    on_explore: Callback<Project>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let explore_project = project.clone();
    let delete_id = project.id.clone();
    let edit_href = format!("/admin/projects/edit/{}", project.id);
    let image_src = card_image_src(&project);
    let meta = format!("{} • {}", project.category, project.year);
    let preview = description_preview(&project.description, PREVIEW_CHARS);

    view! {
        <div class="project-card">
            <div class="project-card__image">
                <img src=image_src alt=project.title.clone()/>
            </div>
            <div class="project-card__body">
                <h3 class="project-card__title">{project.title.clone()}</h3>
                <p class="project-card__meta">{meta}</p>
                <p class="project-card__preview">{preview}</p>
                <div class="project-card__actions">
                    <button
                        class="btn"
                        on:click=move |_| on_explore.run(explore_project.clone())
                    >
                        "Explore"
                    </button>
                    <div class="project-card__links">
                        <a class="project-card__edit" href=edit_href>
                            "Edit"
                        </a>
                        <button
                            class="project-card__delete"
                            on:click=move |_| on_delete.run(delete_id.clone())
                        >
                            "Delete"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
