//! Image staging for the project create/edit forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Selected files are read into base64 data URLs before submit; the data
//! URL doubles as the preview `src`. Images loaded from an existing project
//! keep their stored URL instead. The cap is enforced before any file is
//! read so an oversized selection never partially stages.

#[cfg(test)]
#[path = "images_test.rs"]
mod images_test;

use crate::net::types::ProjectImage;

/// Upper bound on images per project.
pub const MAX_IMAGES: usize = 5;
/// Message shown when a selection would exceed [`MAX_IMAGES`].
pub const MAX_IMAGES_MESSAGE: &str = "Maximum 5 images allowed";
/// Caption applied on create when the user left one empty.
pub const DEFAULT_CAPTION: &str = "Project Image";

/// An image attached to the form: either already stored (`url`) or freshly
/// read from disk (`base64` data URL).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StagedImage {
    pub url: Option<String>,
    pub base64: Option<String>,
    pub caption: String,
}

impl StagedImage {
    pub fn from_data_url(data_url: impl Into<String>) -> Self {
        Self {
            url: None,
            base64: Some(data_url.into()),
            caption: String::new(),
        }
    }

    /// Preview `src`: the stored URL when present, else the staged data URL.
    pub fn src(&self) -> &str {
        self.url.as_deref().or(self.base64.as_deref()).unwrap_or("")
    }
}

/// Whether `incoming` more images fit under the cap.
pub fn can_accept(staged: usize, incoming: usize) -> bool {
    staged + incoming <= MAX_IMAGES
}

/// Non-empty caption, or the default label.
pub fn caption_or_default(caption: &str) -> String {
    let trimmed = caption.trim();
    if trimmed.is_empty() {
        DEFAULT_CAPTION.to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Payload for the create form: empty captions fall back to the default.
pub fn create_payload(images: &[StagedImage]) -> Vec<ProjectImage> {
    images
        .iter()
        .map(|img| ProjectImage {
            url: img.url.clone(),
            base64: img.base64.clone(),
            caption: caption_or_default(&img.caption),
        })
        .collect()
}

/// Payload for the edit form: captions pass through exactly as typed.
pub fn edit_payload(images: &[StagedImage]) -> Vec<ProjectImage> {
    images
        .iter()
        .map(|img| ProjectImage {
            url: img.url.clone(),
            base64: img.base64.clone(),
            caption: img.caption.clone(),
        })
        .collect()
}

/// Remove the image at `index`; out-of-range indices are ignored.
pub fn remove_image(images: &mut Vec<StagedImage>, index: usize) {
    if index < images.len() {
        images.remove(index);
    }
}

/// Update one image's caption; out-of-range indices are ignored.
pub fn set_caption(images: &mut [StagedImage], index: usize, caption: String) {
    if let Some(image) = images.get_mut(index) {
        image.caption = caption;
    }
}

/// Read every file in the selection as a base64 data URL.
///
/// Files that fail to read are skipped and logged rather than aborting the
/// whole selection.
#[cfg(feature = "hydrate")]
pub async fn stage_files(files: web_sys::FileList) -> Vec<StagedImage> {
    let mut staged = Vec::new();
    for index in 0..files.length() {
        let Some(file) = files.item(index) else {
            continue;
        };
        let file = gloo_file::File::from(file);
        match gloo_file::futures::read_as_data_url(&file).await {
            Ok(data_url) => staged.push(StagedImage::from_data_url(data_url)),
            Err(e) => log::error!("failed to read image file: {e}"),
        }
    }
    staged
}
