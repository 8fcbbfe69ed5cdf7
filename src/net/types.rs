//! Wire DTOs for the catalog REST backend.
//!
//! DESIGN
//! ======
//! These types mirror the backend's document schema so serde round-trips
//! stay lossless. Image entries carry either a stored `url` or a freshly
//! staged `base64` data URL; absent halves are omitted from payloads so the
//! backend can tell stored images from new uploads.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A catalog entry as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Backend-assigned document identifier.
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<ProjectImage>,
}

/// One image attached to a project.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectImage {
    /// Stored location of an already-uploaded image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Data URL of a newly staged image awaiting upload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base64: Option<String>,
    #[serde(default)]
    pub caption: String,
}

impl ProjectImage {
    /// Renderable `src`: the stored URL when present, else the staged data
    /// URL.
    pub fn src(&self) -> &str {
        self.url.as_deref().or(self.base64.as_deref()).unwrap_or("")
    }
}

/// Body for `POST /api/projects` and `PUT /api/projects/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPayload {
    pub title: String,
    pub category: String,
    pub year: i32,
    pub location: String,
    pub description: String,
    pub images: Vec<ProjectImage>,
}
