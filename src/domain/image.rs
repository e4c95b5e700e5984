//! Image domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::Violation;

/// Image domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub id: Uuid,
    pub name: String,
    pub url: String,
}

/// Input for creating an image
#[derive(Debug, Clone)]
pub struct NewImage {
    pub name: String,
    pub url: String,
}

/// Partial update for an image. `None` means "leave unchanged".
#[derive(Debug, Clone, Default)]
pub struct ImageChanges {
    pub name: Option<String>,
    pub url: Option<String>,
}

/// Collect every field violation on a create input.
pub fn check_new_image(input: &NewImage) -> Vec<Violation> {
    let mut violations = Vec::new();
    if input.name.trim().is_empty() {
        violations.push(Violation::new("name", "Name must not be empty"));
    }
    if input.url.trim().is_empty() {
        violations.push(Violation::new("url", "Url must not be empty"));
    }
    violations
}

/// Collect every field violation on an update, checking only present fields.
pub fn check_image_changes(changes: &ImageChanges) -> Vec<Violation> {
    let mut violations = Vec::new();
    if let Some(name) = &changes.name {
        if name.trim().is_empty() {
            violations.push(Violation::new("name", "Name must not be empty"));
        }
    }
    if let Some(url) = &changes.url {
        if url.trim().is_empty() {
            violations.push(Violation::new("url", "Url must not be empty"));
        }
    }
    violations
}

/// Image response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ImageResponse {
    /// Unique image identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// Display name
    #[schema(example = "Jameson")]
    pub name: String,
    /// Publicly reachable location
    #[schema(example = "https://cdn.cellar.dev/images/jameson.png")]
    pub url: String,
}

impl From<Image> for ImageResponse {
    fn from(image: Image) -> Self {
        Self {
            id: image.id,
            name: image.name,
            url: image.url,
        }
    }
}
