//! Image service - business logic for label images.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{check_image_changes, check_new_image, Image, ImageChanges, NewImage};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{AlcoholRepository, ImageRepository};

/// Image service trait for dependency injection
#[async_trait]
pub trait ImageService: Send + Sync {
    /// Get one image
    async fn get_image(&self, id: Uuid) -> AppResult<Image>;

    /// List one page of images, with the total count
    async fn list_images(&self, page: u64, per_page: u64) -> AppResult<(Vec<Image>, u64)>;

    /// Validate and create an image
    async fn create_image(&self, input: NewImage) -> AppResult<Image>;

    /// Validate and apply a partial update
    async fn update_image(&self, id: Uuid, changes: ImageChanges) -> AppResult<Image>;

    /// Delete an image that no alcohol holds
    async fn delete_image(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of ImageService
pub struct ImageManager {
    images: Arc<dyn ImageRepository>,
    alcohols: Arc<dyn AlcoholRepository>,
}

impl ImageManager {
    /// Create new image service instance
    pub fn new(images: Arc<dyn ImageRepository>, alcohols: Arc<dyn AlcoholRepository>) -> Self {
        Self { images, alcohols }
    }
}

#[async_trait]
impl ImageService for ImageManager {
    async fn get_image(&self, id: Uuid) -> AppResult<Image> {
        self.images.find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_images(&self, page: u64, per_page: u64) -> AppResult<(Vec<Image>, u64)> {
        self.images.list(page, per_page).await
    }

    async fn create_image(&self, input: NewImage) -> AppResult<Image> {
        let violations = check_new_image(&input);
        if !violations.is_empty() {
            return Err(AppError::Validation(violations));
        }

        self.images.create(input).await
    }

    async fn update_image(&self, id: Uuid, changes: ImageChanges) -> AppResult<Image> {
        self.images.find_by_id(id).await?.ok_or_not_found()?;

        let violations = check_image_changes(&changes);
        if !violations.is_empty() {
            return Err(AppError::Validation(violations));
        }

        self.images.update(id, changes).await
    }

    async fn delete_image(&self, id: Uuid) -> AppResult<()> {
        self.images.find_by_id(id).await?.ok_or_not_found()?;

        // An image attached to an alcohol is deleted together with it,
        // never on its own.
        if self.alcohols.find_by_image(id).await?.is_some() {
            return Err(AppError::conflict(
                "Image is attached to an alcohol and cannot be deleted",
            ));
        }

        self.images.delete(id).await
    }
}
