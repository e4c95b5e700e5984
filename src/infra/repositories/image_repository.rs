//! Image repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::image::{self, ActiveModel, Entity as ImageEntity};
use crate::domain::{Image, ImageChanges, NewImage};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Image repository trait for dependency injection
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ImageRepository: Send + Sync {
    /// Find image by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Image>>;

    /// Find all images in the given ID set
    async fn find_by_ids(&self, ids: Vec<Uuid>) -> AppResult<Vec<Image>>;

    /// List one page of images, with the total count
    async fn list(&self, page: u64, per_page: u64) -> AppResult<(Vec<Image>, u64)>;

    /// Insert a new image
    async fn create(&self, input: NewImage) -> AppResult<Image>;

    /// Apply changes to an image
    async fn update(&self, id: Uuid, changes: ImageChanges) -> AppResult<Image>;

    /// Delete an image
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of ImageRepository
pub struct ImageStore {
    db: DatabaseConnection,
}

impl ImageStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ImageRepository for ImageStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Image>> {
        let result = ImageEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Image::from))
    }

    async fn find_by_ids(&self, ids: Vec<Uuid>) -> AppResult<Vec<Image>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = ImageEntity::find()
            .filter(image::Column::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Image::from).collect())
    }

    async fn list(&self, page: u64, per_page: u64) -> AppResult<(Vec<Image>, u64)> {
        let paginator = ImageEntity::find()
            .order_by_asc(image::Column::Name)
            .paginate(&self.db, per_page.max(1));

        let total = paginator.num_items().await.map_err(AppError::from)?;
        let models = paginator
            .fetch_page(page.saturating_sub(1))
            .await
            .map_err(AppError::from)?;

        Ok((models.into_iter().map(Image::from).collect(), total))
    }

    async fn create(&self, input: NewImage) -> AppResult<Image> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            url: Set(input.url),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Image::from(model))
    }

    async fn update(&self, id: Uuid, changes: ImageChanges) -> AppResult<Image> {
        let model = ImageEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = model.into();

        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(url) = changes.url {
            active.url = Set(url);
        }

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Image::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = ImageEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
