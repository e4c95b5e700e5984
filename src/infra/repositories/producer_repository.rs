//! Producer repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::producer::{self, ActiveModel, Entity as ProducerEntity};
use crate::domain::{NewProducer, Producer, ProducerChanges};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Producer repository trait for dependency injection
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProducerRepository: Send + Sync {
    /// Find producer by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Producer>>;

    /// Find all producers in the given ID set
    async fn find_by_ids(&self, ids: Vec<Uuid>) -> AppResult<Vec<Producer>>;

    /// List one page of producers, with the total count
    async fn list(&self, page: u64, per_page: u64) -> AppResult<(Vec<Producer>, u64)>;

    /// Insert a new producer
    async fn create(&self, input: NewProducer) -> AppResult<Producer>;

    /// Apply changes to a producer
    async fn update(&self, id: Uuid, changes: ProducerChanges) -> AppResult<Producer>;

    /// Delete a producer
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of ProducerRepository
pub struct ProducerStore {
    db: DatabaseConnection,
}

impl ProducerStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProducerRepository for ProducerStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Producer>> {
        let result = ProducerEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Producer::from))
    }

    async fn find_by_ids(&self, ids: Vec<Uuid>) -> AppResult<Vec<Producer>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = ProducerEntity::find()
            .filter(producer::Column::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Producer::from).collect())
    }

    async fn list(&self, page: u64, per_page: u64) -> AppResult<(Vec<Producer>, u64)> {
        let paginator = ProducerEntity::find()
            .order_by_asc(producer::Column::Name)
            .paginate(&self.db, per_page.max(1));

        let total = paginator.num_items().await.map_err(AppError::from)?;
        let models = paginator
            .fetch_page(page.saturating_sub(1))
            .await
            .map_err(AppError::from)?;

        Ok((models.into_iter().map(Producer::from).collect(), total))
    }

    async fn create(&self, input: NewProducer) -> AppResult<Producer> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            country: Set(input.country),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Producer::from(model))
    }

    async fn update(&self, id: Uuid, changes: ProducerChanges) -> AppResult<Producer> {
        let model = ProducerEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = model.into();

        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(country) = changes.country {
            active.country = Set(country);
        }

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Producer::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = ProducerEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
