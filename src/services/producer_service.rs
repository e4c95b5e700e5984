//! Producer service - business logic for producing companies.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{check_new_producer, check_producer_changes, NewProducer, Producer, ProducerChanges};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{AlcoholRepository, ProducerRepository};

/// Producer service trait for dependency injection
#[async_trait]
pub trait ProducerService: Send + Sync {
    /// Get one producer
    async fn get_producer(&self, id: Uuid) -> AppResult<Producer>;

    /// List one page of producers, with the total count
    async fn list_producers(&self, page: u64, per_page: u64) -> AppResult<(Vec<Producer>, u64)>;

    /// Validate and create a producer
    async fn create_producer(&self, input: NewProducer) -> AppResult<Producer>;

    /// Validate and apply a partial update
    async fn update_producer(&self, id: Uuid, changes: ProducerChanges) -> AppResult<Producer>;

    /// Delete a producer that no alcohol references
    async fn delete_producer(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of ProducerService
pub struct ProducerManager {
    producers: Arc<dyn ProducerRepository>,
    alcohols: Arc<dyn AlcoholRepository>,
}

impl ProducerManager {
    /// Create new producer service instance
    pub fn new(producers: Arc<dyn ProducerRepository>, alcohols: Arc<dyn AlcoholRepository>) -> Self {
        Self { producers, alcohols }
    }
}

#[async_trait]
impl ProducerService for ProducerManager {
    async fn get_producer(&self, id: Uuid) -> AppResult<Producer> {
        self.producers.find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_producers(&self, page: u64, per_page: u64) -> AppResult<(Vec<Producer>, u64)> {
        self.producers.list(page, per_page).await
    }

    async fn create_producer(&self, input: NewProducer) -> AppResult<Producer> {
        let violations = check_new_producer(&input);
        if !violations.is_empty() {
            return Err(AppError::Validation(violations));
        }

        self.producers.create(input).await
    }

    async fn update_producer(&self, id: Uuid, changes: ProducerChanges) -> AppResult<Producer> {
        self.producers.find_by_id(id).await?.ok_or_not_found()?;

        let violations = check_producer_changes(&changes);
        if !violations.is_empty() {
            return Err(AppError::Validation(violations));
        }

        self.producers.update(id, changes).await
    }

    async fn delete_producer(&self, id: Uuid) -> AppResult<()> {
        self.producers.find_by_id(id).await?.ok_or_not_found()?;

        // Alcohols keep a required reference to their producer, so a
        // referenced producer cannot be removed.
        let referencing = self.alcohols.find_by_producer(id).await?;
        if !referencing.is_empty() {
            return Err(AppError::conflict(
                "Producer has associated alcohols and cannot be deleted",
            ));
        }

        self.producers.delete(id).await
    }
}
