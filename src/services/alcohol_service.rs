//! Alcohol service - catalog business logic for the central entity.
//!
//! Field checks and referential checks share one violation list, so a
//! request with a bad type and a dangling producer reference reports
//! both at once.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{
    check_alcohol_changes, check_new_alcohol, Alcohol, AlcoholChanges, AlcoholDetails, NewAlcohol,
};
use crate::errors::{AppError, AppResult, OptionExt, Violation};
use crate::infra::{AlcoholFilter, AlcoholRepository, ImageRepository, ProducerRepository};

/// Alcohol service trait for dependency injection
#[async_trait]
pub trait AlcoholService: Send + Sync {
    /// Get one alcohol with its producer and image
    async fn get_alcohol(&self, id: Uuid) -> AppResult<AlcoholDetails>;

    /// List one page of alcohols matching the filter, with the total match count
    async fn list_alcohols(
        &self,
        filter: AlcoholFilter,
        page: u64,
        per_page: u64,
    ) -> AppResult<(Vec<AlcoholDetails>, u64)>;

    /// Validate and create an alcohol
    async fn create_alcohol(&self, input: NewAlcohol) -> AppResult<AlcoholDetails>;

    /// Validate and apply a partial update
    async fn update_alcohol(&self, id: Uuid, changes: AlcoholChanges) -> AppResult<AlcoholDetails>;

    /// Delete an alcohol and its attached image
    async fn delete_alcohol(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of AlcoholService
pub struct AlcoholManager {
    alcohols: Arc<dyn AlcoholRepository>,
    producers: Arc<dyn ProducerRepository>,
    images: Arc<dyn ImageRepository>,
}

impl AlcoholManager {
    /// Create new alcohol service instance
    pub fn new(
        alcohols: Arc<dyn AlcoholRepository>,
        producers: Arc<dyn ProducerRepository>,
        images: Arc<dyn ImageRepository>,
    ) -> Self {
        Self {
            alcohols,
            producers,
            images,
        }
    }

    /// Check that a producer reference resolves
    async fn check_producer_ref(
        &self,
        producer_id: Uuid,
        violations: &mut Vec<Violation>,
    ) -> AppResult<()> {
        if self.producers.find_by_id(producer_id).await?.is_none() {
            violations.push(Violation::new("producer", "Producer does not exist"));
        }
        Ok(())
    }

    /// Check that an image reference resolves and is not held by another alcohol
    async fn check_image_ref(
        &self,
        image_id: Uuid,
        own_id: Option<Uuid>,
        violations: &mut Vec<Violation>,
    ) -> AppResult<()> {
        if self.images.find_by_id(image_id).await?.is_none() {
            violations.push(Violation::new("image", "Image does not exist"));
            return Ok(());
        }

        if let Some(holder) = self.alcohols.find_by_image(image_id).await? {
            if Some(holder.id) != own_id {
                violations.push(Violation::new(
                    "image",
                    "Image is already attached to another alcohol",
                ));
            }
        }
        Ok(())
    }

    /// Join one alcohol with its producer and image rows
    async fn assemble(&self, alcohol: Alcohol) -> AppResult<AlcoholDetails> {
        let producer = self
            .producers
            .find_by_id(alcohol.producer_id)
            .await?
            .ok_or_else(|| {
                AppError::internal(format!(
                    "producer {} missing for alcohol {}",
                    alcohol.producer_id, alcohol.id
                ))
            })?;

        let image = match alcohol.image_id {
            Some(image_id) => self.images.find_by_id(image_id).await?,
            None => None,
        };

        Ok(AlcoholDetails {
            alcohol,
            producer,
            image,
        })
    }

    /// Join a page of alcohols with their producers and images in two queries
    async fn assemble_many(&self, alcohols: Vec<Alcohol>) -> AppResult<Vec<AlcoholDetails>> {
        let producer_ids: Vec<Uuid> = alcohols
            .iter()
            .map(|a| a.producer_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let image_ids: Vec<Uuid> = alcohols
            .iter()
            .filter_map(|a| a.image_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let producers: HashMap<Uuid, _> = self
            .producers
            .find_by_ids(producer_ids)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();
        let images: HashMap<Uuid, _> = self
            .images
            .find_by_ids(image_ids)
            .await?
            .into_iter()
            .map(|i| (i.id, i))
            .collect();

        alcohols
            .into_iter()
            .map(|alcohol| {
                let producer = producers.get(&alcohol.producer_id).cloned().ok_or_else(|| {
                    AppError::internal(format!(
                        "producer {} missing for alcohol {}",
                        alcohol.producer_id, alcohol.id
                    ))
                })?;
                let image = alcohol.image_id.and_then(|id| images.get(&id).cloned());
                Ok(AlcoholDetails {
                    alcohol,
                    producer,
                    image,
                })
            })
            .collect()
    }
}

#[async_trait]
impl AlcoholService for AlcoholManager {
    async fn get_alcohol(&self, id: Uuid) -> AppResult<AlcoholDetails> {
        let alcohol = self.alcohols.find_by_id(id).await?.ok_or_not_found()?;
        self.assemble(alcohol).await
    }

    async fn list_alcohols(
        &self,
        filter: AlcoholFilter,
        page: u64,
        per_page: u64,
    ) -> AppResult<(Vec<AlcoholDetails>, u64)> {
        let (alcohols, total) = self.alcohols.list(filter, page, per_page).await?;
        let details = self.assemble_many(alcohols).await?;
        Ok((details, total))
    }

    async fn create_alcohol(&self, input: NewAlcohol) -> AppResult<AlcoholDetails> {
        let mut violations = check_new_alcohol(&input);

        self.check_producer_ref(input.producer_id, &mut violations)
            .await?;
        if let Some(image_id) = input.image_id {
            self.check_image_ref(image_id, None, &mut violations).await?;
        }

        if !violations.is_empty() {
            return Err(AppError::Validation(violations));
        }

        let alcohol = self.alcohols.create(input).await?;
        self.assemble(alcohol).await
    }

    async fn update_alcohol(&self, id: Uuid, changes: AlcoholChanges) -> AppResult<AlcoholDetails> {
        let existing = self.alcohols.find_by_id(id).await?.ok_or_not_found()?;

        if changes.is_empty() {
            return self.assemble(existing).await;
        }

        let mut violations = check_alcohol_changes(&changes);

        if let Some(producer_id) = changes.producer_id {
            self.check_producer_ref(producer_id, &mut violations).await?;
        }
        if let Some(image_id) = changes.image_id {
            self.check_image_ref(image_id, Some(id), &mut violations)
                .await?;
        }

        if !violations.is_empty() {
            return Err(AppError::Validation(violations));
        }

        let alcohol = self.alcohols.update(id, changes).await?;
        self.assemble(alcohol).await
    }

    async fn delete_alcohol(&self, id: Uuid) -> AppResult<()> {
        self.alcohols.delete(id).await
    }
}
