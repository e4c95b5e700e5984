//! Alcohol repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{extension::postgres::PgExpr, Expr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use super::entities::alcohol::{self, ActiveModel, Entity as AlcoholEntity};
use super::entities::image::Entity as ImageEntity;
use crate::domain::{Alcohol, AlcoholChanges, AlcoholType, NewAlcohol};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Filter for alcohol listings
#[derive(Debug, Clone, Default)]
pub struct AlcoholFilter {
    /// Case-insensitive partial match on name
    pub name: Option<String>,
    /// Exact match on type; an unknown value matches no rows
    pub kind: Option<String>,
}

/// Alcohol repository trait for dependency injection
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AlcoholRepository: Send + Sync {
    /// Find alcohol by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Alcohol>>;

    /// List one page of alcohols matching the filter, with the total match count
    async fn list(
        &self,
        filter: AlcoholFilter,
        page: u64,
        per_page: u64,
    ) -> AppResult<(Vec<Alcohol>, u64)>;

    /// Find all alcohols referencing a producer
    async fn find_by_producer(&self, producer_id: Uuid) -> AppResult<Vec<Alcohol>>;

    /// Find the alcohol holding a given image, if any
    async fn find_by_image(&self, image_id: Uuid) -> AppResult<Option<Alcohol>>;

    /// Insert a new alcohol, stamping `date_created`
    async fn create(&self, input: NewAlcohol) -> AppResult<Alcohol>;

    /// Apply changes to an alcohol, stamping `date_edited`
    async fn update(&self, id: Uuid, changes: AlcoholChanges) -> AppResult<Alcohol>;

    /// Delete an alcohol together with its attached image
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Escape LIKE wildcards in user-supplied match text
fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

fn parse_kind(value: &str) -> AppResult<AlcoholType> {
    AlcoholType::parse(value).ok_or_else(|| {
        AppError::validation(
            "type",
            format!("Type must be one of: {}", AlcoholType::accepted_values()),
        )
    })
}

/// Concrete implementation of AlcoholRepository
pub struct AlcoholStore {
    db: DatabaseConnection,
}

impl AlcoholStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AlcoholRepository for AlcoholStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Alcohol>> {
        let result = AlcoholEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result.map(Alcohol::try_from).transpose()
    }

    async fn list(
        &self,
        filter: AlcoholFilter,
        page: u64,
        per_page: u64,
    ) -> AppResult<(Vec<Alcohol>, u64)> {
        let mut query = AlcoholEntity::find()
            .order_by_asc(alcohol::Column::DateCreated)
            .order_by_asc(alcohol::Column::Id);

        if let Some(name) = &filter.name {
            let pattern = format!("%{}%", escape_like(name));
            query = query.filter(Expr::col(alcohol::Column::Name).ilike(pattern));
        }
        if let Some(kind) = &filter.kind {
            query = query.filter(alcohol::Column::Kind.eq(kind.as_str()));
        }

        let paginator = query.paginate(&self.db, per_page.max(1));
        let total = paginator.num_items().await.map_err(AppError::from)?;
        let models = paginator
            .fetch_page(page.saturating_sub(1))
            .await
            .map_err(AppError::from)?;

        let alcohols = models
            .into_iter()
            .map(Alcohol::try_from)
            .collect::<AppResult<Vec<_>>>()?;

        Ok((alcohols, total))
    }

    async fn find_by_producer(&self, producer_id: Uuid) -> AppResult<Vec<Alcohol>> {
        let models = AlcoholEntity::find()
            .filter(alcohol::Column::ProducerId.eq(producer_id))
            .order_by_asc(alcohol::Column::DateCreated)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        models.into_iter().map(Alcohol::try_from).collect()
    }

    async fn find_by_image(&self, image_id: Uuid) -> AppResult<Option<Alcohol>> {
        let result = AlcoholEntity::find()
            .filter(alcohol::Column::ImageId.eq(image_id))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result.map(Alcohol::try_from).transpose()
    }

    async fn create(&self, input: NewAlcohol) -> AppResult<Alcohol> {
        let kind = parse_kind(&input.kind)?;

        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            kind: Set(kind.as_str().to_string()),
            description: Set(input.description),
            producer_id: Set(input.producer_id),
            abv: Set(input.abv),
            image_id: Set(input.image_id),
            date_created: Set(Utc::now()),
            date_edited: Set(None),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Alcohol::try_from(model)
    }

    async fn update(&self, id: Uuid, changes: AlcoholChanges) -> AppResult<Alcohol> {
        let model = AlcoholEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = model.into();

        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(kind) = changes.kind {
            active.kind = Set(parse_kind(&kind)?.as_str().to_string());
        }
        if let Some(description) = changes.description {
            active.description = Set(Some(description));
        }
        if let Some(producer_id) = changes.producer_id {
            active.producer_id = Set(producer_id);
        }
        if let Some(abv) = changes.abv {
            active.abv = Set(abv);
        }
        if let Some(image_id) = changes.image_id {
            active.image_id = Set(Some(image_id));
        }
        active.date_edited = Set(Some(Utc::now()));

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Alcohol::try_from(model)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        // The attached image is owned exclusively by this alcohol, so it
        // goes away in the same transaction.
        let txn = self.db.begin().await.map_err(AppError::from)?;

        let model = AlcoholEntity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(AppError::NotFound)?;
        let image_id = model.image_id;

        AlcoholEntity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(AppError::from)?;

        if let Some(image_id) = image_id {
            ImageEntity::delete_by_id(image_id)
                .exec(&txn)
                .await
                .map_err(AppError::from)?;
        }

        txn.commit().await.map_err(AppError::from)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};

    use super::*;

    fn whiskey_model(id: Uuid) -> alcohol::Model {
        alcohol::Model {
            id,
            name: "Jameson".to_string(),
            kind: "whiskey".to_string(),
            description: Some("Tennessee whiskey".to_string()),
            producer_id: Uuid::new_v4(),
            abv: 37.5,
            image_id: None,
            date_created: Utc::now(),
            date_edited: None,
        }
    }

    #[test]
    fn escape_like_neutralizes_wildcards() {
        assert_eq!(escape_like("10%_abv"), "10\\%\\_abv");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[tokio::test]
    async fn find_by_id_maps_row_to_domain() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![whiskey_model(id)]])
            .into_connection();

        let store = AlcoholStore::new(db);
        let alcohol = store.find_by_id(id).await.unwrap().unwrap();

        assert_eq!(alcohol.id, id);
        assert_eq!(alcohol.kind, AlcoholType::Whiskey);
        assert_eq!(alcohol.abv, 37.5);
    }

    #[tokio::test]
    async fn find_by_id_misses_cleanly() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<alcohol::Model>::new()])
            .into_connection();

        let store = AlcoholStore::new(db);
        assert!(store.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn corrupt_type_column_is_an_error_not_a_guess() {
        let mut model = whiskey_model(Uuid::new_v4());
        model.kind = "juice".to_string();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model]])
            .into_connection();

        let store = AlcoholStore::new(db);
        let result = store.find_by_id(Uuid::new_v4()).await;
        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn list_returns_rows_and_total() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![BTreeMap::from([(
                "num_items",
                Value::BigInt(Some(50)),
            )])]])
            .append_query_results([vec![
                whiskey_model(Uuid::new_v4()),
                whiskey_model(Uuid::new_v4()),
            ]])
            .into_connection();

        let store = AlcoholStore::new(db);
        let (alcohols, total) = store
            .list(AlcoholFilter::default(), 1, 20)
            .await
            .unwrap();

        assert_eq!(alcohols.len(), 2);
        assert_eq!(total, 50);
    }

    #[tokio::test]
    async fn create_rejects_unknown_type_before_touching_the_database() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let store = AlcoholStore::new(db);

        let result = store
            .create(NewAlcohol {
                name: "Mystery".to_string(),
                kind: "juice".to_string(),
                description: None,
                producer_id: Uuid::new_v4(),
                abv: 10.0,
                image_id: None,
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn delete_removes_attached_image_in_same_transaction() {
        let id = Uuid::new_v4();
        let mut model = whiskey_model(id);
        model.image_id = Some(Uuid::new_v4());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model]])
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
            ])
            .into_connection();

        let store = AlcoholStore::new(db);
        assert!(store.delete(id).await.is_ok());
    }
}
