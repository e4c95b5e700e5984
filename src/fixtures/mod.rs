//! Seed data loading.
//!
//! `cellar fixtures load` fills the catalog with a known record set so
//! local development and the API tests have stable data to run against.

pub mod data;

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, TransactionTrait};
use uuid::Uuid;

use crate::domain::{check_new_user, NewUser, Password};
use crate::errors::{AppError, AppResult, Violation};
use crate::infra::repositories::entities::{alcohol, image, producer, user};

/// Row counts inserted by a fixture run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub producers: usize,
    pub images: usize,
    pub alcohols: usize,
    pub users: usize,
}

/// Loads the seed catalog into the database
pub struct FixtureLoader {
    db: DatabaseConnection,
}

impl FixtureLoader {
    /// Create new loader instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Load the seed catalog.
    ///
    /// Unless `append` is set, existing rows are purged first. The whole
    /// run happens in one transaction, so a failure part way through
    /// leaves the database untouched.
    pub async fn load(&self, append: bool) -> AppResult<LoadSummary> {
        check_user_fixtures()?;

        let txn = self.db.begin().await?;

        if !append {
            // Delete order follows the foreign keys
            alcohol::Entity::delete_many().exec(&txn).await?;
            image::Entity::delete_many().exec(&txn).await?;
            user::Entity::delete_many().exec(&txn).await?;
            producer::Entity::delete_many().exec(&txn).await?;
        }

        let mut summary = LoadSummary {
            producers: 0,
            images: 0,
            alcohols: 0,
            users: 0,
        };

        let mut producer_ids: HashMap<&str, Uuid> = HashMap::new();
        for seed in &data::PRODUCERS {
            let id = Uuid::new_v4();
            producer::ActiveModel {
                id: Set(id),
                name: Set(seed.name.to_string()),
                country: Set(seed.country.to_string()),
            }
            .insert(&txn)
            .await?;

            producer_ids.insert(seed.name, id);
            summary.producers += 1;
        }

        for seed in &data::ALCOHOLS {
            let producer_id = *producer_ids.get(seed.producer).ok_or_else(|| {
                AppError::internal(format!(
                    "fixture references unknown producer {}",
                    seed.producer
                ))
            })?;

            let image_id = match seed.image {
                Some(name) => {
                    let id = Uuid::new_v4();
                    image::ActiveModel {
                        id: Set(id),
                        name: Set(name.to_string()),
                        url: Set(data::image_url(name)),
                    }
                    .insert(&txn)
                    .await?;

                    summary.images += 1;
                    Some(id)
                }
                None => None,
            };

            alcohol::ActiveModel {
                id: Set(Uuid::new_v4()),
                name: Set(seed.name.to_string()),
                kind: Set(seed.kind.as_str().to_string()),
                description: Set(seed.description.map(str::to_string)),
                producer_id: Set(producer_id),
                abv: Set(seed.abv),
                image_id: Set(image_id),
                date_created: Set(Utc::now()),
                date_edited: Set(None),
            }
            .insert(&txn)
            .await?;

            summary.alcohols += 1;
        }

        for seed in &data::USERS {
            let hash = Password::new(seed.password)?.into_string();
            user::ActiveModel {
                id: Set(Uuid::new_v4()),
                email: Set(seed.email.to_string()),
                password_hash: Set(hash),
                roles: Set(serde_json::json!([seed.role])),
                created_at: Set(Utc::now()),
            }
            .insert(&txn)
            .await?;

            summary.users += 1;
        }

        txn.commit().await?;
        Ok(summary)
    }
}

/// Run every user fixture through the production validator; any violation
/// aborts the batch before a single row is written
fn check_user_fixtures() -> AppResult<()> {
    let mut violations = Vec::new();
    for (index, seed) in data::USERS.iter().enumerate() {
        let input = NewUser {
            email: seed.email.to_string(),
            password: seed.password.to_string(),
            role: seed.role.to_string(),
        };
        for violation in check_new_user(&input) {
            violations.push(Violation::new(
                format!("users[{index}].{}", violation.field),
                violation.message,
            ));
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(violations))
    }
}
