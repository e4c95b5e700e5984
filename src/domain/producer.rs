//! Producer domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::Violation;

/// Producer domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Producer {
    pub id: Uuid,
    pub name: String,
    pub country: String,
}

/// Input for creating a producer
#[derive(Debug, Clone)]
pub struct NewProducer {
    pub name: String,
    pub country: String,
}

/// Partial update for a producer. `None` means "leave unchanged".
#[derive(Debug, Clone, Default)]
pub struct ProducerChanges {
    pub name: Option<String>,
    pub country: Option<String>,
}

/// Collect every field violation on a create input.
pub fn check_new_producer(input: &NewProducer) -> Vec<Violation> {
    let mut violations = Vec::new();
    if input.name.trim().is_empty() {
        violations.push(Violation::new("name", "Name must not be empty"));
    }
    if input.country.trim().is_empty() {
        violations.push(Violation::new("country", "Country must not be empty"));
    }
    violations
}

/// Collect every field violation on an update, checking only present fields.
pub fn check_producer_changes(changes: &ProducerChanges) -> Vec<Violation> {
    let mut violations = Vec::new();
    if let Some(name) = &changes.name {
        if name.trim().is_empty() {
            violations.push(Violation::new("name", "Name must not be empty"));
        }
    }
    if let Some(country) = &changes.country {
        if country.trim().is_empty() {
            violations.push(Violation::new("country", "Country must not be empty"));
        }
    }
    violations
}

/// Producer response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProducerResponse {
    /// Unique producer identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// Company name
    #[schema(example = "Bacardi")]
    pub name: String,
    /// Country of origin
    #[schema(example = "Cuba")]
    pub country: String,
}

impl From<Producer> for ProducerResponse {
    fn from(producer: Producer) -> Self {
        Self {
            id: producer.id,
            name: producer.name,
            country: producer.country,
        }
    }
}
