//! Alcohol domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{MAX_ABV, MIN_ABV};
use crate::domain::image::{Image, ImageResponse};
use crate::domain::producer::{Producer, ProducerResponse};
use crate::errors::Violation;

/// Alcohol type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AlcoholType {
    Vodka,
    Beer,
    Whiskey,
    Wine,
    Rum,
}

impl AlcoholType {
    /// All known types, in display order
    pub const ALL: [AlcoholType; 5] = [
        AlcoholType::Vodka,
        AlcoholType::Beer,
        AlcoholType::Whiskey,
        AlcoholType::Wine,
        AlcoholType::Rum,
    ];

    /// Parse a raw type string; unknown values are rejected, never defaulted
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "vodka" => Some(AlcoholType::Vodka),
            "beer" => Some(AlcoholType::Beer),
            "whiskey" => Some(AlcoholType::Whiskey),
            "wine" => Some(AlcoholType::Wine),
            "rum" => Some(AlcoholType::Rum),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlcoholType::Vodka => "vodka",
            AlcoholType::Beer => "beer",
            AlcoholType::Whiskey => "whiskey",
            AlcoholType::Wine => "wine",
            AlcoholType::Rum => "rum",
        }
    }

    /// Comma-separated list of accepted values, for violation messages
    pub fn accepted_values() -> String {
        Self::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for AlcoholType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Alcohol domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alcohol {
    pub id: Uuid,
    pub name: String,
    pub kind: AlcoholType,
    pub description: Option<String>,
    pub producer_id: Uuid,
    pub abv: f64,
    pub image_id: Option<Uuid>,
    pub date_created: DateTime<Utc>,
    pub date_edited: Option<DateTime<Utc>>,
}

/// Input for creating an alcohol.
///
/// `kind` stays a raw string here so an unknown type surfaces as a
/// field violation instead of a deserialization failure.
#[derive(Debug, Clone)]
pub struct NewAlcohol {
    pub name: String,
    pub kind: String,
    pub description: Option<String>,
    pub producer_id: Uuid,
    pub abv: f64,
    pub image_id: Option<Uuid>,
}

/// Partial update for an alcohol. `None` means "leave unchanged".
#[derive(Debug, Clone, Default)]
pub struct AlcoholChanges {
    pub name: Option<String>,
    pub kind: Option<String>,
    pub description: Option<String>,
    pub producer_id: Option<Uuid>,
    pub abv: Option<f64>,
    pub image_id: Option<Uuid>,
}

impl AlcoholChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.kind.is_none()
            && self.description.is_none()
            && self.producer_id.is_none()
            && self.abv.is_none()
            && self.image_id.is_none()
    }
}

fn check_name(name: &str, violations: &mut Vec<Violation>) {
    if name.trim().is_empty() {
        violations.push(Violation::new("name", "Name must not be empty"));
    }
}

fn check_kind(kind: &str, violations: &mut Vec<Violation>) {
    if AlcoholType::parse(kind).is_none() {
        violations.push(Violation::new(
            "type",
            format!("Type must be one of: {}", AlcoholType::accepted_values()),
        ));
    }
}

fn check_abv(abv: f64, violations: &mut Vec<Violation>) {
    if !abv.is_finite() || !(MIN_ABV..=MAX_ABV).contains(&abv) {
        violations.push(Violation::new(
            "abv",
            format!("Abv must be between {} and {}", MIN_ABV, MAX_ABV),
        ));
    }
}

/// Collect every field violation on a create input.
pub fn check_new_alcohol(input: &NewAlcohol) -> Vec<Violation> {
    let mut violations = Vec::new();
    check_name(&input.name, &mut violations);
    check_kind(&input.kind, &mut violations);
    check_abv(input.abv, &mut violations);
    violations
}

/// Collect every field violation on an update, checking only present fields.
pub fn check_alcohol_changes(changes: &AlcoholChanges) -> Vec<Violation> {
    let mut violations = Vec::new();
    if let Some(name) = &changes.name {
        check_name(name, &mut violations);
    }
    if let Some(kind) = &changes.kind {
        check_kind(kind, &mut violations);
    }
    if let Some(abv) = changes.abv {
        check_abv(abv, &mut violations);
    }
    violations
}

/// An alcohol joined with its related producer and image rows
#[derive(Debug, Clone)]
pub struct AlcoholDetails {
    pub alcohol: Alcohol,
    pub producer: Producer,
    pub image: Option<Image>,
}

/// Alcohol response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AlcoholResponse {
    /// Unique alcohol identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// Display name
    #[schema(example = "Jameson")]
    pub name: String,
    /// Alcohol type
    #[serde(rename = "type")]
    #[schema(example = "whiskey")]
    pub kind: AlcoholType,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Tennessee whiskey")]
    pub description: Option<String>,
    /// Producing company
    pub producer: ProducerResponse,
    /// Alcohol by volume, percent
    #[schema(example = 37.5)]
    pub abv: f64,
    /// Attached label image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageResponse>,
    /// Record creation timestamp
    pub date_created: DateTime<Utc>,
    /// Last modification timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_edited: Option<DateTime<Utc>>,
}

impl From<AlcoholDetails> for AlcoholResponse {
    fn from(details: AlcoholDetails) -> Self {
        Self {
            id: details.alcohol.id,
            name: details.alcohol.name,
            kind: details.alcohol.kind,
            description: details.alcohol.description,
            producer: details.producer.into(),
            abv: details.alcohol.abv,
            image: details.image.map(Into::into),
            date_created: details.alcohol.date_created,
            date_edited: details.alcohol.date_edited,
        }
    }
}
