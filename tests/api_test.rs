//! Integration tests for API endpoints.
//!
//! These tests drive the real router through mock services, so routing,
//! extractors, the auth middleware, and error mapping are all exercised
//! without a database.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::Utc;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use cellar::domain::{
    check_alcohol_changes, check_new_alcohol, Alcohol, AlcoholChanges, AlcoholDetails, AlcoholType,
    Image, ImageChanges, NewAlcohol, NewImage, NewProducer, Producer, ProducerChanges,
};
use cellar::errors::{AppError, AppResult};
use cellar::fixtures::data;
use cellar::infra::AlcoholFilter;
use cellar::services::{
    AlcoholService, AuthService, Claims, ImageService, ProducerService, TokenResponse,
};
use cellar::{api::create_router, AppState};

const VALID_TOKEN: &str = "valid-test-token";

// =============================================================================
// Mock Services
// =============================================================================

/// Auth service with one known credential pair and one accepted token
struct StaticAuthService;

#[async_trait]
impl AuthService for StaticAuthService {
    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse> {
        if email == "krum@codixis.com" && password == "aBcd@5678yilnjvgtiuh" {
            Ok(TokenResponse {
                token: VALID_TOKEN.to_string(),
            })
        } else {
            Err(AppError::InvalidCredentials)
        }
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        if token == VALID_TOKEN {
            Ok(Claims {
                sub: Uuid::new_v4(),
                email: "krum@codixis.com".to_string(),
                roles: vec!["admin".to_string()],
                exp: Utc::now().timestamp() + 3600,
                iat: Utc::now().timestamp(),
            })
        } else {
            Err(AppError::Jwt(
                jsonwebtoken::errors::ErrorKind::InvalidToken.into(),
            ))
        }
    }
}

/// Alcohol service over the seed catalog held in memory.
///
/// Reads behave like the real service; writes count invocations so tests
/// can prove the auth middleware rejected a request before any service ran.
struct InMemoryCatalog {
    records: Mutex<Vec<AlcoholDetails>>,
    writes: AtomicUsize,
}

impl InMemoryCatalog {
    fn from_seed() -> Self {
        let producers: Vec<Producer> = data::PRODUCERS
            .iter()
            .map(|seed| Producer {
                id: Uuid::new_v4(),
                name: seed.name.to_string(),
                country: seed.country.to_string(),
            })
            .collect();

        let records = data::ALCOHOLS
            .iter()
            .map(|seed| {
                let producer = producers
                    .iter()
                    .find(|p| p.name == seed.producer)
                    .expect("seed producer")
                    .clone();
                let image = seed.image.map(|name| Image {
                    id: Uuid::new_v4(),
                    name: name.to_string(),
                    url: data::image_url(name),
                });
                AlcoholDetails {
                    alcohol: Alcohol {
                        id: Uuid::new_v4(),
                        name: seed.name.to_string(),
                        kind: seed.kind,
                        description: seed.description.map(str::to_string),
                        producer_id: producer.id,
                        abv: seed.abv,
                        image_id: image.as_ref().map(|i| i.id),
                        date_created: Utc::now(),
                        date_edited: None,
                    },
                    producer,
                    image,
                }
            })
            .collect();

        Self {
            records: Mutex::new(records),
            writes: AtomicUsize::new(0),
        }
    }

    fn id_of(&self, name: &str) -> Uuid {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.alcohol.name == name)
            .map(|d| d.alcohol.id)
            .expect("record by name")
    }

    fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AlcoholService for InMemoryCatalog {
    async fn get_alcohol(&self, id: Uuid) -> AppResult<AlcoholDetails> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.alcohol.id == id)
            .cloned()
            .ok_or(AppError::NotFound)
    }

    async fn list_alcohols(
        &self,
        filter: AlcoholFilter,
        page: u64,
        per_page: u64,
    ) -> AppResult<(Vec<AlcoholDetails>, u64)> {
        let records = self.records.lock().unwrap();
        let matches: Vec<AlcoholDetails> = records
            .iter()
            .filter(|d| {
                filter
                    .name
                    .as_ref()
                    .map(|n| {
                        d.alcohol
                            .name
                            .to_lowercase()
                            .contains(&n.to_lowercase())
                    })
                    .unwrap_or(true)
                    && filter
                        .kind
                        .as_ref()
                        .map(|k| d.alcohol.kind.as_str() == k)
                        .unwrap_or(true)
            })
            .cloned()
            .collect();

        let total = matches.len() as u64;
        let start = ((page.max(1) - 1) * per_page) as usize;
        let data = matches
            .into_iter()
            .skip(start)
            .take(per_page as usize)
            .collect();
        Ok((data, total))
    }

    async fn create_alcohol(&self, input: NewAlcohol) -> AppResult<AlcoholDetails> {
        self.writes.fetch_add(1, Ordering::SeqCst);

        let violations = check_new_alcohol(&input);
        if !violations.is_empty() {
            return Err(AppError::Validation(violations));
        }

        let details = AlcoholDetails {
            alcohol: Alcohol {
                id: Uuid::new_v4(),
                name: input.name,
                kind: AlcoholType::parse(&input.kind).expect("checked kind"),
                description: input.description,
                producer_id: input.producer_id,
                abv: input.abv,
                image_id: input.image_id,
                date_created: Utc::now(),
                date_edited: None,
            },
            producer: Producer {
                id: input.producer_id,
                name: "Bacardi".to_string(),
                country: "Cuba".to_string(),
            },
            image: None,
        };
        self.records.lock().unwrap().push(details.clone());
        Ok(details)
    }

    async fn update_alcohol(&self, id: Uuid, changes: AlcoholChanges) -> AppResult<AlcoholDetails> {
        self.writes.fetch_add(1, Ordering::SeqCst);

        let violations = check_alcohol_changes(&changes);
        if !violations.is_empty() {
            return Err(AppError::Validation(violations));
        }

        let mut records = self.records.lock().unwrap();
        let details = records
            .iter_mut()
            .find(|d| d.alcohol.id == id)
            .ok_or(AppError::NotFound)?;

        if let Some(name) = changes.name {
            details.alcohol.name = name;
        }
        if let Some(kind) = changes.kind {
            details.alcohol.kind = AlcoholType::parse(&kind).expect("checked kind");
        }
        if let Some(description) = changes.description {
            details.alcohol.description = Some(description);
        }
        if let Some(abv) = changes.abv {
            details.alcohol.abv = abv;
        }
        details.alcohol.date_edited = Some(Utc::now());
        Ok(details.clone())
    }

    async fn delete_alcohol(&self, id: Uuid) -> AppResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);

        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|d| d.alcohol.id != id);
        if records.len() == before {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}

/// Producer service stub that echoes writes back
struct StubProducerService;

#[async_trait]
impl ProducerService for StubProducerService {
    async fn get_producer(&self, _id: Uuid) -> AppResult<Producer> {
        Err(AppError::NotFound)
    }

    async fn list_producers(&self, _page: u64, _per_page: u64) -> AppResult<(Vec<Producer>, u64)> {
        Ok((Vec::new(), 0))
    }

    async fn create_producer(&self, input: NewProducer) -> AppResult<Producer> {
        Ok(Producer {
            id: Uuid::new_v4(),
            name: input.name,
            country: input.country,
        })
    }

    async fn update_producer(&self, _id: Uuid, _changes: ProducerChanges) -> AppResult<Producer> {
        Err(AppError::NotFound)
    }

    async fn delete_producer(&self, _id: Uuid) -> AppResult<()> {
        Err(AppError::NotFound)
    }
}

/// Image service stub whose delete always reports an attached image
struct StubImageService;

#[async_trait]
impl ImageService for StubImageService {
    async fn get_image(&self, _id: Uuid) -> AppResult<Image> {
        Err(AppError::NotFound)
    }

    async fn list_images(&self, _page: u64, _per_page: u64) -> AppResult<(Vec<Image>, u64)> {
        Ok((Vec::new(), 0))
    }

    async fn create_image(&self, input: NewImage) -> AppResult<Image> {
        Ok(Image {
            id: Uuid::new_v4(),
            name: input.name,
            url: input.url,
        })
    }

    async fn update_image(&self, _id: Uuid, _changes: ImageChanges) -> AppResult<Image> {
        Err(AppError::NotFound)
    }

    async fn delete_image(&self, _id: Uuid) -> AppResult<()> {
        Err(AppError::conflict(
            "Image is attached to an alcohol and cannot be deleted",
        ))
    }
}

// =============================================================================
// Test Helpers
// =============================================================================

fn test_app() -> (Router, Arc<InMemoryCatalog>) {
    let catalog = Arc::new(InMemoryCatalog::from_seed());
    let state = AppState::new(
        Arc::new(StaticAuthService),
        catalog.clone(),
        Arc::new(StubProducerService),
        Arc::new(StubImageService),
    );
    (create_router(state), catalog)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn request_with_json(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: &Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn delete_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("DELETE").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

// =============================================================================
// Service Endpoints
// =============================================================================

#[tokio::test]
async fn root_returns_banner() {
    let (app, _) = test_app();
    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn health_reports_healthy() {
    let (app, _) = test_app();
    let (status, body) = send(app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy"}));
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn login_check_returns_token_for_known_credentials() {
    let (app, _) = test_app();
    let (status, body) = send(
        app,
        request_with_json(
            "POST",
            "/login_check",
            None,
            &json!({"email": "krum@codixis.com", "password": "aBcd@5678yilnjvgtiuh"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token"], VALID_TOKEN);
}

#[tokio::test]
async fn login_check_rejects_bad_credentials_with_fixed_body() {
    let (app, _) = test_app();
    let (status, body) = send(
        app,
        request_with_json(
            "POST",
            "/login_check",
            None,
            &json!({"email": "krum@codixis.com", "password": "wrong"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"message": "Invalid credentials."}));
}

// =============================================================================
// Alcohol Reads (public)
// =============================================================================

#[tokio::test]
async fn listing_reports_the_full_seed_catalog() {
    let (app, _) = test_app();
    let (status, body) = send(app, get("/api/alcohols?page=1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["total"], 50);
    assert_eq!(body["meta"]["per_page"], 20);
    assert_eq!(body["data"].as_array().unwrap().len(), 20);
}

#[tokio::test]
async fn listing_pages_through_the_catalog() {
    let (app, _) = test_app();
    let (status, body) = send(app, get("/api/alcohols?page=3&per_page=20")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["total"], 50);
    assert_eq!(body["meta"]["total_pages"], 3);
    assert_eq!(body["data"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn filters_narrow_to_the_one_jameson() {
    let (app, _) = test_app();
    let (status, body) = send(app, get("/api/alcohols?page=1&type=whiskey&name=Jameson")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["total"], 1);
    assert_eq!(body["data"][0]["name"], "Jameson");
}

#[tokio::test]
async fn authenticated_listing_sees_the_same_totals() {
    let (app, _) = test_app();
    let request = Request::builder()
        .uri("/api/alcohols?page=1&type=whiskey&name=Jameson")
        .header(header::AUTHORIZATION, format!("Bearer {VALID_TOKEN}"))
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["total"], 1);
}

#[tokio::test]
async fn fetching_jameson_returns_the_stored_fields() {
    let (app, catalog) = test_app();
    let id = catalog.id_of("Jameson");
    let (status, body) = send(app, get(&format!("/api/alcohols/{id}"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Jameson");
    assert_eq!(body["type"], "whiskey");
    assert_eq!(body["description"], "Tennessee whiskey");
    assert_eq!(body["abv"], 37.5);
    assert_eq!(body["producer"]["name"], "Bacardi");
    assert_eq!(body["image"]["name"], "Jameson");
    assert!(body["date_created"].is_string());
}

#[tokio::test]
async fn unknown_id_is_a_404() {
    let (app, _) = test_app();
    let (status, _) = send(
        app,
        get("/api/alcohols/fa5e2591-0463-40c4-a32a-62a89df22549"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Alcohol Writes (JWT protected)
// =============================================================================

#[tokio::test]
async fn write_without_token_is_rejected_before_any_service_runs() {
    let (app, catalog) = test_app();
    let (status, body) = send(
        app,
        request_with_json(
            "POST",
            "/api/alcohols",
            None,
            &json!({
                "name": "Jameson 5",
                "type": "whiskey",
                "producer": Uuid::new_v4(),
                "abv": 37.5
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"message": "JWT Token not found"}));
    assert_eq!(catalog.write_count(), 0);
}

#[tokio::test]
async fn write_with_garbage_token_is_rejected_before_any_service_runs() {
    let (app, catalog) = test_app();
    let (status, body) = send(
        app,
        request_with_json(
            "PUT",
            &format!("/api/alcohols/{}", catalog.id_of("Jameson")),
            Some("garbage"),
            &json!({"name": "Test update"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"message": "Invalid JWT Token"}));
    assert_eq!(catalog.write_count(), 0);
}

#[tokio::test]
async fn create_with_token_returns_201_and_the_resource() {
    let (app, catalog) = test_app();
    let (status, body) = send(
        app,
        request_with_json(
            "POST",
            "/api/alcohols",
            Some(VALID_TOKEN),
            &json!({
                "name": "Jameson 5",
                "type": "whiskey",
                "description": "Tennessee whiskey",
                "producer": Uuid::new_v4(),
                "abv": 37.5
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Jameson 5");
    assert_eq!(body["type"], "whiskey");
    assert_eq!(body["abv"], 37.5);
    assert!(body["date_created"].is_string());
    assert_eq!(catalog.write_count(), 1);
}

#[tokio::test]
async fn create_with_unknown_type_returns_violations() {
    let (app, _) = test_app();
    let (status, body) = send(
        app,
        request_with_json(
            "POST",
            "/api/alcohols",
            Some(VALID_TOKEN),
            &json!({
                "name": "Mystery",
                "type": "juice",
                "producer": Uuid::new_v4(),
                "abv": 10.0
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    let violations = body["error"]["violations"].as_array().unwrap();
    assert!(violations.iter().any(|v| v["field"] == "type"));
}

#[tokio::test]
async fn partial_update_leaves_absent_fields_unchanged() {
    let (app, catalog) = test_app();
    let id = catalog.id_of("Jameson");

    let (_, before) = send(app.clone(), get(&format!("/api/alcohols/{id}"))).await;
    let (status, body) = send(
        app,
        request_with_json(
            "PUT",
            &format!("/api/alcohols/{id}"),
            Some(VALID_TOKEN),
            &json!({"name": "Test update"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Test update");
    assert_eq!(body["type"], "whiskey");
    assert_eq!(body["abv"], 37.5);
    assert_eq!(body["date_created"], before["date_created"]);
    assert!(body["date_edited"].is_string());
}

#[tokio::test]
async fn delete_returns_204_and_removes_the_record() {
    let (app, catalog) = test_app();
    let id = catalog.id_of("Jameson");

    let response = app
        .clone()
        .oneshot(delete_request(
            &format!("/api/alcohols/{id}"),
            Some(VALID_TOKEN),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let (status, _) = send(app, get(&format!("/api/alcohols/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let (app, _) = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/alcohols")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {VALID_TOKEN}"))
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

// =============================================================================
// Producers and Images
// =============================================================================

#[tokio::test]
async fn producer_list_is_public() {
    let (app, _) = test_app();
    let (status, body) = send(app, get("/api/producers")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["total"], 0);
}

#[tokio::test]
async fn producer_create_requires_a_token() {
    let (app, _) = test_app();
    let (status, body) = send(
        app,
        request_with_json(
            "POST",
            "/api/producers",
            None,
            &json!({"name": "Bacardi", "country": "Cuba"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"message": "JWT Token not found"}));
}

#[tokio::test]
async fn producer_create_echoes_the_resource() {
    let (app, _) = test_app();
    let (status, body) = send(
        app,
        request_with_json(
            "POST",
            "/api/producers",
            Some(VALID_TOKEN),
            &json!({"name": "Zagorka AD", "country": "Bulgaria"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Zagorka AD");
    assert_eq!(body["country"], "Bulgaria");
}

#[tokio::test]
async fn attached_image_delete_maps_to_conflict() {
    let (app, _) = test_app();
    let (status, body) = send(
        app,
        delete_request(&format!("/api/images/{}", Uuid::new_v4()), Some(VALID_TOKEN)),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");
    assert_eq!(
        body["error"]["message"],
        "Image is attached to an alcohol and cannot be deleted"
    );
}
