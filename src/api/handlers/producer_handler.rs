//! Producer handlers.

use axum::{
    extract::{Extension, Path, Query, State},
    middleware,
    response::Json,
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{auth_middleware, CurrentUser};
use crate::api::AppState;
use crate::domain::{NewProducer, ProducerChanges, ProducerResponse};
use crate::errors::AppResult;
use crate::types::{Created, NoContent, Paginated, PaginationParams};

/// Producer creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProducerRequest {
    /// Company name
    #[validate(length(min = 1, message = "Name must not be empty"))]
    #[schema(example = "Bacardi")]
    pub name: String,
    /// Country of origin
    #[validate(length(min = 1, message = "Country must not be empty"))]
    #[schema(example = "Cuba")]
    pub country: String,
}

/// Producer update request; absent fields stay unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProducerRequest {
    /// New company name
    #[validate(length(min = 1, message = "Name must not be empty"))]
    #[schema(example = "Diageo")]
    pub name: Option<String>,
    /// New country of origin
    #[validate(length(min = 1, message = "Country must not be empty"))]
    #[schema(example = "United Kingdom")]
    pub country: Option<String>,
}

/// Create producer routes; writes sit behind the JWT middleware
pub fn producer_routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/", get(list_producers))
        .route("/:id", get(get_producer));

    let protected = Router::new()
        .route("/", post(create_producer))
        .route("/:id", put(update_producer).delete(delete_producer))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}

/// List producers
#[utoipa::path(
    get,
    path = "/api/producers",
    tag = "Producers",
    params(
        ("page" = Option<u64>, Query, description = "Page number, 1-indexed"),
        ("per_page" = Option<u64>, Query, description = "Items per page")
    ),
    responses(
        (status = 200, description = "Paginated list of producers")
    )
)]
pub async fn list_producers(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> AppResult<Json<Paginated<ProducerResponse>>> {
    let (producers, total) = state
        .producer_service
        .list_producers(pagination.page(), pagination.limit())
        .await?;

    let data: Vec<ProducerResponse> = producers.into_iter().map(ProducerResponse::from).collect();
    Ok(Json(Paginated::new(
        data,
        pagination.page(),
        pagination.limit(),
        total,
    )))
}

/// Get producer by ID
#[utoipa::path(
    get,
    path = "/api/producers/{id}",
    tag = "Producers",
    params(
        ("id" = Uuid, Path, description = "Producer ID")
    ),
    responses(
        (status = 200, description = "Producer", body = ProducerResponse),
        (status = 404, description = "Producer not found")
    )
)]
pub async fn get_producer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ProducerResponse>> {
    let producer = state.producer_service.get_producer(id).await?;
    Ok(Json(ProducerResponse::from(producer)))
}

/// Create a new producer
#[utoipa::path(
    post,
    path = "/api/producers",
    tag = "Producers",
    security(("bearer_auth" = [])),
    request_body = CreateProducerRequest,
    responses(
        (status = 201, description = "Producer created", body = ProducerResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_producer(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProducerRequest>,
) -> AppResult<Created<ProducerResponse>> {
    let producer = state
        .producer_service
        .create_producer(NewProducer {
            name: payload.name,
            country: payload.country,
        })
        .await?;

    tracing::debug!(user = %current_user.email, producer = %producer.id, "producer created");
    Ok(Created(ProducerResponse::from(producer)))
}

/// Update a producer; absent fields stay unchanged
#[utoipa::path(
    put,
    path = "/api/producers/{id}",
    tag = "Producers",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Producer ID")
    ),
    request_body = UpdateProducerRequest,
    responses(
        (status = 200, description = "Producer updated", body = ProducerResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Producer not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_producer(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateProducerRequest>,
) -> AppResult<Json<ProducerResponse>> {
    let producer = state
        .producer_service
        .update_producer(
            id,
            ProducerChanges {
                name: payload.name,
                country: payload.country,
            },
        )
        .await?;

    tracing::debug!(user = %current_user.email, producer = %id, "producer updated");
    Ok(Json(ProducerResponse::from(producer)))
}

/// Delete a producer that no alcohol references
#[utoipa::path(
    delete,
    path = "/api/producers/{id}",
    tag = "Producers",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Producer ID")
    ),
    responses(
        (status = 204, description = "Producer deleted"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Producer not found"),
        (status = 409, description = "Producer still referenced by alcohols")
    )
)]
pub async fn delete_producer(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.producer_service.delete_producer(id).await?;

    tracing::debug!(user = %current_user.email, producer = %id, "producer deleted");
    Ok(NoContent)
}
