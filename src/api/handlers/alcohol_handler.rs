//! Alcohol handlers.

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
use crate::domain::{AlcoholChanges, AlcoholResponse, NewAlcohol};
use crate::errors::AppResult;
use crate::infra::AlcoholFilter;
use crate::types::{Created, NoContent, Paginated, PaginationParams};

/// Alcohol creation request.
///
/// Field constraints (known type, abv range, resolvable references) are
/// checked by the service so every broken field is reported in one pass.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAlcoholRequest {
    /// Display name
    #[schema(example = "Jameson")]
    pub name: String,
    /// Alcohol type
    #[serde(rename = "type")]
    #[schema(example = "whiskey")]
    pub kind: String,
    /// Free-form description
    #[schema(example = "Tennessee whiskey")]
    pub description: Option<String>,
    /// Producer ID
    pub producer: Uuid,
    /// Alcohol by volume, percent
    #[schema(example = 37.5)]
    pub abv: f64,
    /// Image ID, at most one alcohol per image
    pub image: Option<Uuid>,
}

/// Alcohol update request; absent fields stay unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateAlcoholRequest {
    /// New display name
    #[schema(example = "Jameson Black Barrel")]
    pub name: Option<String>,
    /// New alcohol type
    #[serde(rename = "type")]
    #[schema(example = "whiskey")]
    pub kind: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New producer ID
    pub producer: Option<Uuid>,
    /// New alcohol by volume, percent
    #[schema(example = 40.0)]
    pub abv: Option<f64>,
    /// New image ID
    pub image: Option<Uuid>,
}

/// Listing filter query parameters
#[derive(Debug, Default, Deserialize)]
pub struct AlcoholFilterQuery {
    /// Case-insensitive partial match on name
    pub name: Option<String>,
    /// Exact match on type
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Create alcohol routes; writes sit behind the JWT middleware
pub fn alcohol_routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/", get(list_alcohols))
        .route("/:id", get(get_alcohol));

    let protected = Router::new()
        .route("/", post(create_alcohol))
        .route("/:id", put(update_alcohol).delete(delete_alcohol))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}

/// List alcohols with optional name/type filters
#[utoipa::path(
    get,
    path = "/api/alcohols",
    tag = "Alcohols",
    params(
        ("page" = Option<u64>, Query, description = "Page number, 1-indexed"),
        ("per_page" = Option<u64>, Query, description = "Items per page"),
        ("name" = Option<String>, Query, description = "Case-insensitive partial name match"),
        ("type" = Option<String>, Query, description = "Exact type match")
    ),
    responses(
        (status = 200, description = "Paginated list of alcohols")
    )
)]
pub async fn list_alcohols(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(filter): Query<AlcoholFilterQuery>,
) -> AppResult<Json<Paginated<AlcoholResponse>>> {
    let (details, total) = state
        .alcohol_service
        .list_alcohols(
            AlcoholFilter {
                name: filter.name,
                kind: filter.kind,
            },
            pagination.page(),
            pagination.limit(),
        )
        .await?;

    let data: Vec<AlcoholResponse> = details.into_iter().map(AlcoholResponse::from).collect();
    Ok(Json(Paginated::new(
        data,
        pagination.page(),
        pagination.limit(),
        total,
    )))
}

/// Get alcohol by ID
#[utoipa::path(
    get,
    path = "/api/alcohols/{id}",
    tag = "Alcohols",
    params(
        ("id" = Uuid, Path, description = "Alcohol ID")
    ),
    responses(
        (status = 200, description = "Alcohol with its producer and image", body = AlcoholResponse),
        (status = 404, description = "Alcohol not found")
    )
)]
pub async fn get_alcohol(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<AlcoholResponse>> {
    let details = state.alcohol_service.get_alcohol(id).await?;
    Ok(Json(AlcoholResponse::from(details)))
}

/// Create a new alcohol
#[utoipa::path(
    post,
    path = "/api/alcohols",
    tag = "Alcohols",
    security(("bearer_auth" = [])),
    request_body = CreateAlcoholRequest,
    responses(
        (status = 201, description = "Alcohol created", body = AlcoholResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_alcohol(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateAlcoholRequest>,
) -> AppResult<Created<AlcoholResponse>> {
    let details = state
        .alcohol_service
        .create_alcohol(NewAlcohol {
            name: payload.name,
            kind: payload.kind,
            description: payload.description,
            producer_id: payload.producer,
            abv: payload.abv,
            image_id: payload.image,
        })
        .await?;

    tracing::debug!(
        user = %current_user.email,
        alcohol = %details.alcohol.id,
        "alcohol created"
    );
    Ok(Created(AlcoholResponse::from(details)))
}

/// Update an alcohol; absent fields stay unchanged
#[utoipa::path(
    put,
    path = "/api/alcohols/{id}",
    tag = "Alcohols",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Alcohol ID")
    ),
    request_body = UpdateAlcoholRequest,
    responses(
        (status = 200, description = "Alcohol updated", body = AlcoholResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Alcohol not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_alcohol(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateAlcoholRequest>,
) -> AppResult<Json<AlcoholResponse>> {
    let details = state
        .alcohol_service
        .update_alcohol(
            id,
            AlcoholChanges {
                name: payload.name,
                kind: payload.kind,
                description: payload.description,
                producer_id: payload.producer,
                abv: payload.abv,
                image_id: payload.image,
            },
        )
        .await?;

    tracing::debug!(user = %current_user.email, alcohol = %id, "alcohol updated");
    Ok(Json(AlcoholResponse::from(details)))
}

/// Delete an alcohol and its attached image
#[utoipa::path(
    delete,
    path = "/api/alcohols/{id}",
    tag = "Alcohols",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Alcohol ID")
    ),
    responses(
        (status = 204, description = "Alcohol deleted"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Alcohol not found")
    )
)]
pub async fn delete_alcohol(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.alcohol_service.delete_alcohol(id).await?;

    tracing::debug!(user = %current_user.email, alcohol = %id, "alcohol deleted");
    Ok(NoContent)
}
