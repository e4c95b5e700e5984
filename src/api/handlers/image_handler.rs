//! Image handlers.

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
use crate::domain::{ImageChanges, ImageResponse, NewImage};
use crate::errors::AppResult;
use crate::types::{Created, NoContent, Paginated, PaginationParams};

/// Image creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateImageRequest {
    /// Display name
    #[validate(length(min = 1, message = "Name must not be empty"))]
    #[schema(example = "Jameson")]
    pub name: String,
    /// Publicly reachable location
    #[validate(length(min = 1, message = "Url must not be empty"))]
    #[schema(example = "https://cdn.cellar.dev/images/jameson.png")]
    pub url: String,
}

/// Image update request; absent fields stay unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateImageRequest {
    /// New display name
    #[validate(length(min = 1, message = "Name must not be empty"))]
    #[schema(example = "Jameson Black Barrel")]
    pub name: Option<String>,
    /// New location
    #[validate(length(min = 1, message = "Url must not be empty"))]
    #[schema(example = "https://cdn.cellar.dev/images/jameson-black.png")]
    pub url: Option<String>,
}

/// Create image routes; writes sit behind the JWT middleware
pub fn image_routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/", get(list_images))
        .route("/:id", get(get_image));

    let protected = Router::new()
        .route("/", post(create_image))
        .route("/:id", put(update_image).delete(delete_image))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}

/// List images
#[utoipa::path(
    get,
    path = "/api/images",
    tag = "Images",
    params(
        ("page" = Option<u64>, Query, description = "Page number, 1-indexed"),
        ("per_page" = Option<u64>, Query, description = "Items per page")
    ),
    responses(
        (status = 200, description = "Paginated list of images")
    )
)]
pub async fn list_images(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> AppResult<Json<Paginated<ImageResponse>>> {
    let (images, total) = state
        .image_service
        .list_images(pagination.page(), pagination.limit())
        .await?;

    let data: Vec<ImageResponse> = images.into_iter().map(ImageResponse::from).collect();
    Ok(Json(Paginated::new(
        data,
        pagination.page(),
        pagination.limit(),
        total,
    )))
}

/// Get image by ID
#[utoipa::path(
    get,
    path = "/api/images/{id}",
    tag = "Images",
    params(
        ("id" = Uuid, Path, description = "Image ID")
    ),
    responses(
        (status = 200, description = "Image", body = ImageResponse),
        (status = 404, description = "Image not found")
    )
)]
pub async fn get_image(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ImageResponse>> {
    let image = state.image_service.get_image(id).await?;
    Ok(Json(ImageResponse::from(image)))
}

/// Create a new image
#[utoipa::path(
    post,
    path = "/api/images",
    tag = "Images",
    security(("bearer_auth" = [])),
    request_body = CreateImageRequest,
    responses(
        (status = 201, description = "Image created", body = ImageResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_image(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateImageRequest>,
) -> AppResult<Created<ImageResponse>> {
    let image = state
        .image_service
        .create_image(NewImage {
            name: payload.name,
            url: payload.url,
        })
        .await?;

    tracing::debug!(user = %current_user.email, image = %image.id, "image created");
    Ok(Created(ImageResponse::from(image)))
}

/// Update an image; absent fields stay unchanged
#[utoipa::path(
    put,
    path = "/api/images/{id}",
    tag = "Images",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Image ID")
    ),
    request_body = UpdateImageRequest,
    responses(
        (status = 200, description = "Image updated", body = ImageResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Image not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_image(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateImageRequest>,
) -> AppResult<Json<ImageResponse>> {
    let image = state
        .image_service
        .update_image(
            id,
            ImageChanges {
                name: payload.name,
                url: payload.url,
            },
        )
        .await?;

    tracing::debug!(user = %current_user.email, image = %id, "image updated");
    Ok(Json(ImageResponse::from(image)))
}

/// Delete an image that no alcohol holds
#[utoipa::path(
    delete,
    path = "/api/images/{id}",
    tag = "Images",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Image ID")
    ),
    responses(
        (status = 204, description = "Image deleted"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Image not found"),
        (status = 409, description = "Image still attached to an alcohol")
    )
)]
pub async fn delete_image(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.image_service.delete_image(id).await?;

    tracing::debug!(user = %current_user.email, image = %id, "image deleted");
    Ok(NoContent)
}
