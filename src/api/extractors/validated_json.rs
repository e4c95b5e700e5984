//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::{AppError, Violation};

/// Validated JSON extractor that automatically validates requests.
///
/// Malformed JSON is a 400; a well-formed body that breaks declared
/// constraints is a 422 carrying one violation per broken field.
///
/// # Example
///
/// ```rust,ignore
/// use serde::Deserialize;
/// use validator::Validate;
/// use cellar::api::extractors::ValidatedJson;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateImageRequest {
///     #[validate(length(min = 1))]
///     name: String,
///     #[validate(url)]
///     url: String,
/// }
///
/// async fn create_image(ValidatedJson(payload): ValidatedJson<CreateImageRequest>) {
///     // payload is already validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::Validation(collect_violations(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Flatten validation errors into one violation per field rule, ordered by field
fn collect_violations(errors: &validator::ValidationErrors) -> Vec<Violation> {
    let mut violations: Vec<Violation> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                Violation::new(field.to_string(), message)
            })
        })
        .collect();

    violations.sort_by(|a, b| a.field.cmp(&b.field));
    violations
}
