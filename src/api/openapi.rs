//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{alcohol_handler, auth_handler, image_handler, producer_handler};
use crate::domain::{AlcoholResponse, AlcoholType, ImageResponse, ProducerResponse};
use crate::errors::Violation;
use crate::services::TokenResponse;
use crate::types::MessageResponse;

/// OpenAPI documentation for the Cellar API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cellar API",
        version = "0.1.0",
        description = "A catalog of alcoholic beverages, their producers, and label images",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
        contact(name = "API Support", email = "support@example.com")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::login_check,
        // Alcohol endpoints
        alcohol_handler::list_alcohols,
        alcohol_handler::get_alcohol,
        alcohol_handler::create_alcohol,
        alcohol_handler::update_alcohol,
        alcohol_handler::delete_alcohol,
        // Producer endpoints
        producer_handler::list_producers,
        producer_handler::get_producer,
        producer_handler::create_producer,
        producer_handler::update_producer,
        producer_handler::delete_producer,
        // Image endpoints
        image_handler::list_images,
        image_handler::get_image,
        image_handler::create_image,
        image_handler::update_image,
        image_handler::delete_image,
    ),
    components(
        schemas(
            // Domain types
            AlcoholType,
            AlcoholResponse,
            ProducerResponse,
            ImageResponse,
            MessageResponse,
            Violation,
            // Auth types
            auth_handler::LoginRequest,
            TokenResponse,
            // Request types
            alcohol_handler::CreateAlcoholRequest,
            alcohol_handler::UpdateAlcoholRequest,
            producer_handler::CreateProducerRequest,
            producer_handler::UpdateProducerRequest,
            image_handler::CreateImageRequest,
            image_handler::UpdateImageRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Token issuance"),
        (name = "Alcohols", description = "Beverage catalog operations"),
        (name = "Producers", description = "Producer management operations"),
        (name = "Images", description = "Label image management operations")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /login_check"))
                        .build(),
                ),
            );
        }
    }
}
