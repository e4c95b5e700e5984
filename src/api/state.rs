//! Application state - Dependency injection container.
//!
//! Holds the service trait objects the handlers dispatch to. Handlers
//! never see the database; anything constructible here can serve the
//! router, including test doubles.

use std::sync::Arc;

use crate::services::{AlcoholService, AuthService, ImageService, ProducerService, Services};

/// Application state containing all services (DI container)
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Alcohol catalog service
    pub alcohol_service: Arc<dyn AlcoholService>,
    /// Producer service
    pub producer_service: Arc<dyn ProducerService>,
    /// Image service
    pub image_service: Arc<dyn ImageService>,
}

impl AppState {
    /// Create application state from a wired service container
    pub fn from_services(services: &Services) -> Self {
        Self {
            auth_service: services.auth.clone(),
            alcohol_service: services.alcohols.clone(),
            producer_service: services.producers.clone(),
            image_service: services.images.clone(),
        }
    }

    /// Create new application state with manually injected services
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        alcohol_service: Arc<dyn AlcoholService>,
        producer_service: Arc<dyn ProducerService>,
        image_service: Arc<dyn ImageService>,
    ) -> Self {
        Self {
            auth_service,
            alcohol_service,
            producer_service,
            image_service,
        }
    }
}
