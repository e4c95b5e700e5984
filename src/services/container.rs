//! Service container - wires repositories into services.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{
    AlcoholManager, AlcoholService, Authenticator, AuthService, ImageManager, ImageService,
    ProducerManager, ProducerService,
};
use crate::config::Config;
use crate::infra::db::clone_connection;
use crate::infra::{AlcoholStore, ImageStore, ProducerStore, UserStore};

/// The services behind the HTTP API, constructed over one shared pool
pub struct Services {
    pub auth: Arc<dyn AuthService>,
    pub alcohols: Arc<dyn AlcoholService>,
    pub producers: Arc<dyn ProducerService>,
    pub images: Arc<dyn ImageService>,
}

impl Services {
    /// Build the full service graph from a database connection and config
    pub fn from_connection(db: DatabaseConnection, config: Config) -> Self {
        let alcohol_repo: Arc<dyn crate::infra::AlcoholRepository> =
            Arc::new(AlcoholStore::new(clone_connection(&db)));
        let producer_repo: Arc<dyn crate::infra::ProducerRepository> =
            Arc::new(ProducerStore::new(clone_connection(&db)));
        let image_repo: Arc<dyn crate::infra::ImageRepository> =
            Arc::new(ImageStore::new(clone_connection(&db)));
        let user_repo: Arc<dyn crate::infra::UserRepository> = Arc::new(UserStore::new(db));

        Self {
            auth: Arc::new(Authenticator::new(user_repo, config)),
            alcohols: Arc::new(AlcoholManager::new(
                alcohol_repo.clone(),
                producer_repo.clone(),
                image_repo.clone(),
            )),
            producers: Arc::new(ProducerManager::new(producer_repo, alcohol_repo.clone())),
            images: Arc::new(ImageManager::new(image_repo, alcohol_repo)),
        }
    }
}
