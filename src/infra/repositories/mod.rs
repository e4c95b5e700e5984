//! Repository traits and their sea-orm implementations.
//!
//! Each entity gets a trait describing its queries and a `*Store`
//! backed by the live database connection.

mod alcohol_repository;
pub(crate) mod entities;
mod image_repository;
mod producer_repository;
mod user_repository;

pub use alcohol_repository::{AlcoholFilter, AlcoholRepository, AlcoholStore};
pub use image_repository::{ImageRepository, ImageStore};
pub use producer_repository::{ProducerRepository, ProducerStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use alcohol_repository::MockAlcoholRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use image_repository::MockImageRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use producer_repository::MockProducerRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
