//! Application services layer - Use cases and business logic.
//!
//! Each manager implements its service trait on top of the repository
//! traits; the HTTP layer and the CLI only ever see the traits.

mod alcohol_service;
mod auth_service;
pub mod container;
mod image_service;
mod producer_service;
mod user_service;

// Service Container
pub use container::Services;

// Service traits and implementations
pub use alcohol_service::{AlcoholManager, AlcoholService};
pub use auth_service::{AuthService, Authenticator, Claims, TokenResponse};
pub use image_service::{ImageManager, ImageService};
pub use producer_service::{ProducerManager, ProducerService};
pub use user_service::{UserManager, UserService};
