//! HTTP request handlers.

pub mod alcohol_handler;
pub mod auth_handler;
pub mod image_handler;
pub mod producer_handler;

pub use alcohol_handler::alcohol_routes;
pub use auth_handler::auth_routes;
pub use image_handler::image_routes;
pub use producer_handler::producer_routes;
