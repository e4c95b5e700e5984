//! Cellar - a REST catalog of alcoholic beverages
//!
//! Alcohols, their producers, and label images behind an Axum API with
//! JWT-protected writes and a PostgreSQL store.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and validation
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (database, repositories)
//! - **api**: HTTP handlers, middleware, and routes
//! - **fixtures**: Seed catalog data and loader
//! - **types**: Shared types (pagination, responses)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Seed the catalog
//! cargo run -- fixtures load
//!
//! # Create an account for the write endpoints
//! cargo run -- create-user krum@codixis.com 'aBcd@5678yilnjvgtiuh' admin
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fixtures;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Alcohol, AlcoholType, Image, Password, Producer, User, UserRole};
pub use errors::{AppError, AppResult, Violation};
