//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `migrate` - Database migrations
//! - `create-user` - Create a user account
//! - `fixtures` - Seed data management

pub mod args;

pub use args::{Cli, Commands};
