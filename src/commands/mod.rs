//! Commands module - CLI command implementations.

pub mod create_user;
pub mod fixtures;
pub mod migrate;
pub mod serve;
