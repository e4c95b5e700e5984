//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod alcohol;
pub mod image;
pub mod producer;
pub mod user;
