//! Domain layer - core business entities and validation.
//!
//! Entities, input types, and the per-entity check functions that turn
//! bad input into field violations. No infrastructure concerns here.

pub mod alcohol;
pub mod image;
pub mod password;
pub mod producer;
pub mod user;

pub use alcohol::{
    check_alcohol_changes, check_new_alcohol, Alcohol, AlcoholChanges, AlcoholDetails,
    AlcoholResponse, AlcoholType, NewAlcohol,
};
pub use image::{check_image_changes, check_new_image, Image, ImageChanges, ImageResponse, NewImage};
pub use password::Password;
pub use producer::{
    check_new_producer, check_producer_changes, NewProducer, Producer, ProducerChanges,
    ProducerResponse,
};
pub use user::{check_new_user, NewUser, User, UserRole};
