//! `ordertrack-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the order identifier, the error taxonomy, and the entity/value-object traits
//! the order model is built on.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{OrderError, OrderResult};
pub use id::OrderId;
pub use value_object::ValueObject;
