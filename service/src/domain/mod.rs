//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models for flights, destinations, stewards and airplanes
//! - `ports`: Trait definitions for the entity stores

pub mod entities;
pub mod ports;
