//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Postal code, locality and temperature value types
//! - `ports`: Trait definitions for outbound HTTP

pub mod entities;
pub mod ports;
