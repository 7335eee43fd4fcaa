//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod health;
pub mod weather;

pub use health::health;
pub use weather::get_weather_by_cep;
