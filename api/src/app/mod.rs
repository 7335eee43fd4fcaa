//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and the outbound HTTP port.

pub mod cep_service;
pub mod weather_service;

pub use cep_service::{CepService, DEFAULT_CEP_URL};
pub use weather_service::{WeatherService, DEFAULT_WEATHER_URL};
