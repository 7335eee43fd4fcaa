//! Domain entities
//!
//! Request-scoped value types. Nothing here is persisted.

pub mod cep;
pub mod temperature;

pub use cep::{Cep, Locality};
pub use temperature::Temperature;
