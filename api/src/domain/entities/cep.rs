//! Postal code (CEP) and locality value types

use serde::{Deserialize, Serialize};

/// A Brazilian postal code: exactly 8 ASCII digits, no separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cep(String);

impl Cep {
    /// Validate a raw path segment.
    ///
    /// Returns `None` for anything but exactly 8 ASCII digits. Whitespace,
    /// dashes and non-ASCII digits are all rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        let pattern = regex::Regex::new(r"^[0-9]{8}$").ok()?;
        pattern.is_match(raw).then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Cep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// City/municipality name returned by the address lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locality(String);

impl Locality {
    /// Returns `None` for an empty name.
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        (!name.is_empty()).then_some(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Locality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
