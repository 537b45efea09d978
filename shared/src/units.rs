//! Food portion units
//!
//! A food portion is described twice: once in a measurable unit (grams or
//! millilitres) and once as a homemade measurement ("2 units", "1 cup").
//! Only the measurable unit is restricted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit allowed for the portion-of-food quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortionUnit {
    /// Grams
    G,
    /// Millilitres
    Ml,
}

impl PortionUnit {
    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            PortionUnit::G => "g",
            PortionUnit::Ml => "ml",
        }
    }
}

impl fmt::Display for PortionUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for PortionUnit {
    type Err = String;

    /// Exact match only: "G" or "grams" are rejected
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "g" => Ok(PortionUnit::G),
            "ml" => Ok(PortionUnit::Ml),
            _ => Err(format!("Unknown portion unit: {}", s)),
        }
    }
}
