//! Common domain type definitions
//!
//! This module contains common enum types used across domain models to
//! ensure consistency and facilitate code reuse.

use serde::{Deserialize, Serialize};

/// Gender of a person
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male gender
    #[serde(rename = "M")]
    Male,
    /// Female gender
    #[serde(rename = "F")]
    Female,
    /// Unknown or not specified
    #[default]
    #[serde(other)]
    Unknown,
}

impl From<&str> for Gender {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Self::Male,
            "f" | "female" => Self::Female,
            _ => Self::Unknown,
        }
    }
}
