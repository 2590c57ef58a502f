//! Steward domain entity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a steward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StewardId(pub Uuid);

impl StewardId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StewardId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for StewardId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for StewardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cabin crew member that can be assigned to flights
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Steward {
    pub id: StewardId,
    pub first_name: String,
    pub last_name: String,
}

impl Steward {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Data needed to create a new steward
#[derive(Debug, Clone)]
pub struct NewSteward {
    pub first_name: String,
    pub last_name: String,
}
