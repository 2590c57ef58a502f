//! Destination domain entity
//!
//! A place flights depart from or arrive at.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DestinationId(pub Uuid);

impl DestinationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DestinationId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for DestinationId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for DestinationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub id: DestinationId,
    pub country: String,
    pub city: String,
}

impl Destination {
    /// Value equality: same country and city, regardless of identity
    pub fn same_place(&self, other: &Destination) -> bool {
        self.country == other.country && self.city == other.city
    }

    /// Check whether this destination is the given (country, city) pair
    pub fn is_at(&self, country: &str, city: &str) -> bool {
        self.country == country && self.city == city
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.city, self.country)
    }
}

/// Data needed to create a new destination
#[derive(Debug, Clone)]
pub struct NewDestination {
    pub country: String,
    pub city: String,
}
