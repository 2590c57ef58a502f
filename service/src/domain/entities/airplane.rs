//! Airplane domain entity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an airplane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AirplaneId(pub Uuid);

impl AirplaneId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AirplaneId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for AirplaneId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AirplaneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An aircraft that can be assigned to flights
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airplane {
    pub id: AirplaneId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub capacity: u32,
}

impl Airplane {
    /// Value equality on name, type and capacity
    pub fn same_model(&self, model: &NewAirplane) -> bool {
        self.name == model.name && self.kind == model.kind && self.capacity == model.capacity
    }
}

/// Data needed to create a new airplane
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAirplane {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub capacity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_airplane(name: &str, kind: &str, capacity: u32) -> Airplane {
        Airplane {
            id: AirplaneId::new(),
            name: name.to_string(),
            kind: kind.to_string(),
            capacity,
        }
    }

    fn model(name: &str, kind: &str, capacity: u32) -> NewAirplane {
        NewAirplane {
            name: name.to_string(),
            kind: kind.to_string(),
            capacity,
        }
    }

    #[test]
    fn same_model_compares_all_fields() {
        let plane = make_airplane("OK-TVR", "Boeing 737", 189);

        assert!(plane.same_model(&model("OK-TVR", "Boeing 737", 189)));
        assert!(!plane.same_model(&model("OK-TVR", "Boeing 737", 160)));
        assert!(!plane.same_model(&model("OK-TVR", "Airbus A320", 189)));
        assert!(!plane.same_model(&model("OK-NEM", "Boeing 737", 189)));
    }

    #[test]
    fn kind_serializes_as_type() {
        let plane = make_airplane("OK-NEM", "Airbus A320", 180);
        let json = serde_json::to_value(&plane).unwrap();

        assert_eq!(json["type"], "Airbus A320");
        assert_eq!(json["capacity"], 180);
    }
}
