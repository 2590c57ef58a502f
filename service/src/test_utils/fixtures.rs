//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::entities::{
    Airplane, AirplaneId, Destination, DestinationId, Flight, FlightId, Steward, StewardId,
};

/// An instant on the fixed test day (2026-05-04, UTC)
pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 5, 4, hour, minute, 0)
        .single()
        .expect("valid test time")
}

/// Create a test destination
pub fn test_destination(country: &str, city: &str) -> Destination {
    Destination {
        id: DestinationId::new(),
        country: country.to_string(),
        city: city.to_string(),
    }
}

/// Create a test flight between two destinations
pub fn test_flight(
    from: &Destination,
    to: &Destination,
    departure: DateTime<Utc>,
    arrival: DateTime<Utc>,
) -> Flight {
    Flight {
        id: FlightId::new(),
        departure_time: departure,
        arrival_time: arrival,
        departure_location: from.id,
        arrival_location: to.id,
        airplane: None,
        stewards: Vec::new(),
    }
}

/// Create a test steward
pub fn test_steward(first_name: &str, last_name: &str) -> Steward {
    Steward {
        id: StewardId::new(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
    }
}

/// Create a test airplane
pub fn test_airplane() -> Airplane {
    Airplane {
        id: AirplaneId::new(),
        name: "OK-TVR".to_string(),
        kind: "Boeing 737-800".to_string(),
        capacity: 189,
    }
}
