//! Flight domain entity
//!
//! A scheduled flight between two destinations. Flights reference
//! destinations, the airplane and assigned stewards by id only.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::airplane::AirplaneId;
use super::destination::DestinationId;
use super::steward::StewardId;

/// Unique identifier for a flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlightId(pub Uuid);

impl FlightId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FlightId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for FlightId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for FlightId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored flight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    pub id: FlightId,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub departure_location: DestinationId,
    pub arrival_location: DestinationId,
    pub airplane: Option<AirplaneId>,
    /// Assigned stewards, each at most once
    pub stewards: Vec<StewardId>,
}

impl Flight {
    /// Time between departure and arrival
    pub fn duration(&self) -> Duration {
        self.arrival_time - self.departure_time
    }

    /// In the sky at `instant` (both ends inclusive)
    pub fn is_airborne_at(&self, instant: DateTime<Utc>) -> bool {
        self.departure_time <= instant && instant <= self.arrival_time
    }

    /// Departs or arrives strictly after `instant`
    pub fn is_active_after(&self, instant: DateTime<Utc>) -> bool {
        self.departure_time > instant || self.arrival_time > instant
    }

    /// Closed-interval overlap with `[start, end]`
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.departure_time <= end && self.arrival_time >= start
    }

    pub fn departs_from(&self, destination: &DestinationId) -> bool {
        self.departure_location == *destination
    }

    pub fn arrives_at(&self, destination: &DestinationId) -> bool {
        self.arrival_location == *destination
    }

    pub fn has_steward(&self, steward: &StewardId) -> bool {
        self.stewards.contains(steward)
    }

    /// Append a steward; returns false (and leaves the flight untouched)
    /// when the steward is already assigned
    pub fn assign_steward(&mut self, steward: StewardId) -> bool {
        if self.has_steward(&steward) {
            return false;
        }
        self.stewards.push(steward);
        true
    }
}

/// Data needed to create a new flight
#[derive(Debug, Clone)]
pub struct NewFlight {
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub departure_location: DestinationId,
    pub arrival_location: DestinationId,
    pub airplane: Option<AirplaneId>,
    pub stewards: Vec<StewardId>,
}

impl NewFlight {
    pub fn new(
        departure_time: DateTime<Utc>,
        arrival_time: DateTime<Utc>,
        departure_location: DestinationId,
        arrival_location: DestinationId,
    ) -> Self {
        Self {
            departure_time,
            arrival_time,
            departure_location,
            arrival_location,
            airplane: None,
            stewards: Vec::new(),
        }
    }

    pub fn with_airplane(mut self, airplane: AirplaneId) -> Self {
        self.airplane = Some(airplane);
        self
    }
}

/// First steward id that occurs more than once, if any
pub fn duplicate_steward(stewards: &[StewardId]) -> Option<StewardId> {
    let mut seen = HashSet::with_capacity(stewards.len());
    stewards.iter().copied().find(|id| !seen.insert(*id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 4, hour, minute, 0).unwrap()
    }

    fn make_flight(departure: DateTime<Utc>, arrival: DateTime<Utc>) -> Flight {
        Flight {
            id: FlightId::new(),
            departure_time: departure,
            arrival_time: arrival,
            departure_location: DestinationId::new(),
            arrival_location: DestinationId::new(),
            airplane: None,
            stewards: Vec::new(),
        }
    }

    #[test]
    fn duration_is_arrival_minus_departure() {
        let flight = make_flight(at(10, 0), at(11, 30));
        assert_eq!(flight.duration(), Duration::minutes(90));
    }

    #[test]
    fn airborne_includes_both_ends() {
        let flight = make_flight(at(10, 0), at(11, 30));

        assert!(flight.is_airborne_at(at(10, 0)));
        assert!(flight.is_airborne_at(at(10, 45)));
        assert!(flight.is_airborne_at(at(11, 30)));
        assert!(!flight.is_airborne_at(at(9, 59)));
        assert!(!flight.is_airborne_at(at(11, 31)));
    }

    #[test]
    fn active_after_is_strict() {
        let flight = make_flight(at(10, 0), at(11, 30));

        assert!(flight.is_active_after(at(9, 0)));
        assert!(flight.is_active_after(at(11, 0)));
        assert!(!flight.is_active_after(at(11, 30)));
    }

    #[test]
    fn overlaps_touching_ranges() {
        let flight = make_flight(at(10, 0), at(11, 30));

        assert!(flight.overlaps(at(11, 30), at(12, 0)));
        assert!(flight.overlaps(at(9, 0), at(10, 0)));
        assert!(flight.overlaps(at(10, 15), at(10, 20)));
        assert!(!flight.overlaps(at(11, 31), at(12, 0)));
        assert!(!flight.overlaps(at(8, 0), at(9, 59)));
    }

    #[test]
    fn assign_steward_rejects_duplicates() {
        let mut flight = make_flight(at(10, 0), at(11, 30));
        let steward = StewardId::new();

        assert!(flight.assign_steward(steward));
        assert!(!flight.assign_steward(steward));
        assert_eq!(flight.stewards, vec![steward]);
    }

    #[test]
    fn duplicate_steward_finds_repeat() {
        let a = StewardId::new();
        let b = StewardId::new();

        assert_eq!(duplicate_steward(&[a, b]), None);
        assert_eq!(duplicate_steward(&[a, b, a]), Some(a));
    }

    #[test]
    fn departs_and_arrives() {
        let flight = make_flight(at(10, 0), at(11, 30));

        assert!(flight.departs_from(&flight.departure_location));
        assert!(flight.arrives_at(&flight.arrival_location));
        assert!(!flight.arrives_at(&flight.departure_location));
    }
}
