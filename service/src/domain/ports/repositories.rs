//! Repository port traits
//!
//! These traits define the interface for entity storage.
//! Implementations are provided by adapters (e.g., the in-memory store).

use async_trait::async_trait;

use crate::domain::entities::{
    Airplane, AirplaneId, Destination, DestinationId, Flight, FlightId, NewAirplane,
    NewDestination, NewFlight, NewSteward, Steward, StewardId,
};
use crate::error::StoreError;

/// Repository for Flight entities
#[async_trait]
pub trait FlightRepository: Send + Sync {
    /// Store a new flight and return it with its generated id
    async fn add(&self, flight: &NewFlight) -> Result<Flight, StoreError>;

    /// Remove a flight
    async fn remove(&self, id: &FlightId) -> Result<(), StoreError>;

    /// Replace the stored state of an existing flight
    async fn update(&self, flight: &Flight) -> Result<(), StoreError>;

    /// Find a flight by ID
    async fn find_by_id(&self, id: &FlightId) -> Result<Option<Flight>, StoreError>;

    /// All stored flights
    async fn find_all(&self) -> Result<Vec<Flight>, StoreError>;
}

/// Repository for Destination entities
#[async_trait]
pub trait DestinationRepository: Send + Sync {
    /// Store a new destination and return it with its generated id
    async fn add(&self, destination: &NewDestination) -> Result<Destination, StoreError>;

    /// Remove a destination
    async fn remove(&self, id: &DestinationId) -> Result<(), StoreError>;

    /// Replace the stored state of an existing destination
    async fn update(&self, destination: &Destination) -> Result<(), StoreError>;

    /// Find a destination by ID
    async fn find_by_id(&self, id: &DestinationId) -> Result<Option<Destination>, StoreError>;

    /// Destinations in a country
    async fn find_by_country(&self, country: &str) -> Result<Vec<Destination>, StoreError>;

    /// Destinations with a city name
    async fn find_by_city(&self, city: &str) -> Result<Vec<Destination>, StoreError>;

    /// All stored destinations
    async fn find_all(&self) -> Result<Vec<Destination>, StoreError>;
}

/// Repository for Steward entities
#[async_trait]
pub trait StewardRepository: Send + Sync {
    async fn add(&self, steward: &NewSteward) -> Result<Steward, StoreError>;

    async fn remove(&self, id: &StewardId) -> Result<(), StoreError>;

    async fn update(&self, steward: &Steward) -> Result<(), StoreError>;

    async fn find_by_id(&self, id: &StewardId) -> Result<Option<Steward>, StoreError>;

    async fn find_all(&self) -> Result<Vec<Steward>, StoreError>;
}

/// Repository for Airplane entities
#[async_trait]
pub trait AirplaneRepository: Send + Sync {
    async fn add(&self, airplane: &NewAirplane) -> Result<Airplane, StoreError>;

    async fn remove(&self, id: &AirplaneId) -> Result<(), StoreError>;

    async fn update(&self, airplane: &Airplane) -> Result<(), StoreError>;

    async fn find_by_id(&self, id: &AirplaneId) -> Result<Option<Airplane>, StoreError>;

    async fn find_all(&self) -> Result<Vec<Airplane>, StoreError>;
}
