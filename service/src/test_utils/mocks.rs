//! Mock implementations of port traits
//!
//! `FailingStore` implements every repository port and fails each call with a
//! backend error, for exercising the services' error wrapping.

use async_trait::async_trait;

use crate::domain::entities::{
    Airplane, AirplaneId, Destination, DestinationId, Flight, FlightId, NewAirplane,
    NewDestination, NewFlight, NewSteward, Steward, StewardId,
};
use crate::domain::ports::{
    AirplaneRepository, DestinationRepository, FlightRepository, StewardRepository,
};
use crate::error::StoreError;

#[derive(Default)]
pub struct FailingStore;

impl FailingStore {
    pub fn new() -> Self {
        Self
    }
}

fn backend_down<T>() -> Result<T, StoreError> {
    Err(StoreError::Backend("store unavailable".to_string()))
}

#[async_trait]
impl FlightRepository for FailingStore {
    async fn add(&self, _flight: &NewFlight) -> Result<Flight, StoreError> {
        backend_down()
    }

    async fn remove(&self, _id: &FlightId) -> Result<(), StoreError> {
        backend_down()
    }

    async fn update(&self, _flight: &Flight) -> Result<(), StoreError> {
        backend_down()
    }

    async fn find_by_id(&self, _id: &FlightId) -> Result<Option<Flight>, StoreError> {
        backend_down()
    }

    async fn find_all(&self) -> Result<Vec<Flight>, StoreError> {
        backend_down()
    }
}

#[async_trait]
impl DestinationRepository for FailingStore {
    async fn add(&self, _destination: &NewDestination) -> Result<Destination, StoreError> {
        backend_down()
    }

    async fn remove(&self, _id: &DestinationId) -> Result<(), StoreError> {
        backend_down()
    }

    async fn update(&self, _destination: &Destination) -> Result<(), StoreError> {
        backend_down()
    }

    async fn find_by_id(&self, _id: &DestinationId) -> Result<Option<Destination>, StoreError> {
        backend_down()
    }

    async fn find_by_country(&self, _country: &str) -> Result<Vec<Destination>, StoreError> {
        backend_down()
    }

    async fn find_by_city(&self, _city: &str) -> Result<Vec<Destination>, StoreError> {
        backend_down()
    }

    async fn find_all(&self) -> Result<Vec<Destination>, StoreError> {
        backend_down()
    }
}

#[async_trait]
impl StewardRepository for FailingStore {
    async fn add(&self, _steward: &NewSteward) -> Result<Steward, StoreError> {
        backend_down()
    }

    async fn remove(&self, _id: &StewardId) -> Result<(), StoreError> {
        backend_down()
    }

    async fn update(&self, _steward: &Steward) -> Result<(), StoreError> {
        backend_down()
    }

    async fn find_by_id(&self, _id: &StewardId) -> Result<Option<Steward>, StoreError> {
        backend_down()
    }

    async fn find_all(&self) -> Result<Vec<Steward>, StoreError> {
        backend_down()
    }
}

#[async_trait]
impl AirplaneRepository for FailingStore {
    async fn add(&self, _airplane: &NewAirplane) -> Result<Airplane, StoreError> {
        backend_down()
    }

    async fn remove(&self, _id: &AirplaneId) -> Result<(), StoreError> {
        backend_down()
    }

    async fn update(&self, _airplane: &Airplane) -> Result<(), StoreError> {
        backend_down()
    }

    async fn find_by_id(&self, _id: &AirplaneId) -> Result<Option<Airplane>, StoreError> {
        backend_down()
    }

    async fn find_all(&self) -> Result<Vec<Airplane>, StoreError> {
        backend_down()
    }
}
