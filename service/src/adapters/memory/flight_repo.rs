//! In-memory adapter for FlightRepository

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{Flight, FlightId, NewFlight};
use crate::domain::ports::FlightRepository;
use crate::error::StoreError;

/// In-memory implementation of FlightRepository
#[derive(Default, Clone)]
pub struct InMemoryFlightRepository {
    flights: Arc<RwLock<HashMap<FlightId, Flight>>>,
}

impl InMemoryFlightRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start out holding `flights`, keyed by their existing ids
    pub fn from_flights(flights: impl IntoIterator<Item = Flight>) -> Self {
        let flights: HashMap<_, _> = flights.into_iter().map(|f| (f.id, f)).collect();
        Self {
            flights: Arc::new(RwLock::new(flights)),
        }
    }
}

#[async_trait]
impl FlightRepository for InMemoryFlightRepository {
    async fn add(&self, new_flight: &NewFlight) -> Result<Flight, StoreError> {
        let flight = Flight {
            id: FlightId::new(),
            departure_time: new_flight.departure_time,
            arrival_time: new_flight.arrival_time,
            departure_location: new_flight.departure_location,
            arrival_location: new_flight.arrival_location,
            airplane: new_flight.airplane,
            stewards: new_flight.stewards.clone(),
        };

        let mut flights = self.flights.write().await;
        flights.insert(flight.id, flight.clone());
        Ok(flight)
    }

    async fn remove(&self, id: &FlightId) -> Result<(), StoreError> {
        let mut flights = self.flights.write().await;
        flights
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(format!("Flight {} not found", id)))
    }

    async fn update(&self, flight: &Flight) -> Result<(), StoreError> {
        let mut flights = self.flights.write().await;
        if let Some(stored) = flights.get_mut(&flight.id) {
            *stored = flight.clone();
            Ok(())
        } else {
            Err(StoreError::NotFound(format!("Flight {} not found", flight.id)))
        }
    }

    async fn find_by_id(&self, id: &FlightId) -> Result<Option<Flight>, StoreError> {
        let flights = self.flights.read().await;
        Ok(flights.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Flight>, StoreError> {
        let flights = self.flights.read().await;
        Ok(flights.values().cloned().collect())
    }
}
