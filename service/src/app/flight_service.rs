//! Flight service
//!
//! Temporal queries over stored flights (duration, since, in range, airborne)
//! and steward assignment. Store failures are reported as
//! `ServiceError::FlightPersistence`; bad input as `InvalidArgument`.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;

use crate::app::validation::{require_interval, require_range, require_unique_stewards};
use crate::domain::entities::{Flight, FlightId, NewFlight, Steward};
use crate::domain::ports::FlightRepository;
use crate::error::{ServiceError, StoreError};

/// One async mutex per flight, serializing steward assignment and updates
///
/// Entries are created on first use and only removed by `delete_flight`, so the
/// registry holds one entry for every flight that was ever assigned to or
/// updated through this service and not deleted since.
#[derive(Default)]
struct AssignmentLocks {
    locks: Mutex<HashMap<FlightId, Arc<Mutex<()>>>>,
}

impl AssignmentLocks {
    async fn for_flight(&self, id: FlightId) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks.entry(id).or_default().clone()
    }

    async fn forget(&self, id: &FlightId) {
        self.locks.lock().await.remove(id);
    }
}

/// Service for querying and managing flights
pub struct FlightService<FR>
where
    FR: FlightRepository,
{
    flights: Arc<FR>,
    assignment_locks: AssignmentLocks,
}

impl<FR> FlightService<FR>
where
    FR: FlightRepository,
{
    pub fn new(flights: Arc<FR>) -> Self {
        Self {
            flights,
            assignment_locks: AssignmentLocks::default(),
        }
    }

    /// Store a new flight, returning its generated id
    pub async fn add_flight(&self, flight: NewFlight) -> Result<FlightId, ServiceError> {
        require_interval(flight.departure_time, flight.arrival_time)?;
        require_unique_stewards(&flight.stewards)?;

        let created = self
            .flights
            .add(&flight)
            .await
            .map_err(|e| ServiceError::flight("Failed to add flight", e))?;

        tracing::info!(
            flight_id = %created.id,
            departure = %created.departure_time,
            arrival = %created.arrival_time,
            "Flight added"
        );
        Ok(created.id)
    }

    pub async fn delete_flight(&self, flight: &Flight) -> Result<(), ServiceError> {
        self.flights
            .remove(&flight.id)
            .await
            .map_err(|e| ServiceError::flight(format!("Failed to delete flight {}", flight.id), e))?;
        self.assignment_locks.forget(&flight.id).await;

        tracing::info!(flight_id = %flight.id, "Flight deleted");
        Ok(())
    }

    /// Replace the stored flight with `flight`
    ///
    /// Runs under the same per-flight lock as `add_steward`, so an update never
    /// interleaves with an assignment. The caller's copy wins: an update built
    /// from a copy read before an assignment still replaces that assignment.
    pub async fn update_flight(&self, flight: &Flight) -> Result<(), ServiceError> {
        require_interval(flight.departure_time, flight.arrival_time)?;
        require_unique_stewards(&flight.stewards)?;

        let lock = self.assignment_locks.for_flight(flight.id).await;
        let _guard = lock.lock().await;

        self.flights
            .update(flight)
            .await
            .map_err(|e| ServiceError::flight(format!("Failed to update flight {}", flight.id), e))?;

        tracing::info!(flight_id = %flight.id, "Flight updated");
        Ok(())
    }

    /// Find a flight by id; a missing flight is `Ok(None)`
    pub async fn get_flight(&self, id: &FlightId) -> Result<Option<Flight>, ServiceError> {
        self.flights
            .find_by_id(id)
            .await
            .map_err(|e| ServiceError::flight(format!("Failed to get flight {}", id), e))
    }

    pub async fn get_all_flights(&self) -> Result<Vec<Flight>, ServiceError> {
        self.flights
            .find_all()
            .await
            .map_err(|e| ServiceError::flight("Failed to list flights", e))
    }

    /// Duration between departure and arrival
    pub fn get_flight_time(&self, flight: &Flight) -> Result<Duration, ServiceError> {
        require_interval(flight.departure_time, flight.arrival_time)?;
        Ok(flight.duration())
    }

    /// Flights departing or arriving strictly after `since`
    pub async fn get_flights_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<Flight>, ServiceError> {
        let flights = self.filter_flights(|f| f.is_active_after(since)).await?;
        tracing::debug!(%since, count = flights.len(), "Flights since");
        Ok(flights)
    }

    /// Flights whose interval intersects `[start, end]`, both ends inclusive
    pub async fn get_flights_in_time_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Flight>, ServiceError> {
        require_range(start, end)?;

        let flights = self.filter_flights(|f| f.overlaps(start, end)).await?;
        tracing::debug!(%start, %end, count = flights.len(), "Flights in time range");
        Ok(flights)
    }

    /// Flights in the sky at `now`
    pub async fn get_current_flights(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<Flight>, ServiceError> {
        let flights = self.filter_flights(|f| f.is_airborne_at(now)).await?;
        tracing::debug!(%now, count = flights.len(), "Current flights");
        Ok(flights)
    }

    /// Assign a steward to a flight and persist it
    ///
    /// Assignments to the same flight are serialized: the stored flight is
    /// re-read under the flight's lock, so concurrent calls cannot lose each
    /// other's updates. On success `flight` is refreshed with the stored state.
    pub async fn add_steward(
        &self,
        flight: &mut Flight,
        steward: &Steward,
    ) -> Result<(), ServiceError> {
        if flight.has_steward(&steward.id) {
            return Err(already_assigned(flight, steward));
        }

        let lock = self.assignment_locks.for_flight(flight.id).await;
        let _guard = lock.lock().await;

        let mut stored = self
            .flights
            .find_by_id(&flight.id)
            .await
            .map_err(|e| ServiceError::flight(format!("Failed to load flight {}", flight.id), e))?
            .ok_or_else(|| {
                ServiceError::flight(
                    format!("Failed to add steward to flight {}", flight.id),
                    StoreError::NotFound(format!("Flight {} not found", flight.id)),
                )
            })?;

        if !stored.assign_steward(steward.id) {
            return Err(already_assigned(flight, steward));
        }

        self.flights.update(&stored).await.map_err(|e| {
            ServiceError::flight(format!("Failed to add steward to flight {}", flight.id), e)
        })?;

        tracing::info!(
            flight_id = %stored.id,
            steward_id = %steward.id,
            stewards = stored.stewards.len(),
            "Steward assigned"
        );
        *flight = stored;
        Ok(())
    }

    async fn filter_flights<F>(&self, predicate: F) -> Result<Vec<Flight>, ServiceError>
    where
        F: Fn(&Flight) -> bool,
    {
        let flights = self.get_all_flights().await?;
        Ok(flights.into_iter().filter(|f| predicate(f)).collect())
    }
}

fn already_assigned(flight: &Flight, steward: &Steward) -> ServiceError {
    ServiceError::invalid(format!(
        "steward {} is already assigned to flight {}",
        steward.id, flight.id
    ))
}
