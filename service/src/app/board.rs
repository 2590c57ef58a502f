//! Departures board
//!
//! A point-in-time summary combining the flight and destination services:
//! which flights are in the air, and how much traffic each destination sees.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::app::{DestinationService, FlightService};
use crate::domain::entities::{Destination, Flight};
use crate::domain::ports::{DestinationRepository, FlightRepository};
use crate::error::ServiceError;

/// Traffic through one destination
#[derive(Debug, Clone, Serialize)]
pub struct DestinationTraffic {
    pub destination: Destination,
    pub incoming: usize,
    pub outgoing: usize,
}

/// Board state at an instant
#[derive(Debug, Clone, Serialize)]
pub struct BoardSnapshot {
    pub at: DateTime<Utc>,
    /// Flights in the air at `at`, earliest departure first
    pub airborne: Vec<Flight>,
    /// Destinations ordered by country, then city
    pub traffic: Vec<DestinationTraffic>,
}

pub struct BoardService<DR, FR>
where
    DR: DestinationRepository,
    FR: FlightRepository,
{
    flights: Arc<FlightService<FR>>,
    destinations: Arc<DestinationService<DR, FR>>,
}

impl<DR, FR> BoardService<DR, FR>
where
    DR: DestinationRepository,
    FR: FlightRepository,
{
    pub fn new(
        flights: Arc<FlightService<FR>>,
        destinations: Arc<DestinationService<DR, FR>>,
    ) -> Self {
        Self {
            flights,
            destinations,
        }
    }

    pub async fn snapshot(&self, at: DateTime<Utc>) -> Result<BoardSnapshot, ServiceError> {
        let mut airborne = self.flights.get_current_flights(at).await?;
        airborne.sort_by_key(|f| (f.departure_time, f.id.0));

        let mut destinations = self.destinations.get_all_destinations().await?;
        destinations.sort_by(|a, b| (&a.country, &a.city).cmp(&(&b.country, &b.city)));

        let mut traffic = Vec::with_capacity(destinations.len());
        for destination in destinations {
            let incoming = self
                .destinations
                .get_all_incoming_flights(&destination)
                .await?
                .len();
            let outgoing = self
                .destinations
                .get_all_outgoing_flights(&destination)
                .await?
                .len();
            traffic.push(DestinationTraffic {
                destination,
                incoming,
                outgoing,
            });
        }

        Ok(BoardSnapshot {
            at,
            airborne,
            traffic,
        })
    }
}
