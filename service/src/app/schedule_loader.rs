//! Schedule loader
//!
//! Seeds the stores from a JSON schedule document. Records carry a
//! document-local `key`; flights refer to destinations, airplanes and
//! stewards by those keys. Everything goes through the services, so the usual
//! validation applies while loading.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::app::validation::{require_interval, require_non_blank};
use crate::app::{AirplaneService, DestinationService, FlightService, StewardService};
use crate::domain::entities::{
    AirplaneId, DestinationId, FlightId, NewAirplane, NewFlight, Steward, StewardId,
};
use crate::domain::ports::{
    AirplaneRepository, DestinationRepository, FlightRepository, StewardRepository,
};
use crate::error::{LoadError, ServiceError, StoreError};

#[derive(Debug, Clone, Deserialize)]
pub struct DestinationRecord {
    pub key: String,
    pub country: String,
    pub city: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AirplaneRecord {
    pub key: String,
    #[serde(flatten)]
    pub airplane: NewAirplane,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StewardRecord {
    pub key: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlightRecord {
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub airplane: Option<String>,
    #[serde(default)]
    pub stewards: Vec<String>,
}

/// A complete schedule as stored on disk
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduleDocument {
    #[serde(default)]
    pub destinations: Vec<DestinationRecord>,
    #[serde(default)]
    pub airplanes: Vec<AirplaneRecord>,
    #[serde(default)]
    pub stewards: Vec<StewardRecord>,
    #[serde(default)]
    pub flights: Vec<FlightRecord>,
}

impl ScheduleDocument {
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    pub async fn from_file(path: &Path) -> Result<Self, LoadError> {
        let json = tokio::fs::read_to_string(path).await?;
        Self::from_json(&json)
    }

    /// Reject the document if any record would fail while loading
    pub fn check(&self) -> Result<(), ServiceError> {
        let mut places = HashSet::new();
        for record in &self.destinations {
            require_unique_key(&mut places, &record.key, "destination")?;
            require_non_blank("country", &record.country)?;
            require_non_blank("city", &record.city)?;
        }

        let mut fleet = HashSet::new();
        for record in &self.airplanes {
            require_unique_key(&mut fleet, &record.key, "airplane")?;
            require_non_blank("name", &record.airplane.name)?;
            require_non_blank("type", &record.airplane.kind)?;
        }

        let mut crew = HashSet::new();
        for record in &self.stewards {
            require_unique_key(&mut crew, &record.key, "steward")?;
            require_non_blank("first name", &record.first_name)?;
            require_non_blank("last name", &record.last_name)?;
        }

        for record in &self.flights {
            require_known_key(&places, &record.from, "destination")?;
            require_known_key(&places, &record.to, "destination")?;
            if let Some(key) = &record.airplane {
                require_known_key(&fleet, key, "airplane")?;
            }
            require_interval(record.departure_time, record.arrival_time)?;

            let mut assigned = HashSet::new();
            for key in &record.stewards {
                require_known_key(&crew, key, "steward")?;
                if !assigned.insert(key.as_str()) {
                    return Err(ServiceError::invalid(format!(
                        "steward key '{}' is assigned more than once to a flight",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Ids assigned to the records of a loaded document
#[derive(Debug, Default)]
pub struct LoadedSchedule {
    pub destinations: HashMap<String, DestinationId>,
    pub airplanes: HashMap<String, AirplaneId>,
    pub stewards: HashMap<String, StewardId>,
    /// Flight ids in document order
    pub flights: Vec<FlightId>,
}

pub struct ScheduleLoader<DR, FR, SR, AR>
where
    DR: DestinationRepository,
    FR: FlightRepository,
    SR: StewardRepository,
    AR: AirplaneRepository,
{
    destinations: Arc<DestinationService<DR, FR>>,
    flights: Arc<FlightService<FR>>,
    stewards: Arc<StewardService<SR>>,
    airplanes: Arc<AirplaneService<AR>>,
}

impl<DR, FR, SR, AR> ScheduleLoader<DR, FR, SR, AR>
where
    DR: DestinationRepository,
    FR: FlightRepository,
    SR: StewardRepository,
    AR: AirplaneRepository,
{
    pub fn new(
        destinations: Arc<DestinationService<DR, FR>>,
        flights: Arc<FlightService<FR>>,
        stewards: Arc<StewardService<SR>>,
        airplanes: Arc<AirplaneService<AR>>,
    ) -> Self {
        Self {
            destinations,
            flights,
            stewards,
            airplanes,
        }
    }

    /// Create every record of `document`
    ///
    /// The whole document is checked first: section keys must be unique, every
    /// flight reference must resolve, and names and intervals must pass the
    /// services' own checks. A rejected document writes nothing.
    pub async fn load(&self, document: ScheduleDocument) -> Result<LoadedSchedule, LoadError> {
        document.check()?;

        let mut loaded = LoadedSchedule::default();

        for record in &document.destinations {
            let id = self
                .destinations
                .create_destination(&record.country, &record.city)
                .await?;
            loaded.destinations.insert(record.key.clone(), id);
        }

        for record in document.airplanes {
            let id = self.airplanes.create_airplane(record.airplane).await?;
            loaded.airplanes.insert(record.key, id);
        }

        let mut crew: HashMap<String, Steward> = HashMap::new();
        for record in document.stewards {
            let id = self
                .stewards
                .create_steward(&record.first_name, &record.last_name)
                .await?;
            loaded.stewards.insert(record.key.clone(), id);
            crew.insert(
                record.key,
                Steward {
                    id,
                    first_name: record.first_name,
                    last_name: record.last_name,
                },
            );
        }

        for record in &document.flights {
            let from = lookup(&loaded.destinations, &record.from, "destination")?;
            let to = lookup(&loaded.destinations, &record.to, "destination")?;
            let mut new_flight =
                NewFlight::new(record.departure_time, record.arrival_time, from, to);
            if let Some(key) = &record.airplane {
                new_flight = new_flight.with_airplane(lookup(&loaded.airplanes, key, "airplane")?);
            }

            let flight_id = self.flights.add_flight(new_flight).await?;
            let mut flight = self.flights.get_flight(&flight_id).await?.ok_or_else(|| {
                ServiceError::flight(
                    "Flight disappeared after loading",
                    StoreError::NotFound(format!("Flight {} not found", flight_id)),
                )
            })?;
            for key in &record.stewards {
                let steward = crew
                    .get(key)
                    .ok_or_else(|| unknown_key("steward", key))?;
                self.flights.add_steward(&mut flight, steward).await?;
            }
            loaded.flights.push(flight_id);
        }

        tracing::info!(
            destinations = loaded.destinations.len(),
            airplanes = loaded.airplanes.len(),
            stewards = loaded.stewards.len(),
            flights = loaded.flights.len(),
            "Schedule loaded"
        );
        Ok(loaded)
    }

    pub async fn load_file(&self, path: &Path) -> Result<LoadedSchedule, LoadError> {
        tracing::info!(path = %path.display(), "Loading schedule");
        let document = ScheduleDocument::from_file(path).await?;
        self.load(document).await
    }
}

fn require_unique_key<'a>(
    keys: &mut HashSet<&'a str>,
    key: &'a str,
    kind: &str,
) -> Result<(), ServiceError> {
    if !keys.insert(key) {
        return Err(ServiceError::invalid(format!(
            "duplicate {} key '{}' in schedule",
            kind, key
        )));
    }
    Ok(())
}

fn require_known_key(keys: &HashSet<&str>, key: &str, kind: &str) -> Result<(), ServiceError> {
    if !keys.contains(key) {
        return Err(unknown_key(kind, key));
    }
    Ok(())
}

fn lookup<T: Copy>(map: &HashMap<String, T>, key: &str, kind: &str) -> Result<T, ServiceError> {
    map.get(key).copied().ok_or_else(|| unknown_key(kind, key))
}

fn unknown_key(kind: &str, key: &str) -> ServiceError {
    ServiceError::invalid(format!("unknown {} key '{}' in schedule", kind, key))
}
