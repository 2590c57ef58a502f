//! Destination service
//!
//! Destination management and the incoming/outgoing flight views of a
//! destination. Both views are linear scans over all stored flights.

use std::sync::Arc;

use crate::app::validation::require_non_blank;
use crate::domain::entities::{Destination, DestinationId, Flight, NewDestination};
use crate::domain::ports::{DestinationRepository, FlightRepository};
use crate::error::ServiceError;

/// Service for managing destinations
pub struct DestinationService<DR, FR>
where
    DR: DestinationRepository,
    FR: FlightRepository,
{
    destinations: Arc<DR>,
    flights: Arc<FR>,
}

impl<DR, FR> DestinationService<DR, FR>
where
    DR: DestinationRepository,
    FR: FlightRepository,
{
    pub fn new(destinations: Arc<DR>, flights: Arc<FR>) -> Self {
        Self {
            destinations,
            flights,
        }
    }

    /// Create a destination, returning its generated id
    ///
    /// Duplicate (country, city) pairs are allowed; creating one is logged.
    pub async fn create_destination(
        &self,
        country: &str,
        city: &str,
    ) -> Result<DestinationId, ServiceError> {
        require_non_blank("country", country)?;
        require_non_blank("city", city)?;

        let same_city = self.destinations.find_by_city(city).await.map_err(|e| {
            ServiceError::destination(format!("Failed to look up destinations in {}", city), e)
        })?;
        if let Some(existing) = same_city.iter().find(|d| d.is_at(country, city)) {
            tracing::warn!(
                existing_id = %existing.id,
                %country,
                %city,
                "Creating duplicate destination"
            );
        }

        let new_destination = NewDestination {
            country: country.to_string(),
            city: city.to_string(),
        };
        let destination = self.destinations.add(&new_destination).await.map_err(|e| {
            ServiceError::destination(
                format!("Failed to add destination {}, {}", city, country),
                e,
            )
        })?;

        tracing::info!(destination_id = %destination.id, %destination, "Destination created");
        Ok(destination.id)
    }

    /// Remove a destination; flights referencing it are left untouched
    pub async fn remove_destination(&self, destination: &Destination) -> Result<(), ServiceError> {
        self.destinations
            .remove(&destination.id)
            .await
            .map_err(|e| {
                ServiceError::destination(format!("Failed to remove destination {}", destination), e)
            })?;

        tracing::info!(destination_id = %destination.id, "Destination removed");
        Ok(())
    }

    pub async fn update_destination(&self, destination: &Destination) -> Result<(), ServiceError> {
        require_non_blank("country", &destination.country)?;
        require_non_blank("city", &destination.city)?;

        self.destinations
            .update(destination)
            .await
            .map_err(|e| {
                ServiceError::destination(format!("Failed to update destination {}", destination), e)
            })?;

        tracing::info!(destination_id = %destination.id, "Destination updated");
        Ok(())
    }

    /// Find a destination by id; a missing destination is `Ok(None)`
    pub async fn get_destination_by_id(
        &self,
        id: &DestinationId,
    ) -> Result<Option<Destination>, ServiceError> {
        self.destinations
            .find_by_id(id)
            .await
            .map_err(|e| ServiceError::destination(format!("Failed to get destination {}", id), e))
    }

    pub async fn get_destinations_by_country(
        &self,
        country: &str,
    ) -> Result<Vec<Destination>, ServiceError> {
        self.destinations
            .find_by_country(country)
            .await
            .map_err(|e| {
                ServiceError::destination(
                    format!("Failed to get destinations by country {}", country),
                    e,
                )
            })
    }

    pub async fn get_destinations_by_city(
        &self,
        city: &str,
    ) -> Result<Vec<Destination>, ServiceError> {
        self.destinations.find_by_city(city).await.map_err(|e| {
            ServiceError::destination(format!("Failed to get destinations by city {}", city), e)
        })
    }

    pub async fn get_all_destinations(&self) -> Result<Vec<Destination>, ServiceError> {
        self.destinations
            .find_all()
            .await
            .map_err(|e| ServiceError::destination("Failed to list destinations", e))
    }

    /// Flights arriving at `destination`
    pub async fn get_all_incoming_flights(
        &self,
        destination: &Destination,
    ) -> Result<Vec<Flight>, ServiceError> {
        let flights = self.all_flights_for(destination).await?;
        let incoming: Vec<_> = flights
            .into_iter()
            .filter(|f| f.arrives_at(&destination.id))
            .collect();

        tracing::debug!(destination_id = %destination.id, count = incoming.len(), "Incoming flights");
        Ok(incoming)
    }

    /// Flights departing from `destination`
    pub async fn get_all_outgoing_flights(
        &self,
        destination: &Destination,
    ) -> Result<Vec<Flight>, ServiceError> {
        let flights = self.all_flights_for(destination).await?;
        let outgoing: Vec<_> = flights
            .into_iter()
            .filter(|f| f.departs_from(&destination.id))
            .collect();

        tracing::debug!(destination_id = %destination.id, count = outgoing.len(), "Outgoing flights");
        Ok(outgoing)
    }

    async fn all_flights_for(&self, destination: &Destination) -> Result<Vec<Flight>, ServiceError> {
        self.flights.find_all().await.map_err(|e| {
            ServiceError::destination(
                format!("Failed to get flights for destination {}", destination),
                e,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryDestinationRepository, InMemoryFlightRepository};
    use crate::domain::entities::FlightId;
    use crate::error::{ErrorKind, StoreError};
    use crate::test_utils::{at, test_destination, test_flight, FailingStore};

    type Service = DestinationService<InMemoryDestinationRepository, InMemoryFlightRepository>;

    fn create_service(
        destinations: InMemoryDestinationRepository,
        flights: InMemoryFlightRepository,
    ) -> Service {
        DestinationService::new(Arc::new(destinations), Arc::new(flights))
    }

    fn ids(flights: &[Flight]) -> Vec<FlightId> {
        let mut ids: Vec<_> = flights.iter().map(|f| f.id).collect();
        ids.sort_by_key(|id| id.0);
        ids
    }

    #[tokio::test]
    async fn create_and_get_destination() {
        let service = create_service(
            InMemoryDestinationRepository::new(),
            InMemoryFlightRepository::new(),
        );

        let id = service.create_destination("CZ", "Prague").await.unwrap();
        let found = service.get_destination_by_id(&id).await.unwrap().unwrap();

        assert_eq!(found.country, "CZ");
        assert_eq!(found.city, "Prague");
    }

    #[tokio::test]
    async fn duplicate_destinations_are_permitted() {
        let service = create_service(
            InMemoryDestinationRepository::new(),
            InMemoryFlightRepository::new(),
        );

        let first = service.create_destination("CZ", "Prague").await.unwrap();
        let second = service.create_destination("CZ", "Prague").await.unwrap();

        assert_ne!(first, second);
        let prague = service.get_destinations_by_city("Prague").await.unwrap();
        assert_eq!(prague.len(), 2);
        assert!(prague[0].same_place(&prague[1]));
    }

    #[tokio::test]
    async fn blank_country_rejected() {
        let service = create_service(
            InMemoryDestinationRepository::new(),
            InMemoryFlightRepository::new(),
        );

        let err = service.create_destination("", "Prague").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(service.get_all_destinations().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn lookups_by_country_and_city() {
        let service = create_service(
            InMemoryDestinationRepository::new(),
            InMemoryFlightRepository::new(),
        );
        service.create_destination("CZ", "Prague").await.unwrap();
        service.create_destination("CZ", "Brno").await.unwrap();
        service.create_destination("AT", "Vienna").await.unwrap();

        let czech = service.get_destinations_by_country("CZ").await.unwrap();
        let vienna = service.get_destinations_by_city("Vienna").await.unwrap();
        let all = service.get_all_destinations().await.unwrap();

        assert_eq!(czech.len(), 2);
        assert_eq!(vienna.len(), 1);
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn incoming_and_outgoing_split_by_direction() {
        let prague = test_destination("CZ", "Prague");
        let vienna = test_destination("AT", "Vienna");
        let brno = test_destination("CZ", "Brno");
        let to_vienna = test_flight(&prague, &vienna, at(10, 0), at(11, 30));
        let also_to_vienna = test_flight(&brno, &vienna, at(12, 0), at(13, 0));
        let from_vienna = test_flight(&vienna, &prague, at(14, 0), at(15, 30));
        let service = create_service(
            InMemoryDestinationRepository::new(),
            InMemoryFlightRepository::from_flights([
                to_vienna.clone(),
                also_to_vienna.clone(),
                from_vienna.clone(),
            ]),
        );

        let incoming = service.get_all_incoming_flights(&vienna).await.unwrap();
        let outgoing = service.get_all_outgoing_flights(&vienna).await.unwrap();

        let mut expected = vec![to_vienna.id, also_to_vienna.id];
        expected.sort_by_key(|id| id.0);
        assert_eq!(ids(&incoming), expected);
        assert_eq!(ids(&outgoing), vec![from_vienna.id]);
    }

    #[tokio::test]
    async fn round_trip_flight_is_both_incoming_and_outgoing() {
        let vienna = test_destination("AT", "Vienna");
        let sightseeing = test_flight(&vienna, &vienna, at(10, 0), at(11, 0));
        let service = create_service(
            InMemoryDestinationRepository::new(),
            InMemoryFlightRepository::from_flights([sightseeing.clone()]),
        );

        let incoming = service.get_all_incoming_flights(&vienna).await.unwrap();
        let outgoing = service.get_all_outgoing_flights(&vienna).await.unwrap();

        assert_eq!(ids(&incoming), vec![sightseeing.id]);
        assert_eq!(ids(&outgoing), vec![sightseeing.id]);
    }

    #[tokio::test]
    async fn matching_uses_identity_not_place() {
        let vienna = test_destination("AT", "Vienna");
        let vienna_duplicate = test_destination("AT", "Vienna");
        let prague = test_destination("CZ", "Prague");
        let flight = test_flight(&prague, &vienna, at(10, 0), at(11, 0));
        let service = create_service(
            InMemoryDestinationRepository::new(),
            InMemoryFlightRepository::from_flights([flight]),
        );

        let incoming = service
            .get_all_incoming_flights(&vienna_duplicate)
            .await
            .unwrap();

        assert!(incoming.is_empty());
    }

    #[tokio::test]
    async fn removing_destination_keeps_flights() {
        let prague = test_destination("CZ", "Prague");
        let vienna = test_destination("AT", "Vienna");
        let flight = test_flight(&prague, &vienna, at(10, 0), at(11, 0));
        let flights = InMemoryFlightRepository::from_flights([flight.clone()]);
        let service = create_service(
            InMemoryDestinationRepository::from_destinations([
                prague.clone(),
                vienna.clone(),
            ]),
            flights.clone(),
        );

        service.remove_destination(&vienna).await.unwrap();

        assert!(service.get_destination_by_id(&vienna.id).await.unwrap().is_none());
        let incoming = service.get_all_incoming_flights(&vienna).await.unwrap();
        assert_eq!(ids(&incoming), vec![flight.id]);
    }

    #[tokio::test]
    async fn remove_unknown_destination_reports_not_found() {
        let service = create_service(
            InMemoryDestinationRepository::new(),
            InMemoryFlightRepository::new(),
        );

        let err = service
            .remove_destination(&test_destination("AT", "Vienna"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::DestinationPersistence);
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn update_destination_persists() {
        let mut prague = test_destination("CZ", "Praha");
        let service = create_service(
            InMemoryDestinationRepository::from_destinations([prague.clone()]),
            InMemoryFlightRepository::new(),
        );

        prague.city = "Prague".to_string();
        service.update_destination(&prague).await.unwrap();

        let found = service.get_destination_by_id(&prague.id).await.unwrap().unwrap();
        assert_eq!(found.city, "Prague");
    }

    #[tokio::test]
    async fn flight_store_failure_is_destination_error() {
        let vienna = test_destination("AT", "Vienna");
        let service = DestinationService::new(
            Arc::new(InMemoryDestinationRepository::new()),
            Arc::new(FailingStore::new()),
        );

        let err = service.get_all_incoming_flights(&vienna).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::DestinationPersistence);
        assert!(matches!(err.store_error(), Some(StoreError::Backend(_))));
    }

    #[tokio::test]
    async fn destination_store_failure_is_wrapped() {
        let service = DestinationService::new(
            Arc::new(FailingStore::new()),
            Arc::new(InMemoryFlightRepository::new()),
        );

        let create = service.create_destination("CZ", "Prague").await.unwrap_err();
        let by_country = service.get_destinations_by_country("CZ").await.unwrap_err();

        assert_eq!(create.kind(), ErrorKind::DestinationPersistence);
        assert_eq!(by_country.kind(), ErrorKind::DestinationPersistence);
    }
}
