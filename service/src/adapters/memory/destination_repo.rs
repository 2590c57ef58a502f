//! In-memory adapter for DestinationRepository

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{Destination, DestinationId, NewDestination};
use crate::domain::ports::DestinationRepository;
use crate::error::StoreError;

/// In-memory implementation of DestinationRepository
#[derive(Default, Clone)]
pub struct InMemoryDestinationRepository {
    destinations: Arc<RwLock<HashMap<DestinationId, Destination>>>,
}

impl InMemoryDestinationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start out holding `destinations`, keyed by their existing ids
    pub fn from_destinations(destinations: impl IntoIterator<Item = Destination>) -> Self {
        let destinations: HashMap<_, _> = destinations.into_iter().map(|d| (d.id, d)).collect();
        Self {
            destinations: Arc::new(RwLock::new(destinations)),
        }
    }

    async fn filter<F>(&self, predicate: F) -> Vec<Destination>
    where
        F: Fn(&Destination) -> bool,
    {
        let destinations = self.destinations.read().await;
        destinations
            .values()
            .filter(|d| predicate(d))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl DestinationRepository for InMemoryDestinationRepository {
    async fn add(&self, new_destination: &NewDestination) -> Result<Destination, StoreError> {
        let destination = Destination {
            id: DestinationId::new(),
            country: new_destination.country.clone(),
            city: new_destination.city.clone(),
        };

        let mut destinations = self.destinations.write().await;
        destinations.insert(destination.id, destination.clone());
        Ok(destination)
    }

    async fn remove(&self, id: &DestinationId) -> Result<(), StoreError> {
        let mut destinations = self.destinations.write().await;
        destinations
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(format!("Destination {} not found", id)))
    }

    async fn update(&self, destination: &Destination) -> Result<(), StoreError> {
        let mut destinations = self.destinations.write().await;
        if let Some(stored) = destinations.get_mut(&destination.id) {
            *stored = destination.clone();
            Ok(())
        } else {
            Err(StoreError::NotFound(format!(
                "Destination {} not found",
                destination.id
            )))
        }
    }

    async fn find_by_id(&self, id: &DestinationId) -> Result<Option<Destination>, StoreError> {
        let destinations = self.destinations.read().await;
        Ok(destinations.get(id).cloned())
    }

    async fn find_by_country(&self, country: &str) -> Result<Vec<Destination>, StoreError> {
        Ok(self.filter(|d| d.country == country).await)
    }

    async fn find_by_city(&self, city: &str) -> Result<Vec<Destination>, StoreError> {
        Ok(self.filter(|d| d.city == city).await)
    }

    async fn find_all(&self) -> Result<Vec<Destination>, StoreError> {
        let destinations = self.destinations.read().await;
        Ok(destinations.values().cloned().collect())
    }
}
