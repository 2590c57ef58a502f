//! In-memory adapter for AirplaneRepository

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{Airplane, AirplaneId, NewAirplane};
use crate::domain::ports::AirplaneRepository;
use crate::error::StoreError;

/// In-memory implementation of AirplaneRepository
#[derive(Default, Clone)]
pub struct InMemoryAirplaneRepository {
    airplanes: Arc<RwLock<HashMap<AirplaneId, Airplane>>>,
}

impl InMemoryAirplaneRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AirplaneRepository for InMemoryAirplaneRepository {
    async fn add(&self, new_airplane: &NewAirplane) -> Result<Airplane, StoreError> {
        let airplane = Airplane {
            id: AirplaneId::new(),
            name: new_airplane.name.clone(),
            kind: new_airplane.kind.clone(),
            capacity: new_airplane.capacity,
        };

        let mut airplanes = self.airplanes.write().await;
        airplanes.insert(airplane.id, airplane.clone());
        Ok(airplane)
    }

    async fn remove(&self, id: &AirplaneId) -> Result<(), StoreError> {
        let mut airplanes = self.airplanes.write().await;
        airplanes
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(format!("Airplane {} not found", id)))
    }

    async fn update(&self, airplane: &Airplane) -> Result<(), StoreError> {
        let mut airplanes = self.airplanes.write().await;
        if let Some(stored) = airplanes.get_mut(&airplane.id) {
            *stored = airplane.clone();
            Ok(())
        } else {
            Err(StoreError::NotFound(format!(
                "Airplane {} not found",
                airplane.id
            )))
        }
    }

    async fn find_by_id(&self, id: &AirplaneId) -> Result<Option<Airplane>, StoreError> {
        let airplanes = self.airplanes.read().await;
        Ok(airplanes.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Airplane>, StoreError> {
        let airplanes = self.airplanes.read().await;
        Ok(airplanes.values().cloned().collect())
    }
}
