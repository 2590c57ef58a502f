//! Airplane service

use std::sync::Arc;

use crate::app::validation::require_non_blank;
use crate::domain::entities::{Airplane, AirplaneId, NewAirplane};
use crate::domain::ports::AirplaneRepository;
use crate::error::ServiceError;

/// Service for managing the fleet
pub struct AirplaneService<AR>
where
    AR: AirplaneRepository,
{
    airplanes: Arc<AR>,
}

impl<AR> AirplaneService<AR>
where
    AR: AirplaneRepository,
{
    pub fn new(airplanes: Arc<AR>) -> Self {
        Self { airplanes }
    }

    /// Register an airplane; an identical model already in the fleet is logged, not rejected
    pub async fn create_airplane(&self, airplane: NewAirplane) -> Result<AirplaneId, ServiceError> {
        require_non_blank("name", &airplane.name)?;
        require_non_blank("type", &airplane.kind)?;

        let fleet = self.get_all_airplanes().await?;
        if let Some(existing) = fleet.iter().find(|a| a.same_model(&airplane)) {
            tracing::warn!(existing_id = %existing.id, name = %airplane.name, "Creating duplicate airplane");
        }

        let created = self.airplanes.add(&airplane).await.map_err(|e| {
            ServiceError::airplane(format!("Failed to add airplane {}", airplane.name), e)
        })?;

        tracing::info!(airplane_id = %created.id, capacity = created.capacity, "Airplane created");
        Ok(created.id)
    }

    pub async fn delete_airplane(&self, airplane: &Airplane) -> Result<(), ServiceError> {
        self.airplanes.remove(&airplane.id).await.map_err(|e| {
            ServiceError::airplane(format!("Failed to delete airplane {}", airplane.id), e)
        })
    }

    pub async fn update_airplane(&self, airplane: &Airplane) -> Result<(), ServiceError> {
        require_non_blank("name", &airplane.name)?;
        require_non_blank("type", &airplane.kind)?;

        self.airplanes.update(airplane).await.map_err(|e| {
            ServiceError::airplane(format!("Failed to update airplane {}", airplane.id), e)
        })
    }

    pub async fn get_airplane(&self, id: &AirplaneId) -> Result<Option<Airplane>, ServiceError> {
        self.airplanes
            .find_by_id(id)
            .await
            .map_err(|e| ServiceError::airplane(format!("Failed to get airplane {}", id), e))
    }

    pub async fn get_all_airplanes(&self) -> Result<Vec<Airplane>, ServiceError> {
        self.airplanes
            .find_all()
            .await
            .map_err(|e| ServiceError::airplane("Failed to list airplanes", e))
    }
}
