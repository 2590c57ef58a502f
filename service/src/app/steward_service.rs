//! Steward service
//!
//! Thin CRUD layer over the steward repository.

use std::sync::Arc;

use crate::app::validation::require_non_blank;
use crate::domain::entities::{NewSteward, Steward, StewardId};
use crate::domain::ports::StewardRepository;
use crate::error::ServiceError;

/// Service for managing stewards
pub struct StewardService<SR>
where
    SR: StewardRepository,
{
    stewards: Arc<SR>,
}

impl<SR> StewardService<SR>
where
    SR: StewardRepository,
{
    pub fn new(stewards: Arc<SR>) -> Self {
        Self { stewards }
    }

    pub async fn create_steward(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<StewardId, ServiceError> {
        require_non_blank("first name", first_name)?;
        require_non_blank("last name", last_name)?;

        let new_steward = NewSteward {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        };
        let steward = self.stewards.add(&new_steward).await.map_err(|e| {
            ServiceError::steward(
                format!("Failed to add steward {} {}", first_name, last_name),
                e,
            )
        })?;

        tracing::info!(steward_id = %steward.id, "Steward created");
        Ok(steward.id)
    }

    pub async fn delete_steward(&self, steward: &Steward) -> Result<(), ServiceError> {
        self.stewards
            .remove(&steward.id)
            .await
            .map_err(|e| ServiceError::steward(format!("Failed to delete steward {}", steward.id), e))
    }

    pub async fn update_steward(&self, steward: &Steward) -> Result<(), ServiceError> {
        require_non_blank("first name", &steward.first_name)?;
        require_non_blank("last name", &steward.last_name)?;

        self.stewards
            .update(steward)
            .await
            .map_err(|e| ServiceError::steward(format!("Failed to update steward {}", steward.id), e))
    }

    pub async fn get_steward(&self, id: &StewardId) -> Result<Option<Steward>, ServiceError> {
        self.stewards
            .find_by_id(id)
            .await
            .map_err(|e| ServiceError::steward(format!("Failed to get steward {}", id), e))
    }

    pub async fn list_all_stewards(&self) -> Result<Vec<Steward>, ServiceError> {
        self.stewards
            .find_all()
            .await
            .map_err(|e| ServiceError::steward("Failed to list stewards", e))
    }
}
