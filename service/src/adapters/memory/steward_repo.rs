//! In-memory adapter for StewardRepository

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{NewSteward, Steward, StewardId};
use crate::domain::ports::StewardRepository;
use crate::error::StoreError;

/// In-memory implementation of StewardRepository
#[derive(Default, Clone)]
pub struct InMemoryStewardRepository {
    stewards: Arc<RwLock<HashMap<StewardId, Steward>>>,
}

impl InMemoryStewardRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StewardRepository for InMemoryStewardRepository {
    async fn add(&self, new_steward: &NewSteward) -> Result<Steward, StoreError> {
        let steward = Steward {
            id: StewardId::new(),
            first_name: new_steward.first_name.clone(),
            last_name: new_steward.last_name.clone(),
        };

        let mut stewards = self.stewards.write().await;
        stewards.insert(steward.id, steward.clone());
        Ok(steward)
    }

    async fn remove(&self, id: &StewardId) -> Result<(), StoreError> {
        let mut stewards = self.stewards.write().await;
        stewards
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(format!("Steward {} not found", id)))
    }

    async fn update(&self, steward: &Steward) -> Result<(), StoreError> {
        let mut stewards = self.stewards.write().await;
        if let Some(stored) = stewards.get_mut(&steward.id) {
            *stored = steward.clone();
            Ok(())
        } else {
            Err(StoreError::NotFound(format!(
                "Steward {} not found",
                steward.id
            )))
        }
    }

    async fn find_by_id(&self, id: &StewardId) -> Result<Option<Steward>, StoreError> {
        let stewards = self.stewards.read().await;
        Ok(stewards.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Steward>, StoreError> {
        let stewards = self.stewards.read().await;
        Ok(stewards.values().cloned().collect())
    }
}
