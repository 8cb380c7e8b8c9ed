use async_trait::async_trait;
use std::sync::{PoisonError, RwLock};
use uuid::Uuid;
use crate::db::{ActivityStore, StoreError};
use crate::models::activity::{Activity, NewActivity, DEFAULT_STATUS};

/// In-process store keeping activities in insertion order.
#[derive(Default)]
pub struct MemoryActivityStore {
    activities: RwLock<Vec<Activity>>,
}

impl MemoryActivityStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ActivityStore for MemoryActivityStore {
    async fn list(&self) -> Result<Vec<Activity>, StoreError> {
        Ok(self.activities.read().unwrap_or_else(PoisonError::into_inner).clone())
    }

    async fn create(&self, activity: NewActivity) -> Result<Activity, StoreError> {
        let created = Activity {
            id: Uuid::new_v4(),
            activity_name: activity.activity_name,
            date: activity.date,
            status: DEFAULT_STATUS.to_string(),
        };
        self.activities.write().unwrap_or_else(PoisonError::into_inner).push(created.clone());
        Ok(created)
    }

    async fn update_status(&self, id: Uuid, status: &str) -> Result<Option<Activity>, StoreError> {
        let mut activities = self.activities.write().unwrap_or_else(PoisonError::into_inner);
        Ok(activities.iter_mut().find(|a| a.id == id).map(|activity| {
            activity.status = status.to_string();
            activity.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut activities = self.activities.write().unwrap_or_else(PoisonError::into_inner);
        let before = activities.len();
        activities.retain(|a| a.id != id);
        Ok(activities.len() < before)
    }
}
