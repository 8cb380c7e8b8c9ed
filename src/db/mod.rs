use async_trait::async_trait;
use uuid::Uuid;
use crate::models::activity::{Activity, NewActivity};

pub mod memory;
pub mod postgres;

pub use memory::MemoryActivityStore;
pub use postgres::PgActivityStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence for activities. Every method is a single storage call.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// All activities in storage order.
    async fn list(&self) -> Result<Vec<Activity>, StoreError>;

    /// Persists a new activity with the default status and returns it with its assigned id.
    async fn create(&self, activity: NewActivity) -> Result<Activity, StoreError>;

    /// Returns `None` when no activity has this id.
    async fn update_status(&self, id: Uuid, status: &str) -> Result<Option<Activity>, StoreError>;

    /// Returns `false` when no activity has this id.
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}
