use async_trait::async_trait;
use log::{error, info};
use sqlx::postgres::{PgPool, PgPoolOptions};
use uuid::Uuid;
use crate::db::{ActivityStore, StoreError};
use crate::models::activity::{Activity, NewActivity};

const SQL_LIST_ACTIVITIES: &str = r#"
SELECT id, activity_name, date, status
FROM activities
ORDER BY created_at ASC
"#;

const SQL_INSERT_ACTIVITY: &str = r#"
INSERT INTO activities (activity_name, date)
VALUES ($1, $2)
RETURNING id, activity_name, date, status
"#;

const SQL_UPDATE_ACTIVITY_STATUS: &str = r#"
UPDATE activities
SET status = $1
WHERE id = $2
RETURNING id, activity_name, date, status
"#;

const SQL_DELETE_ACTIVITY: &str = r#"
DELETE FROM activities
WHERE id = $1
"#;

pub struct PgActivityStore {
    pool: PgPool,
}

impl PgActivityStore {
    /// Builds the pool without opening a connection, then tries to reach the
    /// database and apply migrations. Failures are logged only; requests will
    /// report them once they hit the pool.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new().connect_lazy(database_url)?;

        match sqlx::migrate!("./migrations").run(&pool).await {
            Ok(()) => info!("Connected to the database, migrations applied"),
            Err(e) => error!("Error connecting to the database: {}", e),
        }

        Ok(Self { pool })
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl ActivityStore for PgActivityStore {
    async fn list(&self) -> Result<Vec<Activity>, StoreError> {
        let activities = sqlx::query_as::<_, Activity>(SQL_LIST_ACTIVITIES)
            .fetch_all(&self.pool)
            .await?;
        Ok(activities)
    }

    async fn create(&self, activity: NewActivity) -> Result<Activity, StoreError> {
        let created = sqlx::query_as::<_, Activity>(SQL_INSERT_ACTIVITY)
            .bind(&activity.activity_name)
            .bind(activity.date)
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }

    async fn update_status(&self, id: Uuid, status: &str) -> Result<Option<Activity>, StoreError> {
        let updated = sqlx::query_as::<_, Activity>(SQL_UPDATE_ACTIVITY_STATUS)
            .bind(status)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let res = sqlx::query(SQL_DELETE_ACTIVITY)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
