use serde::{Serialize, Serializer};
use uuid::Uuid;
use chrono::{DateTime, SecondsFormat, Utc};

pub const DEFAULT_STATUS: &str = "in_progress";

#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: Uuid,
    pub activity_name: String,
    #[serde(serialize_with = "serialize_date")]
    pub date: DateTime<Utc>,
    pub status: String,
}

/// Fields required to persist a new activity. The store assigns `id` and `status`.
#[derive(Debug, Clone)]
pub struct NewActivity {
    pub activity_name: String,
    pub date: DateTime<Utc>,
}

// Dates go out as `2024-01-01T00:00:00.000Z`
fn serialize_date<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
}
