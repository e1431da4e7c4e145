use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: Uuid,
    pub product_id: Uuid,
    pub reporter_name: Option<String>,
    pub reporter_email: Option<String>,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}
