use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Upvote {
    pub id: Uuid,
    pub product_id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
