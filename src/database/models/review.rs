use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    pub product_id: Uuid,
    pub reviewer_name: Option<String>,
    pub reviewer_image: Option<String>,
    pub rating: Option<f64>,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}
