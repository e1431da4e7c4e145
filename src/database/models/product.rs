use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub product_name: String,
    pub product_image: Option<String>,
    pub description: Option<String>,
    pub external_link: Option<String>,
    pub tags: Vec<String>,
    pub owner_name: Option<String>,
    pub owner_email: String,
    pub owner_image: Option<String>,
    pub status: String,
    pub featured: bool,
    pub reported: bool,
    pub upvotes: i32,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_is_camel_case() {
        let product = Product {
            id: Uuid::nil(),
            product_name: "Ferris IDE".to_string(),
            product_image: None,
            description: None,
            external_link: None,
            tags: vec!["dev-tools".to_string()],
            owner_name: Some("Alice".to_string()),
            owner_email: "alice@example.com".to_string(),
            owner_image: None,
            status: "pending".to_string(),
            featured: false,
            reported: false,
            upvotes: 0,
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&product).unwrap();
        assert!(value.get("productName").is_some());
        assert!(value.get("ownerEmail").is_some());
        assert!(value.get("product_name").is_none());
    }
}
