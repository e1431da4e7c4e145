use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use super::models::review::Review;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub product_id: Uuid,
    pub reviewer_name: Option<String>,
    pub reviewer_image: Option<String>,
    pub rating: Option<f64>,
    pub comment: Option<String>,
}

pub async fn list_all(pool: &PgPool) -> Result<Vec<Review>, sqlx::Error> {
    sqlx::query_as::<_, Review>("SELECT * FROM reviews ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

pub async fn list_by_product(pool: &PgPool, product_id: Uuid) -> Result<Vec<Review>, sqlx::Error> {
    sqlx::query_as::<_, Review>(
        "SELECT * FROM reviews WHERE product_id = $1 ORDER BY created_at DESC",
    )
    .bind(product_id)
    .fetch_all(pool)
    .await
}

pub async fn insert(pool: &PgPool, review: NewReview) -> Result<Review, sqlx::Error> {
    sqlx::query_as::<_, Review>(
        r#"
        INSERT INTO reviews (id, product_id, reviewer_name, reviewer_image, rating, comment)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(review.product_id)
    .bind(&review.reviewer_name)
    .bind(&review.reviewer_image)
    .bind(review.rating)
    .bind(&review.comment)
    .fetch_one(pool)
    .await
}
