use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use super::models::coupon::Coupon;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCoupon {
    pub code: String,
    pub description: Option<String>,
    pub discount_amount: Option<f64>,
    pub expiry_date: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponPatch {
    pub code: Option<String>,
    pub description: Option<String>,
    pub discount_amount: Option<f64>,
    pub expiry_date: Option<DateTime<Utc>>,
}

pub async fn list_all(pool: &PgPool) -> Result<Vec<Coupon>, sqlx::Error> {
    sqlx::query_as::<_, Coupon>("SELECT * FROM coupons ORDER BY expiry_date DESC")
        .fetch_all(pool)
        .await
}

pub async fn find_by_code(pool: &PgPool, code: &str) -> Result<Option<Coupon>, sqlx::Error> {
    sqlx::query_as::<_, Coupon>("SELECT * FROM coupons WHERE code = $1")
        .bind(code)
        .fetch_optional(pool)
        .await
}

pub async fn insert(pool: &PgPool, coupon: NewCoupon) -> Result<Coupon, sqlx::Error> {
    sqlx::query_as::<_, Coupon>(
        r#"
        INSERT INTO coupons (id, code, description, discount_amount, expiry_date)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&coupon.code)
    .bind(&coupon.description)
    .bind(coupon.discount_amount)
    .bind(coupon.expiry_date)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    patch: CouponPatch,
) -> Result<Option<Coupon>, sqlx::Error> {
    sqlx::query_as::<_, Coupon>(
        r#"
        UPDATE coupons SET
            code = COALESCE($2, code),
            description = COALESCE($3, description),
            discount_amount = COALESCE($4, discount_amount),
            expiry_date = COALESCE($5, expiry_date)
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&patch.code)
    .bind(&patch.description)
    .bind(patch.discount_amount)
    .bind(patch.expiry_date)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM coupons WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
