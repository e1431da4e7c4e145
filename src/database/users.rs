use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use super::models::user::{Role, User};

/// Registration payload. Role and subscription fields are never settable at
/// registration time.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    pub name: Option<String>,
    pub photo: Option<String>,
}

/// Profile/subscription upsert payload for PATCH /users/:email. Absent fields
/// leave the stored value untouched.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub name: Option<String>,
    pub photo: Option<String>,
    pub membership_status: Option<String>,
    pub subscription_date: Option<DateTime<Utc>>,
    pub payment_id: Option<String>,
    pub subscription_amount: Option<f64>,
    pub coupon_used: Option<String>,
}

pub async fn list_all(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert(pool: &PgPool, user: NewUser) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, email, name, photo)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&user.email)
    .bind(&user.name)
    .bind(&user.photo)
    .fetch_one(pool)
    .await
}

/// Upsert profile and subscription fields by email. Creates the record when
/// the email is unknown, so a subscription can land before registration.
pub async fn upsert_profile(
    pool: &PgPool,
    email: &str,
    patch: UserPatch,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (
            id, email, name, photo, membership_status,
            subscription_date, payment_id, subscription_amount, coupon_used
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        ON CONFLICT (email) DO UPDATE SET
            name = COALESCE(EXCLUDED.name, users.name),
            photo = COALESCE(EXCLUDED.photo, users.photo),
            membership_status = COALESCE(EXCLUDED.membership_status, users.membership_status),
            subscription_date = COALESCE(EXCLUDED.subscription_date, users.subscription_date),
            payment_id = COALESCE(EXCLUDED.payment_id, users.payment_id),
            subscription_amount = COALESCE(EXCLUDED.subscription_amount, users.subscription_amount),
            coupon_used = COALESCE(EXCLUDED.coupon_used, users.coupon_used)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(email)
    .bind(&patch.name)
    .bind(&patch.photo)
    .bind(&patch.membership_status)
    .bind(patch.subscription_date)
    .bind(&patch.payment_id)
    .bind(patch.subscription_amount)
    .bind(&patch.coupon_used)
    .fetch_one(pool)
    .await
}

pub async fn set_role(pool: &PgPool, id: Uuid, role: Role) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("UPDATE users SET role = $2 WHERE id = $1 RETURNING *")
        .bind(id)
        .bind(role.as_str())
        .fetch_optional(pool)
        .await
}

pub async fn clear_role(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("UPDATE users SET role = NULL WHERE id = $1 RETURNING *")
        .bind(id)
        .fetch_optional(pool)
        .await
}
