use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use super::models::upvote::Upvote;

#[derive(Debug, Error)]
pub enum UpvoteError {
    #[error("already upvoted")]
    AlreadyVoted,

    #[error("cannot upvote own product")]
    SelfVote,

    #[error("product not found")]
    ProductNotFound,

    #[error("upvote not found")]
    NotFound,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Cast an upvote. The guard checks, the counter increment and the record
/// insert run in one transaction so the denormalized `products.upvotes`
/// counter cannot drift from the live upvote set. Guard failures roll back
/// before any mutation.
pub async fn cast(pool: &PgPool, product_id: Uuid, email: &str) -> Result<Upvote, UpvoteError> {
    let mut tx = pool.begin().await?;

    let existing: Option<(Uuid,)> =
        sqlx::query_as("SELECT id FROM upvotes WHERE product_id = $1 AND email = $2")
            .bind(product_id)
            .bind(email)
            .fetch_optional(&mut *tx)
            .await?;
    if existing.is_some() {
        return Err(UpvoteError::AlreadyVoted);
    }

    let owner: Option<(String,)> = sqlx::query_as("SELECT owner_email FROM products WHERE id = $1")
        .bind(product_id)
        .fetch_optional(&mut *tx)
        .await?;
    let Some((owner_email,)) = owner else {
        return Err(UpvoteError::ProductNotFound);
    };
    if owner_email == email {
        return Err(UpvoteError::SelfVote);
    }

    sqlx::query("UPDATE products SET upvotes = upvotes + 1 WHERE id = $1")
        .bind(product_id)
        .execute(&mut *tx)
        .await?;

    let upvote = sqlx::query_as::<_, Upvote>(
        "INSERT INTO upvotes (id, product_id, email) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(product_id)
    .bind(email)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(upvote)
}

/// Revoke an upvote by id, reversing the counter in the same transaction.
/// The delete runs first so the counter moves exactly once per removed row;
/// a product deleted in the meantime simply absorbs a no-op update.
pub async fn revoke(pool: &PgPool, id: Uuid) -> Result<(), UpvoteError> {
    let mut tx = pool.begin().await?;

    let deleted: Option<(Uuid,)> =
        sqlx::query_as("DELETE FROM upvotes WHERE id = $1 RETURNING product_id")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
    let Some((product_id,)) = deleted else {
        return Err(UpvoteError::NotFound);
    };

    sqlx::query("UPDATE products SET upvotes = upvotes - 1 WHERE id = $1")
        .bind(product_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}

pub async fn list_by_email(pool: &PgPool, email: &str) -> Result<Vec<Upvote>, sqlx::Error> {
    sqlx::query_as::<_, Upvote>(
        "SELECT * FROM upvotes WHERE email = $1 ORDER BY created_at DESC",
    )
    .bind(email)
    .fetch_all(pool)
    .await
}
