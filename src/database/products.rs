use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use super::like_pattern;
use super::models::product::Product;

/// Submission payload. Status, featured/reported flags and the upvote counter
/// are owned by the server; clients cannot set them here.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub product_name: String,
    pub product_image: Option<String>,
    pub description: Option<String>,
    pub external_link: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub owner_name: Option<String>,
    pub owner_email: String,
    pub owner_image: Option<String>,
}

/// Owner-editable field set for the generic update path. Status and owner
/// identity are structurally absent, so they cannot be patched here.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub product_name: Option<String>,
    pub product_image: Option<String>,
    pub description: Option<String>,
    pub external_link: Option<String>,
    pub tags: Option<Vec<String>>,
}

pub async fn list_all(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

/// Case-insensitive substring match against the name or any tag. An empty
/// term returns everything.
pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<Product>, sqlx::Error> {
    if term.is_empty() {
        return list_all(pool).await;
    }

    sqlx::query_as::<_, Product>(
        r#"
        SELECT * FROM products
        WHERE product_name ILIKE $1
           OR EXISTS (SELECT 1 FROM unnest(tags) AS tag WHERE tag ILIKE $1)
        ORDER BY created_at DESC
        "#,
    )
    .bind(like_pattern(term))
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_by_owner(pool: &PgPool, email: &str) -> Result<Vec<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        "SELECT * FROM products WHERE owner_email = $1 ORDER BY created_at DESC",
    )
    .bind(email)
    .fetch_all(pool)
    .await
}

pub async fn count_by_owner(pool: &PgPool, email: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products WHERE owner_email = $1")
        .bind(email)
        .fetch_one(pool)
        .await
}

pub async fn list_reported(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        "SELECT * FROM products WHERE reported = TRUE ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn insert(pool: &PgPool, product: NewProduct) -> Result<Product, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        r#"
        INSERT INTO products (
            id, product_name, product_image, description, external_link,
            tags, owner_name, owner_email, owner_image
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&product.product_name)
    .bind(&product.product_image)
    .bind(&product.description)
    .bind(&product.external_link)
    .bind(&product.tags)
    .bind(&product.owner_name)
    .bind(&product.owner_email)
    .bind(&product.owner_image)
    .fetch_one(pool)
    .await
}

pub async fn update_details(
    pool: &PgPool,
    id: Uuid,
    patch: ProductPatch,
) -> Result<Option<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        r#"
        UPDATE products SET
            product_name = COALESCE($2, product_name),
            product_image = COALESCE($3, product_image),
            description = COALESCE($4, description),
            external_link = COALESCE($5, external_link),
            tags = COALESCE($6, tags)
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&patch.product_name)
    .bind(&patch.product_image)
    .bind(&patch.description)
    .bind(&patch.external_link)
    .bind(&patch.tags)
    .fetch_optional(pool)
    .await
}

/// Moderation update: only the provided fields are set
pub async fn update_status(
    pool: &PgPool,
    id: Uuid,
    status: Option<String>,
    featured: Option<bool>,
) -> Result<Option<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        r#"
        UPDATE products SET
            status = COALESCE($2, status),
            featured = COALESCE($3, featured)
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(status)
    .bind(featured)
    .fetch_optional(pool)
    .await
}

/// Owner delete: removes the product only. Reports are left in place; the
/// cascade belongs to the moderation path.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Moderation delete: removes the product and every report referencing it in
/// a single transaction.
pub async fn delete_with_reports(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let deleted = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    sqlx::query("DELETE FROM reports WHERE product_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(deleted)
}
