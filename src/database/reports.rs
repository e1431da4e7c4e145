use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use super::models::report::Report;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReport {
    pub product_id: Uuid,
    pub reporter_name: Option<String>,
    pub reporter_email: Option<String>,
    pub reason: Option<String>,
}

pub async fn list_all(pool: &PgPool) -> Result<Vec<Report>, sqlx::Error> {
    sqlx::query_as::<_, Report>("SELECT * FROM reports ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

/// Insert the report and flag the product in one transaction. A report
/// against an id with no product still records the report; the flag update
/// just matches nothing.
pub async fn file(pool: &PgPool, report: NewReport) -> Result<Report, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let created = sqlx::query_as::<_, Report>(
        r#"
        INSERT INTO reports (id, product_id, reporter_name, reporter_email, reason)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(report.product_id)
    .bind(&report.reporter_name)
    .bind(&report.reporter_email)
    .bind(&report.reason)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query("UPDATE products SET reported = TRUE WHERE id = $1")
        .bind(report.product_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(created)
}
