use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;

use crate::config::AppConfig;

pub mod models;

pub mod coupons;
pub mod products;
pub mod reports;
pub mod reviews;
pub mod upvotes;
pub mod users;

/// Build the connection pool. Connections are established lazily so the
/// process can boot before the database is reachable; `/health` reports
/// degraded until it is.
pub fn connect(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(Duration::from_secs(config.database.connection_timeout))
        .connect_lazy(&config.database.url)
}

/// Pings the pool to ensure connectivity
pub async fn health_check(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create the six collections if they do not exist yet. No foreign keys:
/// cross-collection consistency is maintained by the store operations.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    const DDL: &[&str] = &[
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY,
            email TEXT NOT NULL UNIQUE,
            name TEXT,
            photo TEXT,
            role TEXT,
            membership_status TEXT,
            subscription_date TIMESTAMPTZ,
            payment_id TEXT,
            subscription_amount DOUBLE PRECISION,
            coupon_used TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id UUID PRIMARY KEY,
            product_name TEXT NOT NULL,
            product_image TEXT,
            description TEXT,
            external_link TEXT,
            tags TEXT[] NOT NULL DEFAULT '{}',
            owner_name TEXT,
            owner_email TEXT NOT NULL,
            owner_image TEXT,
            status TEXT NOT NULL DEFAULT 'pending',
            featured BOOLEAN NOT NULL DEFAULT FALSE,
            reported BOOLEAN NOT NULL DEFAULT FALSE,
            upvotes INTEGER NOT NULL DEFAULT 0 CHECK (upvotes >= 0),
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS upvotes (
            id UUID PRIMARY KEY,
            product_id UUID NOT NULL,
            email TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            UNIQUE (product_id, email)
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS reviews (
            id UUID PRIMARY KEY,
            product_id UUID NOT NULL,
            reviewer_name TEXT,
            reviewer_image TEXT,
            rating DOUBLE PRECISION,
            comment TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS reports (
            id UUID PRIMARY KEY,
            product_id UUID NOT NULL,
            reporter_name TEXT,
            reporter_email TEXT,
            reason TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS coupons (
            id UUID PRIMARY KEY,
            code TEXT NOT NULL UNIQUE,
            description TEXT,
            discount_amount DOUBLE PRECISION,
            expiry_date TIMESTAMPTZ NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
        "CREATE INDEX IF NOT EXISTS idx_products_owner_email ON products (owner_email)",
        "CREATE INDEX IF NOT EXISTS idx_reviews_product_id ON reviews (product_id)",
        "CREATE INDEX IF NOT EXISTS idx_reports_product_id ON reports (product_id)",
    ];

    for statement in DDL {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Schema bootstrap complete");
    Ok(())
}

/// Escape LIKE wildcards so a search term is matched literally
pub fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_pattern_wraps_term() {
        assert_eq!(like_pattern("tech"), "%tech%");
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("100%_ai"), "%100\\%\\_ai%");
    }

    #[test]
    fn like_pattern_empty_matches_all() {
        assert_eq!(like_pattern(""), "%%");
    }
}
