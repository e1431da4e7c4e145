use sqlx::PgPool;

use crate::config::AppConfig;
use crate::database;
use crate::payments::PaymentClient;

/// Shared application state, injected into handlers via axum's `State`.
/// The pool is the single owner of database connections; nothing else in the
/// crate holds ambient connection state.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub payments: PaymentClient,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Result<Self, sqlx::Error> {
        let pool = database::connect(config)?;
        let payments = PaymentClient::new(&config.payment);

        Ok(Self { pool, payments })
    }
}
