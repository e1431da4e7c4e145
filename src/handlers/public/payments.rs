use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PaymentIntentRequest {
    pub price: f64,
}

/// POST /create-payment-intent - mint a card payment intent with the
/// processor and hand the client secret back. Nothing is stored locally.
pub async fn create_payment_intent(
    State(state): State<AppState>,
    Json(body): Json<PaymentIntentRequest>,
) -> Result<Json<Value>, ApiError> {
    let client_secret = state.payments.create_payment_intent(body.price).await?;

    Ok(Json(json!({
        "success": true,
        "data": { "clientSecret": client_secret }
    })))
}
