use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};

use crate::database::coupons;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /verify-coupon/:code - validity check against the stored expiry.
/// A coupon may be verified any number of times; there is no redemption
/// tracking.
pub async fn verify_coupon(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let coupon = coupons::find_by_code(&state.pool, &code)
        .await?
        .ok_or_else(|| ApiError::invalid_coupon("Invalid coupon code"))?;

    if coupon.is_expired(Utc::now()) {
        return Err(ApiError::coupon_expired("This coupon has expired"));
    }

    Ok(Json(json!({ "success": true, "data": coupon })))
}

/// GET /coupons - list all coupons
pub async fn list_coupons(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let coupons = coupons::list_all(&state.pool).await?;
    Ok(Json(json!({ "success": true, "data": coupons })))
}
