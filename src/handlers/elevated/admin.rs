use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::coupons::{self, CouponPatch, NewCoupon};
use crate::database::users;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /users - the whole user collection
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let users = users::list_all(&state.pool).await?;
    Ok(Json(json!({ "success": true, "data": users })))
}

/// PATCH /users/remove-role/:id - strip moderator/admin privileges
pub async fn remove_role(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let user = users::clear_role(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(json!({ "success": true, "data": user })))
}

/// POST /coupons - create a coupon
pub async fn create_coupon(
    State(state): State<AppState>,
    Json(body): Json<NewCoupon>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let coupon = coupons::insert(&state.pool, body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": coupon })),
    ))
}

/// PATCH /coupons/:id - update coupon fields
pub async fn update_coupon(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<CouponPatch>,
) -> Result<Json<Value>, ApiError> {
    let coupon = coupons::update(&state.pool, id, patch)
        .await?
        .ok_or_else(|| ApiError::not_found("Coupon not found"))?;

    Ok(Json(json!({ "success": true, "data": coupon })))
}

/// DELETE /coupons/:id - remove a coupon
pub async fn delete_coupon(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let deleted = coupons::delete(&state.pool, id).await?;
    if deleted == 0 {
        return Err(ApiError::not_found("Coupon not found"));
    }

    Ok(Json(json!({ "success": true, "data": { "deleted": true } })))
}
