use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::{products, reports};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /products/review-queue - the full product list, moderation view
pub async fn review_queue(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let products = products::list_all(&state.pool).await?;
    Ok(Json(json!({ "success": true, "data": products })))
}

#[derive(Debug, Deserialize)]
pub struct StatusPatch {
    pub status: Option<String>,
    pub featured: Option<bool>,
}

/// PATCH /products/status/:id - curate a listing; only provided fields change
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<StatusPatch>,
) -> Result<Json<Value>, ApiError> {
    let product = products::update_status(&state.pool, id, patch.status, patch.featured)
        .await?
        .ok_or_else(|| ApiError::not_found("Product not found"))?;

    Ok(Json(json!({ "success": true, "data": product })))
}

/// GET /products/reported - listings flagged by at least one report
pub async fn reported_products(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let products = products::list_reported(&state.pool).await?;
    Ok(Json(json!({ "success": true, "data": products })))
}

/// DELETE /products/reported/:id - take a listing down and drop every report
/// that references it
pub async fn delete_reported(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let deleted = products::delete_with_reports(&state.pool, id).await?;
    if deleted == 0 {
        return Err(ApiError::not_found("Product not found"));
    }

    Ok(Json(json!({ "success": true, "data": { "deleted": true } })))
}

/// GET /reports - every open report
pub async fn list_reports(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let reports = reports::list_all(&state.pool).await?;
    Ok(Json(json!({ "success": true, "data": reports })))
}
