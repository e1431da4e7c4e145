use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::reviews;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /reviews - every review in the system
pub async fn list_reviews(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let reviews = reviews::list_all(&state.pool).await?;
    Ok(Json(json!({ "success": true, "data": reviews })))
}

/// GET /reviews/:product_id - reviews for one product
pub async fn product_reviews(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let reviews = reviews::list_by_product(&state.pool, product_id).await?;
    Ok(Json(json!({ "success": true, "data": reviews })))
}
