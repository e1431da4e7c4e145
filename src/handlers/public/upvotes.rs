use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::upvotes;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastUpvoteRequest {
    pub product_id: Uuid,
    pub email: String,
}

/// POST /upvotes - cast an upvote. Duplicate votes and self-votes are
/// rejected before anything is written.
pub async fn cast_upvote(
    State(state): State<AppState>,
    Json(body): Json<CastUpvoteRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let upvote = upvotes::cast(&state.pool, body.product_id, &body.email).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": upvote })),
    ))
}

#[derive(Debug, Deserialize)]
pub struct UpvoteListQuery {
    pub email: Option<String>,
}

/// GET /upvotes?email= - upvotes cast by one user. No email, no votes.
pub async fn list_upvotes(
    State(state): State<AppState>,
    Query(query): Query<UpvoteListQuery>,
) -> Result<Json<Value>, ApiError> {
    let Some(email) = query.email else {
        return Ok(Json(json!({ "success": true, "data": [] })));
    };

    let upvotes = upvotes::list_by_email(&state.pool, &email).await?;
    Ok(Json(json!({ "success": true, "data": upvotes })))
}

/// DELETE /upvotes/:id - revoke an upvote, reversing the product counter
pub async fn revoke_upvote(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    upvotes::revoke(&state.pool, id).await?;
    Ok(Json(json!({ "success": true, "data": { "deleted": true } })))
}
