use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::database::reviews::{self, NewReview};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /reviews - leave a review. Reviews are immutable once posted.
pub async fn create_review(
    State(state): State<AppState>,
    Json(body): Json<NewReview>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let review = reviews::insert(&state.pool, body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": review })),
    ))
}
