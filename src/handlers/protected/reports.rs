use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::database::reports::{self, NewReport};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /reports - report a product; the product is flagged in the same
/// transaction as the report insert.
pub async fn create_report(
    State(state): State<AppState>,
    Json(body): Json<NewReport>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let report = reports::file(&state.pool, body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": report })),
    ))
}
