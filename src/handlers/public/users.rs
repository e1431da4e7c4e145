use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::database::users::{self, NewUser, UserPatch};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /users - register-if-absent. An already-known email is not an error;
/// the caller just learns nothing was created.
pub async fn register_user(
    State(state): State<AppState>,
    Json(body): Json<NewUser>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    if users::find_by_email(&state.pool, &body.email).await?.is_some() {
        return Ok((
            StatusCode::OK,
            Json(json!({ "success": true, "data": null, "message": "user already exists" })),
        ));
    }

    let user = users::insert(&state.pool, body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": user })),
    ))
}

/// GET /users/:email - public profile fetch; unknown emails yield null
pub async fn get_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let user = users::find_by_email(&state.pool, &email).await?;
    Ok(Json(json!({ "success": true, "data": user })))
}

/// PATCH /users/:email - upsert profile and subscription fields
pub async fn upsert_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(patch): Json<UserPatch>,
) -> Result<Json<Value>, ApiError> {
    let user = users::upsert_profile(&state.pool, &email, patch).await?;
    Ok(Json(json!({ "success": true, "data": user })))
}
