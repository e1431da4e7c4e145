use axum::{
    extract::{Extension, Path, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::models::user::Role;
use crate::database::users;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /users/admin/:email - may only be asked about oneself
pub async fn is_admin(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(email): Path<String>,
) -> Result<Json<Value>, ApiError> {
    if email != auth.email {
        return Err(ApiError::forbidden("Forbidden access"));
    }

    let user = users::find_by_email(&state.pool, &email).await?;
    let admin = user.map(|u| u.role() == Role::Admin).unwrap_or(false);

    Ok(Json(json!({ "success": true, "data": { "admin": admin } })))
}

/// GET /users/moderator/:email - may only be asked about oneself
pub async fn is_moderator(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(email): Path<String>,
) -> Result<Json<Value>, ApiError> {
    if email != auth.email {
        return Err(ApiError::forbidden("Forbidden access"));
    }

    let user = users::find_by_email(&state.pool, &email).await?;
    let moderator = user.map(|u| u.role() == Role::Moderator).unwrap_or(false);

    Ok(Json(json!({ "success": true, "data": { "moderator": moderator } })))
}

/// PATCH /users/moderator/:id - grant the moderator role
pub async fn grant_moderator(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let user = users::set_role(&state.pool, id, Role::Moderator)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(json!({ "success": true, "data": user })))
}

/// PATCH /users/admin/:id - grant the admin role. Changing one's own role is
/// blocked here and only here; the moderator grant carries no such guard.
pub async fn grant_admin(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let target = users::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    if target.email == auth.email {
        return Err(ApiError::forbidden("Cannot modify your own role"));
    }

    let user = users::set_role(&state.pool, id, Role::Admin)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(json!({ "success": true, "data": user })))
}
