use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use super::auth::AuthUser;
use crate::database::models::user::Role;
use crate::database::users;
use crate::error::ApiError;
use crate::state::AppState;

/// Role guard for moderator-only routes. Always runs after JWT auth: the
/// stored role is resolved from the users collection by the caller's email.
pub async fn require_moderator(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let email = auth_email(&request)?;
    authorize_role(&state, &email, Role::Moderator).await?;
    Ok(next.run(request).await)
}

/// Role guard for admin-only routes
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let email = auth_email(&request)?;
    authorize_role(&state, &email, Role::Admin).await?;
    Ok(next.run(request).await)
}

/// Pull the authenticated caller's email out of the request extensions. Done
/// before any await so no non-`Send` borrow of the request is held across it.
fn auth_email(request: &Request) -> Result<String, ApiError> {
    request
        .extensions()
        .get::<AuthUser>()
        .map(|user| user.email.clone())
        .ok_or_else(|| ApiError::unauthorized("Authentication required before role check"))
}

async fn authorize_role(
    state: &AppState,
    email: &str,
    required: Role,
) -> Result<(), ApiError> {
    let user = users::find_by_email(&state.pool, email).await?;

    let role = user.map(|u| u.role()).unwrap_or(Role::None);
    if role != required {
        tracing::warn!("Role check failed: '{}' is not a {:?}", email, required);
        return Err(ApiError::forbidden("forbidden access"));
    }

    Ok(())
}
