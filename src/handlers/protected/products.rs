use axum::{
    extract::{Extension, Path, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::products::{self, ProductPatch};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// PATCH /products/:id - owner edit of the listing fields. Status and owner
/// identity are not patchable on this path; moderation owns status.
pub async fn update_product(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<Value>, ApiError> {
    let product = products::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product not found"))?;

    if product.owner_email != auth.email {
        return Err(ApiError::forbidden(
            "Forbidden: You can only update your own products",
        ));
    }

    let updated = products::update_details(&state.pool, id, patch)
        .await?
        .ok_or_else(|| ApiError::not_found("Product not found"))?;

    Ok(Json(json!({ "success": true, "data": updated })))
}

/// DELETE /products/:id - owner delete. Reports are not cascaded here.
pub async fn delete_product(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let product = products::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product not found"))?;

    if product.owner_email != auth.email {
        return Err(ApiError::forbidden(
            "Forbidden: You can only delete your own products",
        ));
    }

    products::delete(&state.pool, id).await?;
    Ok(Json(json!({ "success": true, "data": { "deleted": true } })))
}

/// GET /products/user/:email - products owned by one user
pub async fn products_by_owner(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let products = products::list_by_owner(&state.pool, &email).await?;
    Ok(Json(json!({ "success": true, "data": products })))
}
