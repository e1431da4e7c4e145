use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::products::{self, NewProduct};
use crate::database::users;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /products - unfiltered product list
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let products = products::list_all(&state.pool).await?;
    Ok(Json(json!({ "success": true, "data": products })))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// GET /products/search?q= - substring match on name or tags
pub async fn search_products(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Value>, ApiError> {
    let term = query.q.unwrap_or_default().to_lowercase();
    let products = products::search(&state.pool, &term).await?;
    Ok(Json(json!({ "success": true, "data": products })))
}

/// GET /product/:id - single product
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let product = products::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product not found"))?;
    Ok(Json(json!({ "success": true, "data": product })))
}

/// POST /products - submit a product, subject to the free-tier quota
pub async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<NewProduct>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    enforce_product_quota(&state.pool, &body.owner_email).await?;

    let product = products::insert(&state.pool, body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": product })),
    ))
}

/// Quota guard: owners without an active membership get exactly one product.
/// Runs before the insert so a rejected request mutates nothing.
async fn enforce_product_quota(pool: &PgPool, owner_email: &str) -> Result<(), ApiError> {
    let owner = users::find_by_email(pool, owner_email).await?;

    let is_active = owner.map(|u| u.has_active_membership()).unwrap_or(false);
    if is_active {
        return Ok(());
    }

    let count = products::count_by_owner(pool, owner_email).await?;
    if count >= 1 {
        return Err(ApiError::quota_exceeded(
            "Free users can only add one product. Please upgrade to premium to add more products.",
        ));
    }

    Ok(())
}
