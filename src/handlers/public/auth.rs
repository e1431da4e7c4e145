use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::{generate_jwt, Claims};
use crate::config;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub email: String,
}

/// POST /jwt - issue a time-boxed bearer token for an identity claim.
/// No password check happens here; trust is established upstream.
pub async fn issue_token(Json(body): Json<TokenRequest>) -> Result<Json<Value>, ApiError> {
    let claims = Claims::new(body.email);
    let token = generate_jwt(&claims, &config::config().security.jwt_secret)?;

    Ok(Json(json!({ "success": true, "data": { "token": token } })))
}
