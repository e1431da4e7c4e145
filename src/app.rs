use axum::{
    extract::State,
    http::{header, HeaderValue, Method},
    middleware,
    routing::{delete, get, patch, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::{self, AppConfig};
use crate::handlers::{elevated, protected, public};
use crate::middleware::auth::jwt_auth_middleware;
use crate::middleware::require_role::{require_admin, require_moderator};
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(public_routes())
        // Token-protected API
        .merge(protected_routes())
        // Role-guarded API
        .merge(moderator_routes(state.clone()))
        .merge(admin_routes(state.clone()))
        // Global middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(config::config())),
        )
        .with_state(state)
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/jwt", post(public::auth::issue_token))
        .route(
            "/products",
            get(public::products::list_products).post(public::products::create_product),
        )
        .route("/products/search", get(public::products::search_products))
        .route("/product/:id", get(public::products::get_product))
        .route("/reviews", get(public::reviews::list_reviews))
        .route("/reviews/:product_id", get(public::reviews::product_reviews))
        .route(
            "/upvotes",
            get(public::upvotes::list_upvotes).post(public::upvotes::cast_upvote),
        )
        .route("/upvotes/:id", delete(public::upvotes::revoke_upvote))
        .route("/verify-coupon/:code", get(public::coupons::verify_coupon))
        .route("/coupons", get(public::coupons::list_coupons))
        .route("/users", post(public::users::register_user))
        .route(
            "/users/:email",
            get(public::users::get_user).patch(public::users::upsert_user),
        )
        .route("/create-payment-intent", post(public::payments::create_payment_intent))
}

fn protected_routes() -> Router<AppState> {
    Router::new()
        // GET takes an email, PATCH a user id; axum requires one param name per path
        .route(
            "/users/admin/:id",
            get(protected::users::is_admin).patch(protected::users::grant_admin),
        )
        .route(
            "/users/moderator/:id",
            get(protected::users::is_moderator).patch(protected::users::grant_moderator),
        )
        .route(
            "/products/:id",
            patch(protected::products::update_product).delete(protected::products::delete_product),
        )
        .route("/products/user/:email", get(protected::products::products_by_owner))
        .route("/reviews", post(protected::reviews::create_review))
        .route("/reports", post(protected::reports::create_report))
        .route_layer(middleware::from_fn(jwt_auth_middleware))
}

fn moderator_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/products/reported", get(elevated::moderator::reported_products))
        .route("/products/reported/:id", delete(elevated::moderator::delete_reported))
        .route("/products/review-queue", get(elevated::moderator::review_queue))
        .route("/products/status/:id", patch(elevated::moderator::update_status))
        .route("/reports", get(elevated::moderator::list_reports))
        // Layers run outermost-last: JWT auth fires before the role lookup
        .route_layer(middleware::from_fn_with_state(state, require_moderator))
        .route_layer(middleware::from_fn(jwt_auth_middleware))
}

fn admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/users", get(elevated::admin::list_users))
        .route("/users/remove-role/:id", patch(elevated::admin::remove_role))
        .route("/coupons", post(elevated::admin::create_coupon))
        .route(
            "/coupons/:id",
            patch(elevated::admin::update_coupon).delete(elevated::admin::delete_coupon),
        )
        .route_layer(middleware::from_fn_with_state(state, require_admin))
        .route_layer(middleware::from_fn(jwt_auth_middleware))
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    if !config.security.enable_cors {
        return CorsLayer::new();
    }

    let origins: Vec<HeaderValue> = config
        .security
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

async fn root() -> &'static str {
    "Tech Hunt is booting"
}

async fn health(State(state): State<AppState>) -> (axum::http::StatusCode, Json<Value>) {
    let now = chrono::Utc::now();

    match crate::database::health_check(&state.pool).await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
