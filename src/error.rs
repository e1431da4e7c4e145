// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),
    AlreadyVoted(String),
    SelfVote(String),
    CouponExpired(String),

    // 401 Unauthorized
    Unauthorized(String),

    // 403 Forbidden
    Forbidden(String),
    QuotaExceeded(String),

    // 404 Not Found
    NotFound(String),
    InvalidCoupon(String),

    // 500 Internal Server Error
    InternalServerError(String),

    // 503 Service Unavailable
    ServiceUnavailable(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::AlreadyVoted(_) => 400,
            ApiError::SelfVote(_) => 400,
            ApiError::CouponExpired(_) => 400,
            ApiError::Unauthorized(_) => 401,
            ApiError::Forbidden(_) => 403,
            ApiError::QuotaExceeded(_) => 403,
            ApiError::NotFound(_) => 404,
            ApiError::InvalidCoupon(_) => 404,
            ApiError::InternalServerError(_) => 500,
            ApiError::ServiceUnavailable(_) => 503,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::AlreadyVoted(msg) => msg,
            ApiError::SelfVote(msg) => msg,
            ApiError::CouponExpired(msg) => msg,
            ApiError::Unauthorized(msg) => msg,
            ApiError::Forbidden(msg) => msg,
            ApiError::QuotaExceeded(msg) => msg,
            ApiError::NotFound(msg) => msg,
            ApiError::InvalidCoupon(msg) => msg,
            ApiError::InternalServerError(msg) => msg,
            ApiError::ServiceUnavailable(msg) => msg,
        }
    }

    /// Get error code for client handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::AlreadyVoted(_) => "ALREADY_VOTED",
            ApiError::SelfVote(_) => "SELF_VOTE",
            ApiError::CouponExpired(_) => "COUPON_EXPIRED",
            ApiError::Unauthorized(_) => "UNAUTHORIZED",
            ApiError::Forbidden(_) => "FORBIDDEN",
            ApiError::QuotaExceeded(_) => "QUOTA_EXCEEDED",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::InvalidCoupon(_) => "INVALID_COUPON",
            ApiError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
            ApiError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        json!({
            "error": true,
            "message": self.message(),
            "code": self.error_code()
        })
    }
}

// Static constructor methods
impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn already_voted(message: impl Into<String>) -> Self {
        ApiError::AlreadyVoted(message.into())
    }

    pub fn self_vote(message: impl Into<String>) -> Self {
        ApiError::SelfVote(message.into())
    }

    pub fn coupon_expired(message: impl Into<String>) -> Self {
        ApiError::CouponExpired(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden(message.into())
    }

    pub fn quota_exceeded(message: impl Into<String>) -> Self {
        ApiError::QuotaExceeded(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn invalid_coupon(message: impl Into<String>) -> Self {
        ApiError::InvalidCoupon(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        ApiError::ServiceUnavailable(message.into())
    }
}

// Convert other error types to ApiError
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::not_found("Record not found"),
            other => {
                // Don't expose internal SQL errors to clients
                tracing::error!("Database error: {}", other);
                ApiError::internal_server_error("An error occurred while processing your request")
            }
        }
    }
}

impl From<crate::database::upvotes::UpvoteError> for ApiError {
    fn from(err: crate::database::upvotes::UpvoteError) -> Self {
        use crate::database::upvotes::UpvoteError;
        match err {
            UpvoteError::AlreadyVoted => {
                ApiError::already_voted("You have already upvoted this product")
            }
            UpvoteError::SelfVote => ApiError::self_vote("You cannot upvote your own product"),
            UpvoteError::ProductNotFound => ApiError::not_found("Product not found"),
            UpvoteError::NotFound => ApiError::not_found("Upvote not found"),
            UpvoteError::Database(e) => e.into(),
        }
    }
}

impl From<crate::payments::PaymentError> for ApiError {
    fn from(err: crate::payments::PaymentError) -> Self {
        match err {
            crate::payments::PaymentError::InvalidAmount(_) => {
                ApiError::bad_request("Invalid payment amount")
            }
            other => {
                // Surface a static message; the gateway detail stays in the logs
                tracing::error!("Payment processor error: {}", other);
                ApiError::internal_server_error("Error creating payment intent")
            }
        }
    }
}

impl From<crate::auth::JwtError> for ApiError {
    fn from(err: crate::auth::JwtError) -> Self {
        tracing::error!("Token generation error: {}", err);
        ApiError::internal_server_error("Failed to issue token")
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_errors_map_to_documented_status_classes() {
        assert_eq!(ApiError::unauthorized("x").status_code(), 401);
        assert_eq!(ApiError::forbidden("x").status_code(), 403);
        assert_eq!(ApiError::quota_exceeded("x").status_code(), 403);
        assert_eq!(ApiError::already_voted("x").status_code(), 400);
        assert_eq!(ApiError::self_vote("x").status_code(), 400);
        assert_eq!(ApiError::invalid_coupon("x").status_code(), 404);
        assert_eq!(ApiError::coupon_expired("x").status_code(), 400);
        assert_eq!(ApiError::internal_server_error("x").status_code(), 500);
    }

    #[test]
    fn error_body_carries_code_and_message() {
        let body = ApiError::quota_exceeded("Free users can only add one product").to_json();
        assert_eq!(body["error"], true);
        assert_eq!(body["code"], "QUOTA_EXCEEDED");
        assert_eq!(body["message"], "Free users can only add one product");
    }

    #[test]
    fn row_not_found_becomes_404() {
        let err: ApiError = sqlx::Error::RowNotFound.into();
        assert_eq!(err.status_code(), 404);
    }
}
