//! Shared-secret middleware for API routes
//!
//! Requests must carry the application secret in the x-moviweb-secret
//! header. An empty configured secret disables auth checking entirely;
//! the health endpoint and the embedded UI never pass through here.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::warn;

use crate::AppState;

/// Header carrying the application secret
pub const SECRET_HEADER: &str = "x-moviweb-secret";

/// Authentication middleware
///
/// Returns 401 Unauthorized when the header is missing or wrong.
pub async fn auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    // Empty secret disables ALL auth checking
    if state.secret.is_empty() {
        return next.run(request).await;
    }

    let provided = request
        .headers()
        .get(SECRET_HEADER)
        .and_then(|v| v.to_str().ok());

    match provided {
        Some(value) if value == state.secret => next.run(request).await,
        _ => {
            warn!(path = %request.uri().path(), "Rejected request with missing or invalid secret");
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "error": {
                        "code": "UNAUTHORIZED",
                        "message": "Invalid or missing application secret",
                    }
                })),
            )
                .into_response()
        }
    }
}
