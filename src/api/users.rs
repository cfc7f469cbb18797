//! User endpoints

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::db::users::{self, User};
use crate::error::ApiResult;
use crate::services::catalog;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterUserRequest {
    pub name: String,
}

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    Ok(Json(users::list_users(&state.db).await?))
}

/// POST /api/users
pub async fn register_user(
    State(state): State<AppState>,
    Json(req): Json<RegisterUserRequest>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let user = catalog::register_user(&state.db, &req.name).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// DELETE /api/users/:user_id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<serde_json::Value>> {
    catalog::remove_user(&state.db, user_id).await?;
    Ok(Json(json!({ "status": "deleted" })))
}
