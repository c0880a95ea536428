//! User 处理器

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use super::model::{User, UserRecord};
use crate::app::AppState;
use crate::core::{CoreError, JsonBody};

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<UserRecord>>, CoreError> {
    let user = state.users.fetch_user(&id).await?;
    Ok(Json(user))
}

/// POST /users/
pub async fn add_user(
    State(state): State<AppState>,
    JsonBody(user): JsonBody<User>,
) -> Result<(StatusCode, Json<i64>), CoreError> {
    let id = state.users.create_user(user).await?;
    Ok((StatusCode::CREATED, Json(id)))
}
