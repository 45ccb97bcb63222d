//! REST API for the user directory

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use super::parse_id;
use crate::AppState;
use crate::error::{ApiError, ApiResult};
use crate::models::{CreateUserRequest, UpdateUserRequest};

/// Create a new user
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> ApiResult<impl IntoResponse> {
    let user = state
        .users
        .create(&payload)
        .await
        .map_err(|e| ApiError::internal("Failed to create user", e))?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "User created successfully",
            "data": user,
        })),
    ))
}

/// Get all users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let users = state
        .users
        .get_all()
        .await
        .map_err(|e| ApiError::internal("Failed to list users", e))?;

    Ok(Json(json!({
        "success": true,
        "data": users,
    })))
}

/// Get a user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id, "User")?;
    let user = state
        .users
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch user", e))?
        .ok_or(ApiError::NotFound("User"))?;

    Ok(Json(json!({
        "success": true,
        "data": user,
    })))
}

/// Update a user
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateUserRequest>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id, "User")?;
    let user = state
        .users
        .update(id, &payload)
        .await
        .map_err(|e| ApiError::internal("Failed to update user", e))?
        .ok_or(ApiError::NotFound("User"))?;

    Ok(Json(json!({
        "success": true,
        "message": "User updated",
        "data": user,
    })))
}

/// Delete a user
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id, "User")?;
    state
        .users
        .delete(id)
        .await
        .map_err(|e| ApiError::internal("Failed to delete user", e))?
        .ok_or(ApiError::NotFound("User"))?;

    Ok(Json(json!({
        "success": true,
        "message": "User deleted successfully",
    })))
}
