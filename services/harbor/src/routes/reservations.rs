//! REST API for reservations (flat routes)
//!
//! The flat creation route takes the client's catway number as-is; only the
//! nested catway sub-resource route checks it against an existing catway.

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
use crate::models::{CreateReservationRequest, UpdateReservationRequest};

/// Create a new reservation
pub async fn create_reservation(
    State(state): State<AppState>,
    Json(payload): Json<CreateReservationRequest>,
) -> ApiResult<impl IntoResponse> {
    let reservation = state
        .reservations
        .create(&payload.catway_number, &payload.details)
        .await
        .map_err(|e| ApiError::internal("Failed to create reservation", e))?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Reservation created successfully",
            "data": reservation,
        })),
    ))
}

/// Get all reservations
pub async fn list_reservations(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let reservations = state
        .reservations
        .get_all()
        .await
        .map_err(|e| ApiError::internal("Failed to list reservations", e))?;

    Ok(Json(json!({
        "success": true,
        "data": reservations,
    })))
}

/// Get a reservation by ID
pub async fn get_reservation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id, "Reservation")?;
    let reservation = state
        .reservations
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch reservation", e))?
        .ok_or(ApiError::NotFound("Reservation"))?;

    Ok(Json(json!({
        "success": true,
        "data": reservation,
    })))
}

/// Update a reservation
pub async fn update_reservation(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateReservationRequest>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id, "Reservation")?;
    let reservation = state
        .reservations
        .update(id, &payload)
        .await
        .map_err(|e| ApiError::internal("Failed to update reservation", e))?
        .ok_or(ApiError::NotFound("Reservation"))?;

    Ok(Json(json!({
        "success": true,
        "message": "Reservation updated",
        "data": reservation,
    })))
}

/// Delete a reservation
pub async fn delete_reservation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id, "Reservation")?;
    state
        .reservations
        .delete(id)
        .await
        .map_err(|e| ApiError::internal("Failed to delete reservation", e))?
        .ok_or(ApiError::NotFound("Reservation"))?;

    Ok(Json(json!({
        "success": true,
        "message": "Reservation deleted successfully",
    })))
}
