//! REST API for catways, including the nested reservations sub-resource

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
use crate::models::{Catway, CreateCatwayRequest, ReservationDetails, UpdateCatwayRequest};

/// Create a new catway
pub async fn create_catway(
    State(state): State<AppState>,
    Json(payload): Json<CreateCatwayRequest>,
) -> ApiResult<impl IntoResponse> {
    let catway = state
        .catways
        .create(&payload)
        .await
        .map_err(|e| ApiError::internal("Failed to create catway", e))?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Catway created successfully",
            "data": catway,
        })),
    ))
}

/// Get all catways
pub async fn list_catways(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let catways = state
        .catways
        .get_all()
        .await
        .map_err(|e| ApiError::internal("Failed to list catways", e))?;

    Ok(Json(json!({
        "success": true,
        "data": catways,
    })))
}

/// Get a catway by ID
pub async fn get_catway(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let catway = resolve_catway(&state, &id).await?;

    Ok(Json(json!({
        "success": true,
        "data": catway,
    })))
}

/// Update a catway
pub async fn update_catway(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateCatwayRequest>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id, "Catway")?;
    let catway = state
        .catways
        .update(id, &payload)
        .await
        .map_err(|e| ApiError::internal("Failed to update catway", e))?
        .ok_or(ApiError::NotFound("Catway"))?;

    Ok(Json(json!({
        "success": true,
        "message": "Catway updated",
        "data": catway,
    })))
}

/// Partially update a catway
pub async fn patch_catway(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateCatwayRequest>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id, "Catway")?;
    let catway = state
        .catways
        .patch(id, &payload)
        .await
        .map_err(|e| ApiError::internal("Failed to update catway", e))?
        .ok_or(ApiError::NotFound("Catway"))?;

    Ok(Json(json!({
        "success": true,
        "message": "Catway partially updated",
        "data": catway,
    })))
}

/// Delete a catway
pub async fn delete_catway(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id, "Catway")?;
    state
        .catways
        .delete(id)
        .await
        .map_err(|e| ApiError::internal("Failed to delete catway", e))?
        .ok_or(ApiError::NotFound("Catway"))?;

    Ok(Json(json!({
        "success": true,
        "message": "Catway deleted successfully",
    })))
}

/// Resolve the catway addressed by a nested route's path; absent and
/// malformed ids are both 404 before any reservation work happens.
async fn resolve_catway(state: &AppState, raw_id: &str) -> Result<Catway, ApiError> {
    let id = parse_id(raw_id, "Catway")?;
    state
        .catways
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch catway", e))?
        .ok_or(ApiError::NotFound("Catway"))
}

/// Create a reservation under a catway. The resolved catway's number is
/// forced into the reservation; any number in the body is ignored.
pub async fn create_catway_reservation(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ReservationDetails>,
) -> ApiResult<impl IntoResponse> {
    let catway = resolve_catway(&state, &id).await?;

    let reservation = state
        .reservations
        .create(&catway.catway_number, &payload)
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

/// Get all reservations of a catway
pub async fn list_catway_reservations(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let catway = resolve_catway(&state, &id).await?;

    let reservations = state
        .reservations
        .find_by_catway(&catway.catway_number)
        .await
        .map_err(|e| ApiError::internal("Failed to list reservations", e))?;

    Ok(Json(json!({
        "success": true,
        "count": reservations.len(),
        "data": reservations,
    })))
}

/// Get one reservation of a catway
pub async fn get_catway_reservation(
    State(state): State<AppState>,
    Path((id, reservation_id)): Path<(String, String)>,
) -> ApiResult<impl IntoResponse> {
    let catway = resolve_catway(&state, &id).await?;

    let reservation_id = parse_id(&reservation_id, "Reservation")?;
    let reservation = state
        .reservations
        .find_by_id(reservation_id)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch reservation", e))?
        .ok_or(ApiError::NotFound("Reservation"))?;

    // The only cross-entity consistency check in the system.
    if reservation.catway_number != catway.catway_number {
        return Err(ApiError::BadRequest(
            "This reservation does not belong to this catway".to_string(),
        ));
    }

    Ok(Json(json!({
        "success": true,
        "data": reservation,
    })))
}

/// Delete one reservation of a catway
pub async fn delete_catway_reservation(
    State(state): State<AppState>,
    Path((id, reservation_id)): Path<(String, String)>,
) -> ApiResult<impl IntoResponse> {
    resolve_catway(&state, &id).await?;

    let reservation_id = parse_id(&reservation_id, "Reservation")?;
    state
        .reservations
        .delete(reservation_id)
        .await
        .map_err(|e| ApiError::internal("Failed to delete reservation", e))?
        .ok_or(ApiError::NotFound("Reservation"))?;

    Ok(Json(json!({
        "success": true,
        "message": "Reservation deleted successfully",
    })))
}
