//! Route composition for the harbor service

pub mod auth;
pub mod catways;
pub mod pages;
pub mod reservations;
pub mod users;

use axum::{
    Json, Router,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::PostgresStore;
use uuid::Uuid;

use crate::{AppState, error::ApiError, middleware::require_login};

/// Parse a path identifier. An identifier that is not well-formed is
/// indistinguishable from an absent document.
pub(crate) fn parse_id(raw: &str, what: &'static str) -> Result<Uuid, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound(what))
}

/// Create the router for the harbor service
pub fn create_router(
    state: AppState,
    session_layer: SessionManagerLayer<PostgresStore>,
) -> Router {
    let api = Router::new()
        .route("/users", post(users::create_user).get(users::list_users))
        .route(
            "/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route(
            "/catways",
            post(catways::create_catway).get(catways::list_catways),
        )
        .route(
            "/catways/:id",
            get(catways::get_catway)
                .put(catways::update_catway)
                .patch(catways::patch_catway)
                .delete(catways::delete_catway),
        )
        .route(
            "/catways/:id/reservations",
            post(catways::create_catway_reservation).get(catways::list_catway_reservations),
        )
        .route(
            "/catways/:id/reservations/:idReservation",
            get(catways::get_catway_reservation).delete(catways::delete_catway_reservation),
        )
        .route(
            "/reservations",
            post(reservations::create_reservation).get(reservations::list_reservations),
        )
        .route(
            "/reservations/:id",
            get(reservations::get_reservation)
                .put(reservations::update_reservation)
                .delete(reservations::delete_reservation),
        );

    let dashboard = Router::new()
        .route("/", get(pages::dashboard))
        .route("/catways", get(pages::catway_list))
        .route("/catways/:id", get(pages::catway_detail))
        .route("/reservations", get(pages::reservation_list))
        .route("/reservations/:id", get(pages::reservation_detail));

    let protected = Router::new()
        .nest("/api", api)
        .nest("/dashboard", dashboard)
        .route_layer(middleware::from_fn(require_login));

    Router::new()
        .route("/", get(pages::index))
        .route("/health", get(health_check))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", get(auth::logout))
        .merge(protected)
        .with_state(state)
        .layer(session_layer)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "harbor"
    }))
}
