//! Server-rendered pages: login screen and dashboard views.
//!
//! These are plain consumers of the repositories; rendering is a handful of
//! inline HTML builders, no template engine.

use axum::{
    Extension,
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::error;

use super::parse_id;
use crate::AppState;
use crate::models::{Catway, Reservation};
use crate::session::SessionUser;

#[derive(Deserialize)]
pub struct IndexQuery {
    pub error: Option<String>,
}

/// Landing page with the login form.
pub async fn index(Query(query): Query<IndexQuery>) -> Html<String> {
    let error_msg = match query.error.as_deref() {
        Some("credentials") => "Incorrect email or password.",
        Some("server") => "Server error during login. Try again in a moment.",
        _ => "",
    };
    Html(render_login(error_msg))
}

/// Dashboard overview: every catway and reservation at a glance.
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<SessionUser>,
) -> Response {
    let catways = match state.catways.get_all().await {
        Ok(catways) => catways,
        Err(e) => {
            error!("Failed to load catways for dashboard: {}", e);
            return Redirect::to("/").into_response();
        }
    };
    let reservations = match state.reservations.get_all().await {
        Ok(reservations) => reservations,
        Err(e) => {
            error!("Failed to load reservations for dashboard: {}", e);
            return Redirect::to("/").into_response();
        }
    };

    Html(render_dashboard(&user, &catways, &reservations)).into_response()
}

pub async fn catway_list(State(state): State<AppState>) -> Response {
    match state.catways.get_all().await {
        Ok(catways) => Html(page("Catways", &catway_table(&catways))).into_response(),
        Err(e) => {
            error!("Failed to load catway list: {}", e);
            Redirect::to("/dashboard").into_response()
        }
    }
}

pub async fn catway_detail(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Ok(id) = parse_id(&id, "Catway") else {
        return Redirect::to("/dashboard/catways").into_response();
    };
    match state.catways.find_by_id(id).await {
        Ok(Some(catway)) => {
            let title = format!("Catway {}", catway.catway_number);
            let body = format!(
                "<dl><dt>Number</dt><dd>{}</dd><dt>Type</dt><dd>{}</dd><dt>State</dt><dd>{}</dd></dl>",
                escape(&catway.catway_number),
                catway.kind,
                escape(&catway.catway_state),
            );
            Html(page(&title, &body)).into_response()
        }
        Ok(None) => Redirect::to("/dashboard/catways").into_response(),
        Err(e) => {
            error!("Failed to load catway detail: {}", e);
            Redirect::to("/dashboard/catways").into_response()
        }
    }
}

pub async fn reservation_list(State(state): State<AppState>) -> Response {
    match state.reservations.get_all().await {
        Ok(reservations) => {
            Html(page("Reservations", &reservation_table(&reservations))).into_response()
        }
        Err(e) => {
            error!("Failed to load reservation list: {}", e);
            Redirect::to("/dashboard").into_response()
        }
    }
}

pub async fn reservation_detail(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Ok(id) = parse_id(&id, "Reservation") else {
        return Redirect::to("/dashboard/reservations").into_response();
    };
    match state.reservations.find_by_id(id).await {
        Ok(Some(reservation)) => {
            let title = format!("Reservation for {}", reservation.client_name);
            let body = format!(
                "<dl><dt>Catway</dt><dd>{}</dd><dt>Client</dt><dd>{}</dd>\
                 <dt>Boat</dt><dd>{}</dd><dt>Check-in</dt><dd>{}</dd>\
                 <dt>Check-out</dt><dd>{}</dd></dl>",
                escape(&reservation.catway_number),
                escape(&reservation.client_name),
                escape(&reservation.boat_name),
                reservation.check_in.format("%Y-%m-%d"),
                reservation.check_out.format("%Y-%m-%d"),
            );
            Html(page(&title, &body)).into_response()
        }
        Ok(None) => Redirect::to("/dashboard/reservations").into_response(),
        Err(e) => {
            error!("Failed to load reservation detail: {}", e);
            Redirect::to("/dashboard/reservations").into_response()
        }
    }
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\">\
         <title>{} - Harbor</title></head>\n<body><h1>{}</h1>\n{}\n</body></html>",
        escape(title),
        escape(title),
        body,
    )
}

fn render_login(error_msg: &str) -> String {
    let error_block = if error_msg.is_empty() {
        String::new()
    } else {
        format!("<p class=\"error\">{}</p>", escape(error_msg))
    };
    let body = format!(
        "{}<form method=\"post\" action=\"/auth/login\">\
         <label>Email <input type=\"email\" name=\"email\" required></label>\
         <label>Password <input type=\"password\" name=\"password\" required></label>\
         <button type=\"submit\">Log in</button></form>",
        error_block,
    );
    page("Harbor office", &body)
}

fn render_dashboard(user: &SessionUser, catways: &[Catway], reservations: &[Reservation]) -> String {
    let body = format!(
        "<p>Signed in as {} ({}). <a href=\"/auth/logout\">Log out</a></p>\
         <h2>Catways</h2>{}<h2>Reservations</h2>{}",
        escape(&user.name),
        escape(&user.email),
        catway_table(catways),
        reservation_table(reservations),
    );
    page("Dashboard", &body)
}

fn catway_table(catways: &[Catway]) -> String {
    let rows: String = catways
        .iter()
        .map(|c| {
            format!(
                "<tr><td><a href=\"/dashboard/catways/{}\">{}</a></td><td>{}</td><td>{}</td></tr>",
                c.id,
                escape(&c.catway_number),
                c.kind,
                escape(&c.catway_state),
            )
        })
        .collect();
    format!(
        "<table><tr><th>Number</th><th>Type</th><th>State</th></tr>{}</table>",
        rows
    )
}

fn reservation_table(reservations: &[Reservation]) -> String {
    let rows: String = reservations
        .iter()
        .map(|r| {
            format!(
                "<tr><td><a href=\"/dashboard/reservations/{}\">{}</a></td>\
                 <td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                r.id,
                escape(&r.client_name),
                escape(&r.boat_name),
                escape(&r.catway_number),
                r.check_in.format("%Y-%m-%d"),
                r.check_out.format("%Y-%m-%d"),
            )
        })
        .collect();
    format!(
        "<table><tr><th>Client</th><th>Boat</th><th>Catway</th>\
         <th>Check-in</th><th>Check-out</th></tr>{}</table>",
        rows
    )
}
