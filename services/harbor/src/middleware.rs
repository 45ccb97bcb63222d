//! Session-gating middleware for protected routes

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use tracing::error;

use crate::session::{SESSION_USER_KEY, SessionUser};

/// Require an authenticated session.
///
/// A request whose session carries an identity proceeds, with that identity
/// inserted into the request extensions for handlers to pick up. Anything
/// else is redirected to the login page — API routes included, which receive
/// the same redirect as page routes.
pub async fn require_login(session: Session, mut req: Request, next: Next) -> Response {
    match session.get::<SessionUser>(SESSION_USER_KEY).await {
        Ok(Some(user)) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Ok(None) => Redirect::to("/").into_response(),
        Err(e) => {
            error!("Failed to read session: {}", e);
            Redirect::to("/").into_response()
        }
    }
}
