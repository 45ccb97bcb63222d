//! Authentication routes: login and logout
//!
//! Both flows communicate by redirect only. Login failures are opaque: the
//! caller cannot tell an unknown email from a wrong password.

use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::{error, info};

use crate::AppState;
use crate::repositories::user::verify_password;
use crate::session::{SESSION_USER_KEY, SessionUser};

/// Login form payload
#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// User login endpoint
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(payload): Form<LoginForm>,
) -> Redirect {
    let user = match state.users.find_by_email(&payload.email).await {
        Ok(Some(user)) => user,
        Ok(None) => return Redirect::to("/?error=credentials"),
        Err(e) => {
            error!("Login lookup failed: {}", e);
            return Redirect::to("/?error=server");
        }
    };

    match verify_password(&payload.password, &user.password_hash) {
        Ok(true) => {}
        Ok(false) => return Redirect::to("/?error=credentials"),
        Err(e) => {
            error!("Password verification failed: {}", e);
            return Redirect::to("/?error=server");
        }
    }

    let identity = SessionUser::from(&user);
    if let Err(e) = session.insert(SESSION_USER_KEY, &identity).await {
        error!("Failed to store session: {}", e);
        return Redirect::to("/?error=server");
    }

    info!("User logged in: {}", user.email);
    Redirect::to("/dashboard")
}

/// User logout endpoint. The session is destroyed unconditionally; a store
/// failure is logged and the redirect happens regardless.
pub async fn logout(session: Session) -> Redirect {
    if let Err(e) = session.flush().await {
        error!("Failed to destroy session: {}", e);
    }
    Redirect::to("/")
}
