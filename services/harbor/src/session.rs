//! Session data types and constants
//!
//! The authenticated identity is tracked across requests via a
//! `tower_sessions::Session` persisted server-side; the layer manages the
//! session cookie.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::User;

/// Key under which the authenticated identity is stored in the session.
pub const SESSION_USER_KEY: &str = "user";

/// Authenticated-identity record copied from a [`User`] at login time.
///
/// A snapshot, not a live reference: later edits to the underlying user are
/// not reflected until the next login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn session_user_is_a_snapshot_of_the_user_row() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "$argon2id$...".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let identity = SessionUser::from(&user);
        assert_eq!(identity.id, user.id);
        assert_eq!(identity.name, "Ada");
        assert_eq!(identity.email, "ada@example.com");

        // The snapshot never carries the credential.
        let json = serde_json::to_value(&identity).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(json.get("password").is_none());
    }
}
