//! Reservation model and related payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Reservation entity
///
/// `catway_number` is a soft reference to a catway's business number; no
/// foreign key backs it. Nothing enforces `check_in < check_out`.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: Uuid,
    pub catway_number: String,
    pub client_name: String,
    pub boat_name: String,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Reservation fields common to both creation routes.
///
/// This is the whole body of the nested catway sub-resource route: the
/// catway number there comes from the resolved path catway, and any number
/// the client puts in the body is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDetails {
    pub client_name: String,
    pub boat_name: String,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
}

/// Body of the flat reservation route, which names the catway itself
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    pub catway_number: String,
    #[serde(flatten)]
    pub details: ReservationDetails,
}

/// Request for reservation update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReservationRequest {
    pub catway_number: Option<String>,
    pub client_name: Option<String>,
    pub boat_name: Option<String>,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "catwayNumber": "A1",
        "clientName": "Jean Dupont",
        "boatName": "Sea Breeze",
        "checkIn": "2026-08-01T00:00:00Z",
        "checkOut": "2026-08-08T00:00:00Z"
    }"#;

    #[test]
    fn flat_create_request_parses_the_wire_shape() {
        let payload: CreateReservationRequest = serde_json::from_str(BODY).unwrap();
        assert_eq!(payload.catway_number, "A1");
        assert_eq!(payload.details.client_name, "Jean Dupont");
        assert_eq!(payload.details.boat_name, "Sea Breeze");
        assert!(payload.details.check_in < payload.details.check_out);
    }

    #[test]
    fn nested_body_ignores_a_client_supplied_catway_number() {
        // Same body against the nested payload type: the stray catwayNumber
        // field deserializes into nothing.
        let payload: ReservationDetails = serde_json::from_str(BODY).unwrap();
        assert_eq!(payload.client_name, "Jean Dupont");
    }

    #[test]
    fn reservation_serializes_with_the_wire_field_names() {
        let reservation = Reservation {
            id: Uuid::new_v4(),
            catway_number: "A1".to_string(),
            client_name: "Jean Dupont".to_string(),
            boat_name: "Sea Breeze".to_string(),
            check_in: Utc::now(),
            check_out: Utc::now(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&reservation).unwrap();
        assert_eq!(json["catwayNumber"], "A1");
        assert!(json.get("clientName").is_some());
        assert!(json.get("boatName").is_some());
        assert!(json.get("checkIn").is_some());
        assert!(json.get("checkOut").is_some());
    }
}
