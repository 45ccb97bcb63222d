//! Catway (marina berth) model and related payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Condition a catway starts out in unless stated otherwise.
pub const DEFAULT_CATWAY_STATE: &str = "Bon état";

/// Closed enumeration of catway types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "catway_kind", rename_all = "lowercase")]
pub enum CatwayKind {
    Long,
    Short,
}

impl CatwayKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatwayKind::Long => "long",
            CatwayKind::Short => "short",
        }
    }
}

impl std::fmt::Display for CatwayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catway entity
///
/// Identified externally by its generated id, but related to reservations by
/// its business number.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Catway {
    pub id: Uuid,
    pub catway_number: String,
    #[serde(rename = "type")]
    pub kind: CatwayKind,
    pub catway_state: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request for catway creation; `type` defaults to long and the state to
/// [`DEFAULT_CATWAY_STATE`]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCatwayRequest {
    pub catway_number: String,
    #[serde(rename = "type")]
    pub kind: Option<CatwayKind>,
    pub catway_state: Option<String>,
}

/// Request for catway update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCatwayRequest {
    pub catway_number: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<CatwayKind>,
    pub catway_state: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_its_wire_names() {
        assert_eq!(
            serde_json::from_str::<CatwayKind>(r#""long""#).unwrap(),
            CatwayKind::Long
        );
        assert_eq!(
            serde_json::from_str::<CatwayKind>(r#""short""#).unwrap(),
            CatwayKind::Short
        );
        assert_eq!(serde_json::to_string(&CatwayKind::Short).unwrap(), r#""short""#);
    }

    #[test]
    fn kind_rejects_values_outside_the_enumeration() {
        assert!(serde_json::from_str::<CatwayKind>(r#""medium""#).is_err());
    }

    #[test]
    fn create_request_defaults_type_and_state_to_none() {
        let payload: CreateCatwayRequest =
            serde_json::from_str(r#"{"catwayNumber": "A1"}"#).unwrap();
        assert_eq!(payload.catway_number, "A1");
        assert!(payload.kind.is_none());
        assert!(payload.catway_state.is_none());
    }

    #[test]
    fn catway_serializes_with_the_wire_field_names() {
        let catway = Catway {
            id: Uuid::new_v4(),
            catway_number: "B2".to_string(),
            kind: CatwayKind::Short,
            catway_state: DEFAULT_CATWAY_STATE.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&catway).unwrap();
        assert_eq!(json["catwayNumber"], "B2");
        assert_eq!(json["type"], "short");
        assert_eq!(json["catwayState"], DEFAULT_CATWAY_STATE);
    }
}
