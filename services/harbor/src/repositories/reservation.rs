//! Reservation repository for database operations

use anyhow::Result;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::{Reservation, ReservationDetails, UpdateReservationRequest};

/// Reservation repository
#[derive(Clone)]
pub struct ReservationRepository {
    pool: PgPool,
}

impl ReservationRepository {
    /// Create a new reservation repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a reservation against the given catway number. Callers decide
    /// where the number comes from: the nested route passes the resolved
    /// catway's number, the flat route passes the client's.
    pub async fn create(
        &self,
        catway_number: &str,
        details: &ReservationDetails,
    ) -> Result<Reservation> {
        info!(
            "Creating reservation on catway {} for {}",
            catway_number, details.client_name
        );

        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            INSERT INTO reservations (catway_number, client_name, boat_name, check_in, check_out)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, catway_number, client_name, boat_name, check_in, check_out,
                      created_at, updated_at
            "#,
        )
        .bind(catway_number)
        .bind(&details.client_name)
        .bind(&details.boat_name)
        .bind(details.check_in)
        .bind(details.check_out)
        .fetch_one(&self.pool)
        .await?;

        Ok(reservation)
    }

    /// All reservations, most recent check-in first.
    pub async fn get_all(&self) -> Result<Vec<Reservation>> {
        let reservations = sqlx::query_as::<_, Reservation>(
            r#"
            SELECT id, catway_number, client_name, boat_name, check_in, check_out,
                   created_at, updated_at
            FROM reservations
            ORDER BY check_in DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(reservations)
    }

    /// Find a reservation by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Reservation>> {
        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            SELECT id, catway_number, client_name, boat_name, check_in, check_out,
                   created_at, updated_at
            FROM reservations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(reservation)
    }

    /// Reservations for one catway number, most recent check-in first.
    pub async fn find_by_catway(&self, catway_number: &str) -> Result<Vec<Reservation>> {
        let reservations = sqlx::query_as::<_, Reservation>(
            r#"
            SELECT id, catway_number, client_name, boat_name, check_in, check_out,
                   created_at, updated_at
            FROM reservations
            WHERE catway_number = $1
            ORDER BY check_in DESC
            "#,
        )
        .bind(catway_number)
        .fetch_all(&self.pool)
        .await?;

        Ok(reservations)
    }

    /// Update the fields present in the payload; absent fields are left
    /// unchanged.
    pub async fn update(
        &self,
        id: Uuid,
        payload: &UpdateReservationRequest,
    ) -> Result<Option<Reservation>> {
        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            UPDATE reservations
            SET catway_number = COALESCE($2, catway_number),
                client_name = COALESCE($3, client_name),
                boat_name = COALESCE($4, boat_name),
                check_in = COALESCE($5, check_in),
                check_out = COALESCE($6, check_out),
                updated_at = now()
            WHERE id = $1
            RETURNING id, catway_number, client_name, boat_name, check_in, check_out,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&payload.catway_number)
        .bind(&payload.client_name)
        .bind(&payload.boat_name)
        .bind(payload.check_in)
        .bind(payload.check_out)
        .fetch_optional(&self.pool)
        .await?;

        Ok(reservation)
    }

    /// Delete a reservation, returning the removed document.
    pub async fn delete(&self, id: Uuid) -> Result<Option<Reservation>> {
        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            DELETE FROM reservations
            WHERE id = $1
            RETURNING id, catway_number, client_name, boat_name, check_in, check_out,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(reservation)
    }

    /// Remove every reservation. Used by the seed tool and the test suite.
    pub async fn delete_all(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM reservations")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
