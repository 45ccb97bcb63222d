//! Catway repository for database operations

use anyhow::Result;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::{Catway, CatwayKind, CreateCatwayRequest, DEFAULT_CATWAY_STATE, UpdateCatwayRequest};

/// Catway repository
#[derive(Clone)]
pub struct CatwayRepository {
    pool: PgPool,
}

impl CatwayRepository {
    /// Create a new catway repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new catway. A duplicate number is rejected by the unique
    /// constraint on the table.
    pub async fn create(&self, payload: &CreateCatwayRequest) -> Result<Catway> {
        info!("Creating catway: {}", payload.catway_number);

        let catway = sqlx::query_as::<_, Catway>(
            r#"
            INSERT INTO catways (catway_number, kind, catway_state)
            VALUES ($1, $2, $3)
            RETURNING id, catway_number, kind, catway_state, created_at, updated_at
            "#,
        )
        .bind(&payload.catway_number)
        .bind(payload.kind.unwrap_or(CatwayKind::Long))
        .bind(payload.catway_state.as_deref().unwrap_or(DEFAULT_CATWAY_STATE))
        .fetch_one(&self.pool)
        .await?;

        Ok(catway)
    }

    /// All catways, ordered by their business number.
    pub async fn get_all(&self) -> Result<Vec<Catway>> {
        let catways = sqlx::query_as::<_, Catway>(
            r#"
            SELECT id, catway_number, kind, catway_state, created_at, updated_at
            FROM catways
            ORDER BY catway_number ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(catways)
    }

    /// Find a catway by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Catway>> {
        let catway = sqlx::query_as::<_, Catway>(
            r#"
            SELECT id, catway_number, kind, catway_state, created_at, updated_at
            FROM catways
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(catway)
    }

    /// Update the fields present in the payload; absent fields are left
    /// unchanged.
    pub async fn update(
        &self,
        id: Uuid,
        payload: &UpdateCatwayRequest,
    ) -> Result<Option<Catway>> {
        let catway = sqlx::query_as::<_, Catway>(
            r#"
            UPDATE catways
            SET catway_number = COALESCE($2, catway_number),
                kind = COALESCE($3, kind),
                catway_state = COALESCE($4, catway_state),
                updated_at = now()
            WHERE id = $1
            RETURNING id, catway_number, kind, catway_state, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&payload.catway_number)
        .bind(payload.kind)
        .bind(&payload.catway_state)
        .fetch_optional(&self.pool)
        .await?;

        Ok(catway)
    }

    /// Partial update, same not-found contract as [`update`](Self::update).
    pub async fn patch(
        &self,
        id: Uuid,
        payload: &UpdateCatwayRequest,
    ) -> Result<Option<Catway>> {
        self.update(id, payload).await
    }

    /// Delete a catway, returning the removed document.
    pub async fn delete(&self, id: Uuid) -> Result<Option<Catway>> {
        let catway = sqlx::query_as::<_, Catway>(
            r#"
            DELETE FROM catways
            WHERE id = $1
            RETURNING id, catway_number, kind, catway_state, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(catway)
    }

    /// Remove every catway. Used by the seed tool and the test suite.
    pub async fn delete_all(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM catways").execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}
