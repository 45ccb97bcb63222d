//! Harbor: marina berth ("catway") and reservation management service.
//!
//! A session-authenticated CRUD application exposing a JSON REST API and
//! minimal dashboard pages over PostgreSQL.

pub mod error;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod session;

use sqlx::PgPool;

use crate::repositories::{CatwayRepository, ReservationRepository, UserRepository};

/// Embedded schema migrations, applied at startup.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub users: UserRepository,
    pub catways: CatwayRepository,
    pub reservations: ReservationRepository,
}

impl AppState {
    /// Assemble the application state from a database pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            catways: CatwayRepository::new(pool.clone()),
            reservations: ReservationRepository::new(pool.clone()),
            db_pool: pool,
        }
    }
}
