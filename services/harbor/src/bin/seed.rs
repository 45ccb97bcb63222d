//! Seed the database with a starter dataset.
//!
//! Wipes the users, catways and reservations tables, then provisions the
//! admin account plus a handful of catways and reservations to work with.

use anyhow::Result;
use chrono::{Duration, Utc};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use common::database::{self, DatabaseConfig};
use harbor::AppState;
use harbor::models::{CatwayKind, CreateCatwayRequest, CreateUserRequest, ReservationDetails};

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let db_config = DatabaseConfig::from_env()?;
    let pool = database::init_pool(&db_config).await?;
    harbor::MIGRATOR.run(&pool).await?;

    let state = AppState::new(pool);

    info!("Clearing existing data");
    state.reservations.delete_all().await?;
    state.catways.delete_all().await?;
    state.users.delete_all().await?;

    info!("Creating admin user");
    let admin = state
        .users
        .create(&CreateUserRequest {
            name: "Administrator".to_string(),
            email: "admin@port.com".to_string(),
            password: "admin123".to_string(),
        })
        .await?;

    info!("Creating catways");
    let catways = [
        ("A1", CatwayKind::Long, "Bon état"),
        ("A2", CatwayKind::Long, "Bon état"),
        ("A3", CatwayKind::Short, "En maintenance"),
        ("B1", CatwayKind::Long, "Bon état"),
        ("B2", CatwayKind::Short, "Bon état"),
        ("C1", CatwayKind::Long, "Bon état"),
    ];
    for (number, kind, condition) in catways {
        state
            .catways
            .create(&CreateCatwayRequest {
                catway_number: number.to_string(),
                kind: Some(kind),
                catway_state: Some(condition.to_string()),
            })
            .await?;
    }

    info!("Creating reservations");
    let check_in = Utc::now();
    let check_out = check_in + Duration::days(7);
    let bookings = [
        ("A1", "Jean Dupont", "Sea Breeze"),
        ("B1", "Marie Martin", "Ocean Dream"),
        ("C1", "Pierre Durand", "Wind Rider"),
    ];
    for (number, client, boat) in bookings {
        state
            .reservations
            .create(
                number,
                &ReservationDetails {
                    client_name: client.to_string(),
                    boat_name: boat.to_string(),
                    check_in,
                    check_out,
                },
            )
            .await?;
    }

    info!("Database seeded; admin account is {} / admin123", admin.email);
    Ok(())
}
