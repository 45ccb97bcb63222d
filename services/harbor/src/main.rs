use anyhow::Result;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

use common::database::{self, DatabaseConfig};
use harbor::{AppState, routes};
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::PostgresStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting harbor service");

    let db_config = DatabaseConfig::from_env()?;

    // An unreachable database at boot is logged, not fatal: fall back to a
    // lazily-connecting pool and keep serving; requests fail individually
    // until the store recovers.
    let pool = match database::init_pool(&db_config).await {
        Ok(pool) => {
            info!("Database connection successful");
            pool
        }
        Err(e) => {
            error!("Database unreachable at startup: {}", e);
            database::lazy_pool(&db_config)?
        }
    };

    if let Err(e) = harbor::MIGRATOR.run(&pool).await {
        error!("Failed to apply database migrations: {}", e);
    }

    // Server-side session store; the layer manages the session cookie.
    let session_store = PostgresStore::new(pool.clone());
    if let Err(e) = session_store.migrate().await {
        error!("Failed to prepare session store: {}", e);
    }
    let session_layer = SessionManagerLayer::new(session_store).with_secure(false);

    let state = AppState::new(pool);

    let app = routes::create_router(state, session_layer);

    let bind_addr =
        std::env::var("HARBOR_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Harbor service listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
