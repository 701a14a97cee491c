//! RentDesk - Equipment Rental Management Core
//!
//! Opens the local store, seeds demo data into empty collections, and runs
//! the overdue sweep once at startup and then on its configured interval.

use std::time::Duration;

use sqlx::sqlite::SqlitePoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rentdesk::{clock::Clock, config::AppConfig, seed, services::Services, store::Store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("rentdesk={}", config.logging.level).into());

    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting RentDesk v{}", env!("CARGO_PKG_VERSION"));

    // Open the key-value store
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(&config.storage.url)
        .await
        .expect("Failed to open storage");

    tracing::info!("Opened storage at {}", config.storage.url);

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run storage migrations");

    let clock = Clock::system();
    let store = Store::new(pool);
    let services = Services::new(store.clone(), clock.clone());

    // Seed demo data into collections that do not exist yet
    if config.seed.demo_data {
        seed::initialize_demo_data(&store, clock.today()).await?;
    }

    // Overdue sweep: once now, then on the configured interval
    let interval = Duration::from_secs(config.sweep.interval_hours * 3600);
    tracing::info!(
        interval_hours = config.sweep.interval_hours,
        "starting overdue sweep scheduler"
    );
    services.sweep.run(interval).await?;

    Ok(())
}
