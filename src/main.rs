mod avatar;
mod config;
mod db;
mod error;
mod handlers;
mod models;
mod password;
mod session;
mod views;

use anyhow::{Context, Result};
use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::player::PlayerRepository;
use crate::db::PlayerStore;

#[derive(Clone)]
pub struct AppState {
    pub players: Arc<dyn PlayerStore>,
    pub cookie_key: Key,
    pub avatar_dir: PathBuf,
    pub bcrypt_cost: u32,
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "guildhall=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = config::Config::from_env()
        .context("Invalid configuration")?;

    // Set up database
    tracing::info!("Connecting to database");
    let db_pool = db::create_pool(&config.database_url).await
        .context("Failed to create database pool")?;

    tracing::info!("Running database migrations");
    db::run_migrations(&db_pool).await
        .context("Failed to run migrations")?;

    let state = AppState {
        players: Arc::new(PlayerRepository::new(db_pool)),
        cookie_key: session::cookie_key(&config.secret_key),
        avatar_dir: config.avatar_dir.clone(),
        bcrypt_cost: config.bcrypt_cost,
    };

    let app = handlers::router(state);

    let addr = config.bind_addr();
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Avatars are stored in {}", config.avatar_dir.display());

    let listener = tokio::net::TcpListener::bind(&addr).await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
