pub mod player;
#[cfg(test)]
pub mod memory;

use crate::models::{NewPlayer, Player, ProfileUpdate};
use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(3))
        .connect(database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("the name '{0}' is already taken")]
    NameTaken(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Storage for player records.
#[async_trait]
pub trait PlayerStore: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Player>, StoreError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Player>, StoreError>;

    /// Every player except `id`, oldest first. This is the roster.
    async fn list_all_except(&self, id: i32) -> Result<Vec<Player>, StoreError>;

    /// Insert a new player. Fails with [`StoreError::NameTaken`] when the name exists.
    async fn create(&self, player: &NewPlayer) -> Result<Player, StoreError>;

    /// Apply profile edits, returning the updated player or `None` if it no longer exists.
    async fn update_profile(&self, id: i32, update: &ProfileUpdate) -> Result<Option<Player>, StoreError>;
}
