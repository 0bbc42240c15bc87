use super::{PlayerStore, StoreError};
use crate::models::{NewPlayer, Player, ProfileUpdate};
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PlayerRepository {
    pool: PgPool,
}

impl PlayerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlayerStore for PlayerRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Player>, StoreError> {
        let player = sqlx::query_as::<_, Player>("SELECT * FROM player WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(player)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Player>, StoreError> {
        let player = sqlx::query_as::<_, Player>("SELECT * FROM player WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(player)
    }

    async fn list_all_except(&self, id: i32) -> Result<Vec<Player>, StoreError> {
        let players = sqlx::query_as::<_, Player>("SELECT * FROM player WHERE id <> $1 ORDER BY id")
            .bind(id)
            .fetch_all(&self.pool)
            .await?;
        Ok(players)
    }

    async fn create(&self, player: &NewPlayer) -> Result<Player, StoreError> {
        let now = chrono::Utc::now().timestamp();
        sqlx::query_as::<_, Player>(
            "INSERT INTO player (name, password_hash, race, player_class, health, energy, mana, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING *"
        )
        .bind(&player.name)
        .bind(&player.password_hash)
        .bind(&player.race)
        .bind(&player.player_class)
        .bind(player.health)
        .bind(player.energy)
        .bind(player.mana)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                StoreError::NameTaken(player.name.clone())
            }
            other => StoreError::Database(other),
        })
    }

    async fn update_profile(&self, id: i32, update: &ProfileUpdate) -> Result<Option<Player>, StoreError> {
        let now = chrono::Utc::now().timestamp();
        // Each text field is written only when its flag is set, so omitted fields keep their value.
        let player = sqlx::query_as::<_, Player>(
            "UPDATE player
             SET bio = CASE WHEN $1 THEN $2 ELSE bio END,
                 theme_color = CASE WHEN $3 THEN $4 ELSE theme_color END,
                 card_style = CASE WHEN $5 THEN $6 ELSE card_style END,
                 avatar_url = COALESCE($7, avatar_url), updated_at = $8
             WHERE id = $9
             RETURNING *"
        )
        .bind(update.bio.is_some())
        .bind(update.bio.clone().flatten())
        .bind(update.theme_color.is_some())
        .bind(update.theme_color.clone().flatten())
        .bind(update.card_style.is_some())
        .bind(update.card_style.clone().flatten())
        .bind(&update.avatar_url)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(player)
    }
}
