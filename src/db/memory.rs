use super::{PlayerStore, StoreError};
use crate::models::{NewPlayer, Player, ProfileUpdate};
use async_trait::async_trait;
use sqlx::types::Json;
use std::sync::Mutex;

/// In-process store used by the route tests.
#[derive(Default)]
pub struct MemoryPlayerStore {
    players: Mutex<Vec<Player>>,
}

impl MemoryPlayerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlayerStore for MemoryPlayerStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Player>, StoreError> {
        let players = self.players.lock().unwrap();
        Ok(players.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Player>, StoreError> {
        let players = self.players.lock().unwrap();
        Ok(players.iter().find(|p| p.name == name).cloned())
    }

    async fn list_all_except(&self, id: i32) -> Result<Vec<Player>, StoreError> {
        let players = self.players.lock().unwrap();
        Ok(players.iter().filter(|p| p.id != id).cloned().collect())
    }

    async fn create(&self, player: &NewPlayer) -> Result<Player, StoreError> {
        let mut players = self.players.lock().unwrap();
        if players.iter().any(|p| p.name == player.name) {
            return Err(StoreError::NameTaken(player.name.clone()));
        }

        let now = chrono::Utc::now().timestamp();
        let created = Player {
            id: players.len() as i32 + 1,
            name: player.name.clone(),
            password_hash: player.password_hash.clone(),
            race: player.race.clone(),
            player_class: player.player_class.clone(),
            level: 1,
            experience: 0,
            wins: 0,
            losses: 0,
            health: player.health,
            energy: player.energy,
            mana: player.mana,
            gold: 0,
            inventory: Json(Vec::new()),
            avatar_url: None,
            bio: None,
            theme_color: None,
            card_style: None,
            created_at: now,
            updated_at: now,
        };
        players.push(created.clone());
        Ok(created)
    }

    async fn update_profile(&self, id: i32, update: &ProfileUpdate) -> Result<Option<Player>, StoreError> {
        let mut players = self.players.lock().unwrap();
        let Some(player) = players.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        if let Some(bio) = &update.bio {
            player.bio = bio.clone();
        }
        if let Some(theme_color) = &update.theme_color {
            player.theme_color = theme_color.clone();
        }
        if let Some(card_style) = &update.card_style {
            player.card_style = card_style.clone();
        }
        if let Some(url) = &update.avatar_url {
            player.avatar_url = Some(url.clone());
        }
        player.updated_at = chrono::Utc::now().timestamp();
        Ok(Some(player.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_player(name: &str) -> NewPlayer {
        NewPlayer::new(name.into(), "hash".into(), "Human".into(), "Warrior".into())
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_name() {
        let store = MemoryPlayerStore::new();
        store.create(&new_player("Link")).await.unwrap();

        let err = store.create(&new_player("Link")).await.unwrap_err();
        assert!(matches!(err, StoreError::NameTaken(name) if name == "Link"));
    }

    #[tokio::test]
    async fn test_update_keeps_avatar_when_not_replaced() {
        let store = MemoryPlayerStore::new();
        let player = store.create(&new_player("Link")).await.unwrap();

        let with_avatar = ProfileUpdate {
            avatar_url: Some("/static/avatars/player_1.png".into()),
            ..Default::default()
        };
        store.update_profile(player.id, &with_avatar).await.unwrap();

        let bio_only = ProfileUpdate {
            bio: Some(Some("Hero of Hyrule".into())),
            ..Default::default()
        };
        let updated = store.update_profile(player.id, &bio_only).await.unwrap().unwrap();
        assert_eq!(updated.bio.as_deref(), Some("Hero of Hyrule"));
        assert_eq!(updated.avatar_url.as_deref(), Some("/static/avatars/player_1.png"));
    }

    #[tokio::test]
    async fn test_update_blank_clears_and_absent_keeps() {
        let store = MemoryPlayerStore::new();
        let player = store.create(&new_player("Link")).await.unwrap();

        let first = ProfileUpdate {
            bio: Some(Some("Hero of Hyrule".into())),
            theme_color: Some(Some("#00ff00".into())),
            ..Default::default()
        };
        store.update_profile(player.id, &first).await.unwrap();

        let clear_bio = ProfileUpdate {
            bio: Some(None),
            ..Default::default()
        };
        let updated = store.update_profile(player.id, &clear_bio).await.unwrap().unwrap();
        assert_eq!(updated.bio, None);
        assert_eq!(updated.theme_color.as_deref(), Some("#00ff00"));
    }
}
