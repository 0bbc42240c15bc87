use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// Starting health granted to every new character.
pub const BASE_HEALTH: i32 = 100;
/// Starting pool for whichever resource the class uses (energy or mana).
pub const BASE_RESOURCE: i32 = 100;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Player {
    pub id: i32,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub race: String,
    pub player_class: String,
    pub level: i32,
    pub experience: i32,
    pub wins: i32,
    pub losses: i32,
    pub health: Option<i32>,
    pub energy: Option<i32>,
    pub mana: Option<i32>,
    pub gold: i32,
    pub inventory: Json<Vec<serde_json::Value>>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub theme_color: Option<String>,
    pub card_style: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// A character as submitted at registration, with class-derived stats filled in.
#[derive(Debug, Clone)]
pub struct NewPlayer {
    pub name: String,
    pub password_hash: String,
    pub race: String,
    pub player_class: String,
    pub health: Option<i32>,
    pub energy: Option<i32>,
    pub mana: Option<i32>,
}

impl NewPlayer {
    pub fn new(name: String, password_hash: String, race: String, player_class: String) -> Self {
        let stats = StartingStats::for_class(&player_class);
        Self {
            name,
            password_hash,
            race,
            player_class,
            health: stats.health,
            energy: stats.energy,
            mana: stats.mana,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartingStats {
    pub health: Option<i32>,
    pub energy: Option<i32>,
    pub mana: Option<i32>,
}

impl StartingStats {
    /// Warriors and rogues fight on energy, mages on mana. Unknown classes only get health.
    pub fn for_class(player_class: &str) -> Self {
        let class = player_class.trim().to_lowercase();
        let uses_energy = matches!(class.as_str(), "warrior" | "rogue" | "воин" | "разбойник");
        let uses_mana = matches!(class.as_str(), "mage" | "маг");

        Self {
            health: Some(BASE_HEALTH),
            energy: uses_energy.then_some(BASE_RESOURCE),
            mana: uses_mana.then_some(BASE_RESOURCE),
        }
    }
}
