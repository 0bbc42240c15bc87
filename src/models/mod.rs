pub mod player;
pub mod profile;

pub use player::{NewPlayer, Player};
pub use profile::ProfileUpdate;
