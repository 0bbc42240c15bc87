mod auth;
mod index;
mod profile;

use crate::error::AppError;
use crate::models::Player;
use crate::session::Session;
use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::handle_index))
        .route("/health", get(health_check))
        .route("/register", get(auth::register_form).post(auth::handle_register))
        .route("/login", post(auth::handle_login))
        .route("/logout", post(auth::handle_logout))
        .route("/profile", get(profile::show_profile).post(profile::handle_profile_update))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

/// The player behind the session, if the session names one that still exists.
async fn current_player(state: &AppState, session: &Session) -> Result<Option<Player>, AppError> {
    match session.player_id() {
        Some(id) => Ok(state.players.find_by_id(id).await?),
        None => Ok(None),
    }
}
