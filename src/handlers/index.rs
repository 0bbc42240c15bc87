use super::current_player;
use crate::error::AppError;
use crate::session::Session;
use crate::views;
use crate::AppState;
use axum::{extract::State, response::Html};

/// Roster page for a logged-in player, login overlay otherwise.
pub async fn handle_index(
    State(state): State<AppState>,
    session: Session,
) -> Result<(Session, Html<String>), AppError> {
    let player = current_player(&state, &session).await?;

    let (session, roster) = match &player {
        Some(player) => (session, state.players.list_all_except(player.id).await?),
        // A signed id whose player is gone is as good as no id.
        None => (session.clear(), Vec::new()),
    };

    let (session, flashes) = session.take_flashes();
    Ok((session, Html(views::index(player.as_ref(), &roster, &flashes))))
}
