use super::current_player;
use crate::avatar;
use crate::error::AppError;
use crate::models::ProfileUpdate;
use crate::session::Session;
use crate::views;
use crate::AppState;
use axum::{
    body::Bytes,
    extract::{Multipart, State},
    response::{Html, IntoResponse, Redirect, Response},
};

pub async fn show_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, AppError> {
    let Some(player) = current_player(&state, &session).await? else {
        return Ok((session.clear(), Redirect::to("/register")).into_response());
    };

    let (session, flashes) = session.take_flashes();
    Ok((session, Html(views::profile(&player, &flashes))).into_response())
}

/// Multipart profile form: `bio`, `theme_color`, `card_style` and an optional `avatar` file.
/// Text parts left out of the form keep their stored value.
pub async fn handle_profile_update(
    State(state): State<AppState>,
    session: Session,
    mut multipart: Multipart,
) -> Result<(Session, Redirect), AppError> {
    let Some(player) = current_player(&state, &session).await? else {
        return Ok((session.clear(), Redirect::to("/register")));
    };

    let mut update = ProfileUpdate::default();
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("bio") => update.bio = Some(Some(field.text().await?)),
            Some("theme_color") => update.theme_color = Some(Some(field.text().await?)),
            Some("card_style") => update.card_style = Some(Some(field.text().await?)),
            Some("avatar") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                // Browsers send an empty part when no file was chosen.
                if !file_name.is_empty() && !bytes.is_empty() {
                    upload = Some((file_name, bytes));
                }
            }
            _ => {}
        }
    }

    let mut update = update.normalized();
    if let Err(message) = update.validate() {
        return Ok((session.error(message), Redirect::to("/profile")));
    }

    let mut avatar_rejected = false;
    if let Some((file_name, bytes)) = upload {
        match avatar::allowed_extension(&file_name) {
            Some(ext) => match avatar::store_avatar(&state.avatar_dir, player.id, ext, &bytes).await {
                Ok(url) => update.avatar_url = Some(url),
                Err(e) => {
                    tracing::error!("Failed to save avatar for player {}: {}", player.id, e);
                }
            },
            None => {
                tracing::debug!("Rejected avatar '{}' for player {}", file_name, player.id);
                avatar_rejected = true;
            }
        }
    }

    if state.players.update_profile(player.id, &update).await?.is_none() {
        return Ok((session.clear(), Redirect::to("/register")));
    }
    tracing::info!("Player {} (id {}) updated their profile", player.name, player.id);

    let session = if avatar_rejected {
        session.error("Avatar must be a .png, .jpg or .jpeg file")
    } else {
        session.success("Profile updated")
    };
    Ok((session, Redirect::to("/profile")))
}
