use crate::db::StoreError;
use crate::error::AppError;
use crate::models::NewPlayer;
use crate::password::{self, MAX_PASSWORD_LEN, MIN_PASSWORD_LEN};
use crate::session::Session;
use crate::views;
use crate::AppState;
use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;

pub const MAX_FIELD_LEN: usize = 50;

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub race: String,
    #[serde(default)]
    pub player_class: String,
}

impl RegisterForm {
    /// Trim the text fields. The password is taken verbatim.
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            password: self.password,
            race: self.race.trim().to_string(),
            player_class: self.player_class.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        for (label, value) in [("Name", &self.name), ("Race", &self.race), ("Class", &self.player_class)] {
            if value.is_empty() {
                return Err(format!("{} cannot be empty", label));
            }
            if value.chars().count() > MAX_FIELD_LEN {
                return Err(format!("{} must be at most {} characters", label, MAX_FIELD_LEN));
            }
        }

        let password_len = self.password.chars().count();
        if password_len < MIN_PASSWORD_LEN {
            return Err(format!("Password must be at least {} characters", MIN_PASSWORD_LEN));
        }
        if password_len > MAX_PASSWORD_LEN {
            return Err(format!("Password must be at most {} characters", MAX_PASSWORD_LEN));
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct RegisterQuery {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub password: String,
}

/// `/register?name=...`, so a failed attempt lands on a pre-filled form.
fn register_redirect(name: &str) -> Redirect {
    match serde_urlencoded::to_string([("name", name)]) {
        Ok(query) if !name.is_empty() => Redirect::to(&format!("/register?{}", query)),
        _ => Redirect::to("/register"),
    }
}

pub async fn register_form(
    Query(query): Query<RegisterQuery>,
    session: Session,
) -> (Session, Html<String>) {
    let (session, flashes) = session.take_flashes();
    (session, Html(views::register(query.name.trim(), &flashes)))
}

pub async fn handle_register(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RegisterForm>,
) -> Result<(Session, Redirect), AppError> {
    let form = form.trimmed();
    if let Err(message) = form.validate() {
        return Ok((session.error(message), register_redirect(&form.name)));
    }

    if state.players.find_by_name(&form.name).await?.is_some() {
        let message = format!("The name '{}' is already taken", form.name);
        return Ok((session.error(message), register_redirect(&form.name)));
    }

    let password_hash = password::hash_password(&form.password, state.bcrypt_cost).await?;
    let new_player = NewPlayer::new(form.name, password_hash, form.race, form.player_class);

    let player = match state.players.create(&new_player).await {
        Ok(player) => player,
        Err(StoreError::NameTaken(name)) => {
            let message = format!("The name '{}' is already taken", name);
            return Ok((session.error(message), register_redirect(&name)));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(
        "Registered player {} (id {}) as {} {}",
        player.name,
        player.id,
        player.race,
        player.player_class
    );

    let session = session
        .set_player_id(player.id)
        .success(format!("Welcome, {}!", player.name));
    Ok((session, Redirect::to("/")))
}

pub async fn handle_login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<(Session, Redirect), AppError> {
    let name = form.name.trim();
    if name.is_empty() {
        return Ok((session, Redirect::to("/")));
    }

    let Some(player) = state.players.find_by_name(name).await? else {
        let message = format!("No character named '{}' yet. Create one below.", name);
        return Ok((session.error(message), register_redirect(name)));
    };

    if !password::verify_password(&form.password, &player.password_hash).await? {
        tracing::warn!("Failed login for player {}", player.name);
        return Ok((session.error("Invalid name or password"), Redirect::to("/")));
    }

    tracing::info!("Player {} (id {}) logged in", player.name, player.id);
    let session = session
        .set_player_id(player.id)
        .success(format!("Welcome back, {}!", player.name));
    Ok((session, Redirect::to("/")))
}

pub async fn handle_logout(session: Session) -> (Session, Redirect) {
    if let Some(player_id) = session.player_id() {
        tracing::info!("Player id {} logged out", player_id);
    }
    (session.clear().success("You have been logged out"), Redirect::to("/"))
}
