//! Signed cookie session.
//!
//! The session carries the logged-in player's id and any pending flash
//! notices. Both live in cookies signed with a key derived from `SECRET_KEY`,
//! so a tampered cookie simply reads as absent.

use async_trait::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum::response::{IntoResponseParts, ResponseParts};
use axum_extra::extract::cookie::{Cookie, Key, SameSite, SignedCookieJar};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};
use std::convert::Infallible;

pub const PLAYER_COOKIE: &str = "player_id";
pub const FLASH_COOKIE: &str = "flash";

/// Derive the 64-byte cookie signing key from an arbitrary-length secret.
pub fn cookie_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

impl FlashLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Error => "error",
        }
    }
}

/// A notice shown on the next rendered page only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

pub struct Session {
    jar: SignedCookieJar,
}

impl Session {
    pub fn new(jar: SignedCookieJar) -> Self {
        Self { jar }
    }

    pub fn player_id(&self) -> Option<i32> {
        self.jar
            .get(PLAYER_COOKIE)
            .and_then(|cookie| cookie.value().parse().ok())
    }

    pub fn set_player_id(self, player_id: i32) -> Self {
        let cookie = Cookie::build((PLAYER_COOKIE, player_id.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax);
        Self { jar: self.jar.add(cookie) }
    }

    /// Forget the logged-in player. Pending flashes survive so logout can report itself.
    pub fn clear(self) -> Self {
        if self.jar.get(PLAYER_COOKIE).is_none() {
            return self;
        }
        Self { jar: self.jar.remove(Cookie::build(PLAYER_COOKIE).path("/")) }
    }

    pub fn flash(self, level: FlashLevel, message: impl Into<String>) -> Self {
        let mut flashes = self.pending_flashes();
        flashes.push(Flash { level, message: message.into() });

        let encoded = match serde_json::to_vec(&flashes) {
            Ok(json) => URL_SAFE_NO_PAD.encode(json),
            Err(e) => {
                tracing::error!("Failed to encode flash messages: {}", e);
                return self;
            }
        };
        let cookie = Cookie::build((FLASH_COOKIE, encoded))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax);
        Self { jar: self.jar.add(cookie) }
    }

    pub fn success(self, message: impl Into<String>) -> Self {
        self.flash(FlashLevel::Success, message)
    }

    pub fn error(self, message: impl Into<String>) -> Self {
        self.flash(FlashLevel::Error, message)
    }

    /// Return pending flashes and drop them from the session.
    pub fn take_flashes(self) -> (Self, Vec<Flash>) {
        let flashes = self.pending_flashes();
        if self.jar.get(FLASH_COOKIE).is_none() {
            return (self, flashes);
        }
        let jar = self.jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
        (Self { jar }, flashes)
    }

    fn pending_flashes(&self) -> Vec<Flash> {
        self.jar
            .get(FLASH_COOKIE)
            .and_then(|cookie| URL_SAFE_NO_PAD.decode(cookie.value()).ok())
            .and_then(|json| serde_json::from_slice(&json).ok())
            .unwrap_or_default()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = SignedCookieJar::<Key>::from_request_parts(parts, state).await?;
        Ok(Self::new(jar))
    }
}

impl IntoResponseParts for Session {
    type Error = Infallible;

    fn into_response_parts(self, res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        self.jar.into_response_parts(res)
    }
}
