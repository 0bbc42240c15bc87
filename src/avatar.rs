//! Avatar image storage.
//!
//! Uploads are accepted by filename extension alone and written to
//! `player_<id>.<ext>`, so a new upload replaces the previous one.

use std::path::Path;

pub const AVATAR_URL_PREFIX: &str = "/static/avatars";

/// Map an uploaded filename to the extension it is stored under, if allowed.
pub fn allowed_extension(file_name: &str) -> Option<&'static str> {
    let (_, ext) = file_name.rsplit_once('.')?;
    match ext.to_ascii_lowercase().as_str() {
        "png" => Some("png"),
        "jpg" | "jpeg" => Some("jpg"),
        _ => None,
    }
}

pub fn avatar_file_name(player_id: i32, ext: &str) -> String {
    format!("player_{}.{}", player_id, ext)
}

/// Write the avatar into `dir` and return the URL it is published under.
pub async fn store_avatar(dir: &Path, player_id: i32, ext: &str, bytes: &[u8]) -> std::io::Result<String> {
    let file_name = avatar_file_name(player_id, ext);
    tokio::fs::create_dir_all(dir).await?;
    tokio::fs::write(dir.join(&file_name), bytes).await?;
    Ok(format!("{}/{}", AVATAR_URL_PREFIX, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_extensions() {
        assert_eq!(allowed_extension("me.png"), Some("png"));
        assert_eq!(allowed_extension("ME.PNG"), Some("png"));
        assert_eq!(allowed_extension("holiday.photo.jpeg"), Some("jpg"));
        assert_eq!(allowed_extension("x.jpg"), Some("jpg"));
    }

    #[test]
    fn test_rejected_extensions() {
        assert_eq!(allowed_extension("x.gif"), None);
        assert_eq!(allowed_extension("png"), None);
        assert_eq!(allowed_extension("x.png.exe"), None);
        assert_eq!(allowed_extension(""), None);
    }

    #[tokio::test]
    async fn test_store_overwrites_previous_upload() {
        let dir = tempfile::tempdir().unwrap();
        let avatars = dir.path().join("avatars");

        let url = store_avatar(&avatars, 7, "png", b"first").await.unwrap();
        assert_eq!(url, "/static/avatars/player_7.png");

        store_avatar(&avatars, 7, "png", b"second").await.unwrap();
        let contents = std::fs::read(avatars.join("player_7.png")).unwrap();
        assert_eq!(contents, b"second");
    }
}
