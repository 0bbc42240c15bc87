use crate::error::AppError;

pub const MIN_PASSWORD_LEN: usize = 6;
/// bcrypt ignores input past 72 bytes; cap well below anything surprising.
pub const MAX_PASSWORD_LEN: usize = 100;

/// Hash a password off the async runtime.
pub async fn hash_password(password: &str, cost: u32) -> Result<String, AppError> {
    let password = password.to_string();
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
    Ok(hash)
}

pub async fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let password = password.to_string();
    let hash = hash.to_string();
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
    Ok(matches)
}
