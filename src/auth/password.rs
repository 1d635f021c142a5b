//! bcrypt hashing, run on tokio's blocking pool.

use crate::errors::{AppError, AppResult};

pub async fn hash_password(password: &str, cost: u32) -> AppResult<String> {
    let password = password.to_string();

    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))??;
    Ok(hashed)
}

/// Checks `password` against a stored bcrypt hash. A hash that cannot be
/// parsed counts as a mismatch.
pub async fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let password = password.to_string();
    let hash = hash.to_string();

    let verdict = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| {
            AppError::InternalError(format!("Password verification task failed: {}", e))
        })?;

    match verdict {
        Ok(matches) => Ok(matches),
        Err(e) => {
            log::warn!("Stored password hash could not be verified: {}", e);
            Ok(false)
        }
    }
}
