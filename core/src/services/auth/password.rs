//! Password hashing helpers
//!
//! bcrypt is CPU bound, so hashing and verification run on the blocking pool.

use once_cell::sync::Lazy;

use crate::errors::{DomainError, DomainResult, ValidationError};

/// Work factor for newly created hashes
pub const BCRYPT_COST: u32 = 10;

/// Hash compared against when the username does not exist, so that unknown
/// users cost the same bcrypt round as wrong passwords.
static DUMMY_PASSWORD_HASH: Lazy<String> = Lazy::new(|| {
    bcrypt::hash("agenda-placeholder-password", BCRYPT_COST).unwrap_or_default()
});

/// Hash a password with the default cost
pub async fn hash_password(password: &str) -> DomainResult<String> {
    hash_password_with_cost(password, BCRYPT_COST).await
}

/// Hash a password with an explicit bcrypt cost (4..=31)
pub async fn hash_password_with_cost(password: &str, cost: u32) -> DomainResult<String> {
    if password.is_empty() {
        return Err(ValidationError::RequiredField {
            field: "password".to_string(),
        }
        .into());
    }

    let password = password.to_owned();
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(DomainError::internal)?
        .map_err(|e| DomainError::internal(format!("Password hashing failed: {}", e)))
}

/// Check `password` against a stored bcrypt hash
///
/// An unparseable stored hash counts as a mismatch.
pub async fn verify_password(password: &str, hash: &str) -> DomainResult<bool> {
    let password = password.to_owned();
    let hash = hash.to_owned();

    let outcome = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(DomainError::internal)?;

    match outcome {
        Ok(matches) => Ok(matches),
        Err(e) => {
            tracing::warn!(error = %e, "Stored password hash could not be verified");
            Ok(false)
        }
    }
}

/// Burn one bcrypt verification for a login attempt on an unknown username
pub(crate) async fn verify_dummy(password: &str) -> DomainResult<()> {
    let password = password.to_owned();
    // The first call also pays for computing the dummy hash, off the async workers.
    tokio::task::spawn_blocking(move || {
        let _ = bcrypt::verify(password, DUMMY_PASSWORD_HASH.as_str());
    })
    .await
    .map_err(DomainError::internal)
}
