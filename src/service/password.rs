use crate::error::QuizError;
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHasher};

/// Hash a password with Argon2id and a fresh random salt, returning the PHC string.
pub fn hash_password(password: &str) -> Result<String, QuizError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| QuizError::PasswordHash(e.to_string()))
}
