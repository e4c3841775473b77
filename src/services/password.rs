use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2,
};

use crate::error::Result;

/// Hash a plain-text password into an Argon2id PHC string
pub fn hash_password(password: &str) -> Result<String> {
    let salt_bytes: [u8; 16] = rand::random();
    let salt = SaltString::encode_b64(&salt_bytes)?;
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}
