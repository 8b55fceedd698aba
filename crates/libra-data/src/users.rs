use serde::{Deserialize, Serialize};
use sha2::Sha256;
use sqlx::FromRow;

const PBKDF2_ROUNDS: u32 = 20_000;
const HASH_SCHEME: &str = "pbkdf2_sha256";

#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Credential hash as produced by `hash_password`
    pub password: String,
}

impl User {
    /// Create a user with a freshly hashed password.
    pub fn new(name: &str, email: &str, password: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            password: hash_password(password),
            ..Default::default()
        }
    }

    /// Check a clear text password against the stored hash
    pub fn verify_password(&self, password: &str) -> bool {
        verify_password(&self.password, password)
    }
}

fn derive_key(password: &str, salt: &[u8], rounds: u32) -> [u8; 32] {
    let mut key = [0u8; 32];
    pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, rounds, &mut key);
    key
}

/// hash_password derives a key with pbkdf2 hmac sha256 from the password
/// and a random salt. The result is `scheme$rounds$salt$key`, hex encoded.
pub fn hash_password(password: &str) -> String {
    let salt: [u8; 16] = rand::random();
    let key = derive_key(password, &salt, PBKDF2_ROUNDS);
    format!(
        "{}${}${}${}",
        HASH_SCHEME,
        PBKDF2_ROUNDS,
        hex::encode(salt),
        hex::encode(key)
    )
}

/// Verify a password against a hash from `hash_password`.
/// Malformed hashes never verify.
pub fn verify_password(hash: &str, password: &str) -> bool {
    let mut parts = hash.split('$');
    let (Some(scheme), Some(rounds), Some(salt), Some(key), None) = (
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
    ) else {
        return false;
    };
    if scheme != HASH_SCHEME {
        return false;
    }
    let (Ok(rounds), Ok(salt), Ok(expected)) =
        (rounds.parse::<u32>(), hex::decode(salt), hex::decode(key))
    else {
        return false;
    };
    let actual = derive_key(password, &salt, rounds);

    // Compare without early exit
    expected.len() == actual.len()
        && expected
            .iter()
            .zip(actual.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}
