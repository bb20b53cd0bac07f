use std::fmt;
use std::str::FromStr;

use argon2::{Algorithm, Argon2, Params, Version};

use crate::config::Config;
use crate::crypto;
use crate::error::{DecodeError, PasswordError};

pub const SALT_LEN: usize = 16;
pub const OUTPUT_LEN: usize = 32;
pub const ITERATIONS: u32 = 3;
/// 64 MiB.
pub const MEMORY_KIB: u32 = 64 * 1024;
pub const PARALLELISM: u32 = 1;
pub const DELIMITER: char = '$';

/// Decoded form of `base64(salt)$base64(hash)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredHash {
    pub salt: [u8; SALT_LEN],
    pub hash: [u8; OUTPUT_LEN],
}

impl FromStr for StoredHash {
    type Err = DecodeError;

    fn from_str(stored: &str) -> Result<Self, Self::Err> {
        let (salt, hash) = stored
            .split_once(DELIMITER)
            .ok_or(DecodeError::MissingDelimiter)?;
        Ok(Self {
            salt: fixed_len("salt", crypto::decode("salt", salt)?)?,
            hash: fixed_len("hash", crypto::decode("hash", hash)?)?,
        })
    }
}

impl fmt::Display for StoredHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{DELIMITER}{}",
            crypto::encode(&self.salt),
            crypto::encode(&self.hash)
        )
    }
}

fn fixed_len<const N: usize>(part: &'static str, bytes: Vec<u8>) -> Result<[u8; N], DecodeError> {
    let actual = bytes.len();
    bytes.try_into().map_err(|_| DecodeError::InvalidLength {
        part,
        expected: N,
        actual,
    })
}

/// Argon2id (v0x13) hasher. The parameters are not written into the stored
/// string, so verification must use the hasher that produced it.
#[derive(Debug, Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        let params = Params::new(MEMORY_KIB, ITERATIONS, PARALLELISM, Some(OUTPUT_LEN))
            .expect("fixed Argon2 parameters are within range");
        Self { params }
    }
}

impl Argon2Hasher {
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    pub fn from_config(config: &Config) -> Result<Self, PasswordError> {
        Ok(Self::new(config.params()?))
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    fn derive(&self, password: &str, salt: &[u8]) -> Result<[u8; OUTPUT_LEN], PasswordError> {
        let mut output = [0u8; OUTPUT_LEN];
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
            .hash_password_into(password.as_bytes(), salt, &mut output)?;
        Ok(output)
    }

    /// Hash a password under a fresh random salt.
    ///
    /// Returns `base64(salt)$base64(hash)`.
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = crypto::generate_salt();
        let hash = self.derive(password, &salt)?;
        tracing::debug!(
            m_cost = self.params.m_cost(),
            t_cost = self.params.t_cost(),
            "password hashed"
        );
        Ok(StoredHash { salt, hash }.to_string())
    }

    /// Verify a password against a string produced by [`Argon2Hasher::hash`].
    ///
    /// Returns `Ok(true)` on a match, `Ok(false)` on a mismatch, or
    /// `Err(PasswordError::Decode(_))` if `stored` is malformed.
    pub fn verify(&self, password: &str, stored: &str) -> Result<bool, PasswordError> {
        let stored = stored.parse::<StoredHash>().map_err(|e| {
            tracing::warn!(error = %e, "stored password hash could not be decoded");
            e
        })?;
        let derived = self.derive(password, &stored.salt)?;
        let matched = crypto::constant_time_eq(&derived, &stored.hash);
        tracing::debug!(matched, "password verified");
        Ok(matched)
    }
}

/// Hash with the fixed parameters (3 iterations, 64 MiB, 1 lane).
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    Argon2Hasher::default().hash(password)
}

/// Verify against a hash produced by [`hash_password`].
pub fn verify_password(password: &str, stored: &str) -> Result<bool, PasswordError> {
    Argon2Hasher::default().verify(password, stored)
}
