//! Argon2id password hashing for identity services.
//!
//! Stored hashes have the form `base64(salt)$base64(hash)` with a 16-byte
//! salt and a 32-byte Argon2id output.

pub mod config;
pub mod crypto;
pub mod error;
pub mod password;

pub use error::{DecodeError, PasswordError};
pub use password::{Argon2Hasher, StoredHash, hash_password, verify_password};
