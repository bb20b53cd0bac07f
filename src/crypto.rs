use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use rand::RngCore;
use rand::rngs::OsRng;
use subtle::ConstantTimeEq;

use crate::error::DecodeError;
use crate::password::SALT_LEN;

/// Fill a fresh salt from the operating system RNG.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    salt
}

/// Standard-alphabet, padded base64.
pub fn encode(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Decode one side of a stored hash. `part` names that side in the error.
pub fn decode(part: &'static str, encoded: &str) -> Result<Vec<u8>, DecodeError> {
    BASE64
        .decode(encoded)
        .map_err(|source| DecodeError::InvalidBase64 { part, source })
}

/// Byte equality whose running time depends only on the input lengths.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}
