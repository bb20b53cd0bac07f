/// Reasons a stored hash string could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("missing '$' delimiter between salt and hash")]
    MissingDelimiter,

    #[error("invalid base64 in {part}: {source}")]
    InvalidBase64 {
        part: &'static str,
        #[source]
        source: base64::DecodeError,
    },

    #[error("{part} must be {expected} bytes, got {actual}")]
    InvalidLength {
        part: &'static str,
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("Malformed stored hash: {0}")]
    Decode(#[from] DecodeError),

    #[error("Hashing failed: {0}")]
    Hash(#[from] argon2::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] envy::Error),
}

impl PasswordError {
    /// True when the stored hash itself was unusable, as opposed to a
    /// failure inside Argon2 or the configuration layer.
    pub fn is_decode(&self) -> bool {
        matches!(self, PasswordError::Decode(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn missing_delimiter_message() {
        let err = PasswordError::from(DecodeError::MissingDelimiter);
        assert!(err.is_decode());
        assert_eq!(
            err.to_string(),
            "Malformed stored hash: missing '$' delimiter between salt and hash"
        );
    }

    #[test]
    fn invalid_length_names_the_part() {
        let err = DecodeError::InvalidLength {
            part: "hash",
            expected: 32,
            actual: 31,
        };
        assert_eq!(err.to_string(), "hash must be 32 bytes, got 31");
    }

    #[test]
    fn invalid_base64_keeps_source() {
        let err = DecodeError::InvalidBase64 {
            part: "salt",
            source: base64::DecodeError::InvalidPadding,
        };
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("invalid base64 in salt"));
    }

    #[test]
    fn argon2_failure_is_not_a_decode_error() {
        let err = PasswordError::from(argon2::Error::SaltTooShort);
        assert!(!err.is_decode());
        assert!(err.to_string().starts_with("Hashing failed"));
    }
}
