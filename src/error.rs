//! Unified error types for the Firefly signer
//!
//! Every fallible operation in the crate returns [`SignerResult`]. All errors
//! are terminal: hashing and signing are deterministic, so the same input
//! fails the same way every time and callers should fix the input rather
//! than retry.

use serde::{Deserialize, Serialize};

/// Main error type for all signer operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignerError {
    /// Malformed hex, address or digest text
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// A value does not fit the field it is packed into
    #[error("Overflow: {0}")]
    Overflow(String),

    /// Malformed, zero or out-of-range private key
    #[error("Invalid private key: {0}")]
    InvalidKey(String),

    /// Digest handed to the signer is not exactly 32 bytes
    #[error("Invalid digest length: expected 32 bytes, got {0}")]
    InvalidDigestLength(usize),

    /// Failure inside the curve library
    #[error("Signing error: {0}")]
    Signing(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl SignerError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SignerError::Decoding(_) => ErrorCode::DecodingError,
            SignerError::Overflow(_) => ErrorCode::OverflowError,
            SignerError::InvalidKey(_) => ErrorCode::InvalidKeyError,
            SignerError::InvalidDigestLength(_) => ErrorCode::InvalidDigestLengthError,
            SignerError::Signing(_) => ErrorCode::SigningError,
            SignerError::InvalidInput(_) => ErrorCode::InvalidInput,
            SignerError::Config(_) => ErrorCode::ConfigError,
        }
    }

    /// Serializable form used by the CLI's JSON output
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code(),
            message: self.to_string(),
        }
    }
}

/// Error codes for categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    DecodingError,
    OverflowError,
    InvalidKeyError,
    InvalidDigestLengthError,
    SigningError,
    InvalidInput,
    ConfigError,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub message: String,
}

/// Result type alias for signer operations
pub type SignerResult<T> = Result<T, SignerError>;

impl From<hex::FromHexError> for SignerError {
    fn from(e: hex::FromHexError) -> Self {
        SignerError::Decoding(format!("invalid hex: {}", e))
    }
}

impl From<secp256k1::Error> for SignerError {
    fn from(e: secp256k1::Error) -> Self {
        SignerError::Signing(format!("secp256k1: {}", e))
    }
}

impl From<serde_json::Error> for SignerError {
    fn from(e: serde_json::Error) -> Self {
        SignerError::Config(e.to_string())
    }
}
