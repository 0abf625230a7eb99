//! Private Key Handling
//!
//! The signing key is held as an opaque secret:
//! - stored in a `SecretBox` and zeroized on drop
//! - never `Clone`, never printed by `Debug`
//! - exposed to the curve library only for the length of one call

use crate::error::{SignerError, SignerResult};
use crate::types::Address;
use secp256k1::{PublicKey, Secp256k1, SecretKey};
use secrecy::{ExposeSecret, SecretBox};
use std::fmt;
use zeroize::{Zeroize, Zeroizing};

/// A secp256k1 private key
pub struct PrivateKey {
    secret: SecretBox<[u8; 32]>,
}

impl PrivateKey {
    /// Create from 32 raw bytes
    ///
    /// Fails with `InvalidKey` for the wrong length, zero, or a scalar that
    /// is not below the curve order.
    pub fn from_bytes(bytes: &[u8]) -> SignerResult<Self> {
        if bytes.len() != 32 {
            return Err(SignerError::InvalidKey(format!(
                "expected 32 bytes, got {}",
                bytes.len()
            )));
        }

        let mut check = SecretKey::from_slice(bytes)
            .map_err(|e| SignerError::InvalidKey(e.to_string()))?;
        check.non_secure_erase();

        let mut raw = [0u8; 32];
        raw.copy_from_slice(bytes);
        let secret = SecretBox::new(Box::new(raw));
        raw.zeroize();

        Ok(Self { secret })
    }

    /// Parse a hex-encoded key, with or without the 0x prefix
    pub fn from_hex(hex_key: &str) -> SignerResult<Self> {
        let trimmed = hex_key.trim();
        let body = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if body.len() != 64 {
            return Err(SignerError::InvalidKey(format!(
                "expected 64 hex chars, got {}",
                body.len()
            )));
        }

        let mut raw = Zeroizing::new([0u8; 32]);
        hex::decode_to_slice(body, &mut raw[..])
            .map_err(|e| SignerError::InvalidKey(format!("invalid hex: {}", e)))?;
        Self::from_bytes(&raw[..])
    }

    /// Generate a fresh key from the thread RNG
    pub fn random() -> Self {
        let mut key = SecretKey::new(&mut secp256k1::rand::thread_rng());
        let mut raw = key.secret_bytes();
        key.non_secure_erase();

        let secret = SecretBox::new(Box::new(raw));
        raw.zeroize();
        Self { secret }
    }

    /// Run `f` with a short-lived curve key; the copy is erased afterwards
    pub(crate) fn with_secret_key<T>(
        &self,
        f: impl FnOnce(&SecretKey) -> SignerResult<T>,
    ) -> SignerResult<T> {
        let mut key = SecretKey::from_slice(self.secret.expose_secret())
            .map_err(|e| SignerError::InvalidKey(e.to_string()))?;
        let result = f(&key);
        key.non_secure_erase();
        result
    }

    pub fn public_key(&self) -> SignerResult<PublicKey> {
        let secp = Secp256k1::signing_only();
        self.with_secret_key(|key| Ok(PublicKey::from_secret_key(&secp, key)))
    }

    /// The Ethereum address controlled by this key
    pub fn address(&self) -> SignerResult<Address> {
        Ok(Address::from_public_key(&self.public_key()?))
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}
