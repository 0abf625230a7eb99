//! Signature Types
//!
//! `Signature` is the 65-byte Ethereum form `r || s || v`. `TypedSignature`
//! appends the exchange's one-byte type tag, giving 66 bytes.

use crate::error::{SignerError, SignerResult};
use serde::{Serialize, Serializer};
use std::fmt;

/// Trailing byte marking a typed-data (order / cancellation) signature
pub const TYPED_DATA_TAG: u8 = 0x01;

/// Ethereum recovery ids are biased by 27
pub const RECOVERY_ID_OFFSET: u8 = 27;

/// Recoverable ECDSA signature components
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    /// r component (32 bytes)
    pub r: [u8; 32],
    /// s component (32 bytes)
    pub s: [u8; 32],
    /// v component (recovery id + 27)
    pub v: u8,
}

impl Signature {
    pub const LEN: usize = 65;

    /// Create from raw components
    pub fn new(r: [u8; 32], s: [u8; 32], v: u8) -> Self {
        Self { r, s, v }
    }

    /// Create from 65-byte signature (r || s || v)
    pub fn from_bytes(bytes: &[u8]) -> SignerResult<Self> {
        if bytes.len() != Self::LEN {
            return Err(SignerError::InvalidInput(format!(
                "signature must be {} bytes, got {}",
                Self::LEN,
                bytes.len()
            )));
        }

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[0..32]);
        s.copy_from_slice(&bytes[32..64]);

        Ok(Self { r, s, v: bytes[64] })
    }

    /// Convert to 65-byte representation (r || s || v)
    pub fn to_bytes(&self) -> [u8; 65] {
        let mut bytes = [0u8; 65];
        bytes[0..32].copy_from_slice(&self.r);
        bytes[32..64].copy_from_slice(&self.s);
        bytes[64] = self.v;
        bytes
    }

    /// Raw 0..=3 recovery id
    pub fn recovery_id(&self) -> SignerResult<u8> {
        match self.v.checked_sub(RECOVERY_ID_OFFSET) {
            Some(id) if id <= 3 => Ok(id),
            _ => Err(SignerError::InvalidInput(format!("invalid v value: {}", self.v))),
        }
    }

    /// Append the typed-data tag
    pub fn into_typed(self) -> TypedSignature {
        TypedSignature { inner: self }
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.to_bytes()))
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", self.to_hex())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// A 65-byte signature followed by [`TYPED_DATA_TAG`]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TypedSignature {
    inner: Signature,
}

impl TypedSignature {
    pub const LEN: usize = Signature::LEN + 1;

    /// Parse 66 bytes; the last one must be the typed-data tag
    pub fn from_bytes(bytes: &[u8]) -> SignerResult<Self> {
        if bytes.len() != Self::LEN {
            return Err(SignerError::InvalidInput(format!(
                "typed signature must be {} bytes, got {}",
                Self::LEN,
                bytes.len()
            )));
        }
        if bytes[Signature::LEN] != TYPED_DATA_TAG {
            return Err(SignerError::InvalidInput(format!(
                "unknown signature type tag: {:#04x}",
                bytes[Signature::LEN]
            )));
        }

        Ok(Signature::from_bytes(&bytes[..Signature::LEN])?.into_typed())
    }

    pub fn to_bytes(&self) -> [u8; 66] {
        let mut bytes = [0u8; 66];
        bytes[..Signature::LEN].copy_from_slice(&self.inner.to_bytes());
        bytes[Signature::LEN] = TYPED_DATA_TAG;
        bytes
    }

    /// The untagged 65-byte signature
    pub fn signature(&self) -> &Signature {
        &self.inner
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.to_bytes()))
    }
}

impl fmt::Debug for TypedSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypedSignature({})", self.to_hex())
    }
}

impl fmt::Display for TypedSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for TypedSignature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}
