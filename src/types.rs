//! Shared types for the Firefly signer
//!
//! Value types that cross module boundaries: account addresses and 32-byte
//! digests.

use crate::error::{SignerError, SignerResult};
use crate::utils::crypto::{keccak256, to_checksum_address};
use secp256k1::PublicKey;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A 32-byte hash: struct hash, domain separator or final signing digest
pub type Digest = [u8; 32];

// =============================================================================
// Address
// =============================================================================

/// A 20-byte Ethereum account identifier
///
/// Parsed from `0x` followed by exactly 40 hex characters (any case) and
/// displayed in EIP-55 checksummed form.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Address([u8; 20]);

impl Address {
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Derive the address of a secp256k1 public key
    ///
    /// Last 20 bytes of keccak256 over the uncompressed key without its
    /// 0x04 prefix.
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        let uncompressed = public_key.serialize_uncompressed();
        let hash = keccak256(&uncompressed[1..]);

        let mut address = [0u8; 20];
        address.copy_from_slice(&hash[12..]);
        Self(address)
    }

    /// Left-padded 32-byte ABI word
    pub fn to_word(&self) -> [u8; 32] {
        let mut word = [0u8; 32];
        word[12..].copy_from_slice(&self.0);
        word
    }

    pub fn to_checksum(&self) -> String {
        to_checksum_address(&self.0)
    }
}

impl FromStr for Address {
    type Err = SignerError;

    fn from_str(s: &str) -> SignerResult<Self> {
        let trimmed = s.trim();
        let body = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .ok_or_else(|| SignerError::Decoding(format!("address must start with 0x: {}", trimmed)))?;

        if body.len() != 40 {
            return Err(SignerError::Decoding(format!(
                "invalid address length: expected 40 hex chars, got {}",
                body.len()
            )));
        }

        let mut bytes = [0u8; 20];
        hex::decode_to_slice(body, &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_checksum())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_checksum())
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_checksum())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Digest helpers
// =============================================================================

/// Parse a 32-byte digest from hex, with or without the 0x prefix
pub fn parse_digest(s: &str) -> SignerResult<Digest> {
    let trimmed = s.trim();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if body.len() != 64 {
        return Err(SignerError::Decoding(format!(
            "invalid digest length: expected 64 hex chars, got {}",
            body.len()
        )));
    }

    let mut digest = [0u8; 32];
    hex::decode_to_slice(body, &mut digest)?;
    Ok(digest)
}

/// `0x`-prefixed lowercase hex of a digest
pub fn digest_hex(digest: &Digest) -> String {
    format!("0x{}", hex::encode(digest))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTRACT: &str = "0x934Dd6503795ef6EE6a36e3b3f1d7Be6c7096955";

    #[test]
    fn test_address_roundtrip_keeps_checksum() {
        let addr: Address = CONTRACT.parse().unwrap();
        assert_eq!(addr.to_string(), CONTRACT);

        let lower: Address = CONTRACT.to_lowercase().parse().unwrap();
        assert_eq!(lower, addr);
    }

    #[test]
    fn test_address_word_is_left_padded() {
        let addr: Address = CONTRACT.parse().unwrap();
        let word = addr.to_word();
        assert_eq!(&word[..12], &[0u8; 12]);
        assert_eq!(&word[12..], addr.as_bytes());
    }

    #[test]
    fn test_address_rejects_malformed_input() {
        // missing prefix
        assert!(matches!(
            "934Dd6503795ef6EE6a36e3b3f1d7Be6c7096955".parse::<Address>(),
            Err(SignerError::Decoding(_))
        ));
        // 19 bytes
        assert!(matches!(
            "0x934Dd6503795ef6EE6a36e3b3f1d7Be6c70969".parse::<Address>(),
            Err(SignerError::Decoding(_))
        ));
        // non-hex character
        assert!(matches!(
            "0x934Dd6503795ef6EE6a36e3b3f1d7Be6c709695g".parse::<Address>(),
            Err(SignerError::Decoding(_))
        ));
    }

    #[test]
    fn test_address_serde() {
        let addr: Address = CONTRACT.parse().unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, format!("\"{}\"", CONTRACT));

        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);

        assert!(serde_json::from_str::<Address>("\"0x1234\"").is_err());
    }

    #[test]
    fn test_parse_digest() {
        let hex_str = "400fbdbc69662f7bf23c57799ea6b5ff6c6c7e2742a46eccbf83b3366595bf43";
        let with_prefix = parse_digest(&format!("0x{}", hex_str)).unwrap();
        let without = parse_digest(hex_str).unwrap();
        assert_eq!(with_prefix, without);
        assert_eq!(digest_hex(&with_prefix), format!("0x{}", hex_str));

        assert!(matches!(parse_digest("0x1234"), Err(SignerError::Decoding(_))));
        assert!(matches!(
            parse_digest(&"zz".repeat(32)),
            Err(SignerError::Decoding(_))
        ));
    }
}
