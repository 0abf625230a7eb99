//! Signing Schemes
//!
//! The exchange accepts two signature conventions. Onboarding uses a plain
//! personal_sign signature (65 bytes). Orders and cancellations sign their
//! EIP-712 digest wrapped as a personal message, then append the typed-data
//! tag (66 bytes).

use super::ecdsa;
use super::personal::personal_message_digest;
use super::signature::{Signature, TypedSignature};
use crate::error::{SignerError, SignerResult};
use crate::security::PrivateKey;
use crate::types::{Address, Digest};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Signature convention for a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SigningScheme {
    /// EIP-191 personal message, 65-byte signature
    PersonalMessage,
    /// EIP-712 digest, personal-wrapped, 66-byte tagged signature
    TypedData,
}

impl SigningScheme {
    /// The digest actually handed to the curve
    pub fn prehash(&self, payload: &[u8]) -> SignerResult<Digest> {
        match self {
            SigningScheme::PersonalMessage => Ok(personal_message_digest(payload)),
            SigningScheme::TypedData => {
                if payload.len() != 32 {
                    return Err(SignerError::InvalidDigestLength(payload.len()));
                }
                Ok(personal_message_digest(payload))
            }
        }
    }

    pub fn sign(&self, payload: &[u8], private_key: &PrivateKey) -> SignerResult<SignedPayload> {
        let digest = self.prehash(payload)?;
        match self {
            SigningScheme::PersonalMessage => {
                Ok(SignedPayload::Personal(ecdsa::sign(&digest, private_key)?))
            }
            SigningScheme::TypedData => {
                Ok(SignedPayload::Typed(ecdsa::sign_typed_data(&digest, private_key)?))
            }
        }
    }

    /// Encoded signature length for this scheme
    pub fn signature_len(&self) -> usize {
        match self {
            SigningScheme::PersonalMessage => Signature::LEN,
            SigningScheme::TypedData => TypedSignature::LEN,
        }
    }
}

impl fmt::Display for SigningScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SigningScheme::PersonalMessage => write!(f, "personal_message"),
            SigningScheme::TypedData => write!(f, "typed_data"),
        }
    }
}

/// A signature together with the scheme that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignedPayload {
    Personal(Signature),
    Typed(TypedSignature),
}

impl SignedPayload {
    pub fn scheme(&self) -> SigningScheme {
        match self {
            SignedPayload::Personal(_) => SigningScheme::PersonalMessage,
            SignedPayload::Typed(_) => SigningScheme::TypedData,
        }
    }

    /// The 65-byte recoverable signature, without any tag
    pub fn signature(&self) -> &Signature {
        match self {
            SignedPayload::Personal(sig) => sig,
            SignedPayload::Typed(typed) => typed.signature(),
        }
    }

    pub fn to_vec(&self) -> Vec<u8> {
        match self {
            SignedPayload::Personal(sig) => sig.to_bytes().to_vec(),
            SignedPayload::Typed(typed) => typed.to_bytes().to_vec(),
        }
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.to_vec()))
    }

    /// Recover the signer, given the payload that was signed
    pub fn recover(&self, payload: &[u8]) -> SignerResult<Address> {
        let digest = self.scheme().prehash(payload)?;
        ecdsa::recover_address(&digest, self.signature())
    }
}

impl fmt::Display for SignedPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for SignedPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}
