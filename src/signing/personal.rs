//! Ethereum Personal Message Signing (EIP-191)
//!
//! Implements the personal_sign digest.
//! Reference: https://eips.ethereum.org/EIPS/eip-191
//!
//! Format: "\x19Ethereum Signed Message:\n" + len(message) + message

use super::ecdsa;
use super::signature::Signature;
use crate::error::SignerResult;
use crate::security::PrivateKey;
use crate::types::{Address, Digest};
use crate::utils::crypto::{keccak256, keccak256_concat};

/// Ethereum message prefix for personal_sign
pub const ETH_MESSAGE_PREFIX: &str = "\x19Ethereum Signed Message:\n";

/// Hash a message with the Ethereum personal sign prefix
///
/// The length is the decimal byte count of `message`.
pub fn personal_message_digest(message: &[u8]) -> Digest {
    let prefix = format!("{}{}", ETH_MESSAGE_PREFIX, message.len());
    keccak256_concat(&[prefix.as_bytes(), message])
}

/// Sign a message using Ethereum personal_sign
pub fn personal_sign(message: &[u8], private_key: &PrivateKey) -> SignerResult<Signature> {
    ecdsa::sign(&personal_message_digest(message), private_key)
}

/// Recover the signer of a personal_sign signature
pub fn recover_personal_signer(message: &[u8], signature: &Signature) -> SignerResult<Address> {
    ecdsa::recover_address(&personal_message_digest(message), signature)
}

/// The exchange's onboarding payload: keccak256 of the onboarding URL
pub fn onboarding_payload(message: &str) -> Digest {
    keccak256(message.as_bytes())
}
