//! secp256k1 Signing
//!
//! Recoverable ECDSA over a 32-byte digest, with Ethereum's `v = id + 27`.
//! Nonces are deterministic (RFC 6979) and `s` is normalized to the low half
//! of the curve order, so the same key and digest always give the same
//! signature.

use super::signature::{Signature, TypedSignature, RECOVERY_ID_OFFSET};
use crate::error::{SignerError, SignerResult};
use crate::security::PrivateKey;
use crate::types::{Address, Digest};
use secp256k1::ecdsa::{RecoverableSignature, RecoveryId};
use secp256k1::{Message, Secp256k1};

/// Sign a pre-computed digest
///
/// The digest is signed as-is; no prefix is applied.
pub fn sign(digest: &[u8], private_key: &PrivateKey) -> SignerResult<Signature> {
    if digest.len() != 32 {
        return Err(SignerError::InvalidDigestLength(digest.len()));
    }

    let message = Message::from_digest_slice(digest)?;
    let secp = Secp256k1::signing_only();

    let recoverable =
        private_key.with_secret_key(|key| Ok(secp.sign_ecdsa_recoverable(&message, key)))?;
    let (recovery_id, compact) = recoverable.serialize_compact();

    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&compact[0..32]);
    s.copy_from_slice(&compact[32..64]);

    // v is recovery_id + 27 (Ethereum standard)
    let v = recovery_id.to_i32() as u8 + RECOVERY_ID_OFFSET;

    Ok(Signature::new(r, s, v))
}

/// Sign a digest and append the typed-data tag (66 bytes)
pub fn sign_typed_data(digest: &[u8], private_key: &PrivateKey) -> SignerResult<TypedSignature> {
    Ok(sign(digest, private_key)?.into_typed())
}

/// Recover the signer's address from a signature over `digest`
pub fn recover_address(digest: &Digest, signature: &Signature) -> SignerResult<Address> {
    let recovery_id = RecoveryId::from_i32(i32::from(signature.recovery_id()?))
        .map_err(|e| SignerError::InvalidInput(e.to_string()))?;

    let mut compact = [0u8; 64];
    compact[0..32].copy_from_slice(&signature.r);
    compact[32..64].copy_from_slice(&signature.s);

    let recoverable = RecoverableSignature::from_compact(&compact, recovery_id)
        .map_err(|e| SignerError::InvalidInput(e.to_string()))?;

    let secp = Secp256k1::verification_only();
    let public_key = secp.recover_ecdsa(&Message::from_digest(*digest), &recoverable)?;

    Ok(Address::from_public_key(&public_key))
}

/// Verify a signature against a digest and expected address
pub fn verify(digest: &Digest, signature: &Signature, expected: &Address) -> SignerResult<bool> {
    Ok(recover_address(digest, signature)? == *expected)
}
