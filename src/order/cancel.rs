//! Order Cancellation
//!
//! A cancellation is the struct `CancelLimitOrder` with the fixed action
//! string "Cancel Orders" and the hashes of the orders being cancelled.

use crate::eip712::{encode_array, encode_string, hash_struct, Token, TypeSignature};
use crate::error::{SignerError, SignerResult};
use crate::types::Digest;

/// EIP-712 type string of a cancellation
pub const CANCEL_TYPE: &str = "CancelLimitOrder(string action,bytes32[] orderHashes)";

/// Value of the `action` member
pub const CANCEL_ACTION: &str = "Cancel Orders";

/// Struct hash cancelling a single order
pub fn hash_cancellation(order_hash: &Digest) -> SignerResult<Digest> {
    hash_cancellation_batch(std::slice::from_ref(order_hash))
}

/// Struct hash cancelling several orders at once
///
/// `orderHashes` is a `bytes32[]`, so its member word is the keccak of the
/// concatenated hashes in the given order.
pub fn hash_cancellation_batch(order_hashes: &[Digest]) -> SignerResult<Digest> {
    if order_hashes.is_empty() {
        return Err(SignerError::InvalidInput(
            "cancellation needs at least one order hash".to_string(),
        ));
    }

    let signature = TypeSignature::parse(CANCEL_TYPE)?;
    hash_struct(
        &signature,
        &[
            Token::Hash(encode_string(CANCEL_ACTION)),
            Token::Hash(encode_array(order_hashes)),
        ],
    )
}
