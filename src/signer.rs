//! Order Signer
//!
//! Binds one private key to one trading domain and produces the three
//! signatures the exchange asks for: onboarding, order and cancellation.
//!
//! # Example
//! ```rust,ignore
//! use firefly_signer::{DomainConfig, Network, OrderSigner, PrivateKey};
//!
//! let domain = DomainConfig::for_network(Network::Testnet, contract);
//! let signer = OrderSigner::new(domain, PrivateKey::from_hex(key_hex)?)?;
//! let signed = signer.sign_order(&order)?;
//! println!("{} {}", signed.order_hash_hex(), signed.signature);
//! ```

use crate::config::DomainConfig;
use crate::eip712::{eip712_digest, pre_image, Eip712PreImage};
use crate::error::SignerResult;
use crate::log_debug;
use crate::order::{hash_cancellation_batch, Order};
use crate::security::PrivateKey;
use crate::signing::{onboarding_payload, sign_typed_data, Signature, SigningScheme, TypedSignature};
use crate::types::{digest_hex, Address, Digest};
use serde::Serialize;

const MODULE: &str = "signer";

/// A signed order, ready to be posted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedOrder {
    /// EIP-712 digest of the order
    pub order_hash: Digest,
    pub signature: TypedSignature,
}

impl SignedOrder {
    pub fn order_hash_hex(&self) -> String {
        digest_hex(&self.order_hash)
    }
}

/// A signed cancellation of one or more orders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedCancellation {
    pub order_hashes: Vec<Digest>,
    /// EIP-712 digest of the cancellation
    pub cancel_hash: Digest,
    pub signature: TypedSignature,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignedOrderJson {
    order_hash: String,
    signature: TypedSignature,
}

impl Serialize for SignedOrder {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SignedOrderJson {
            order_hash: self.order_hash_hex(),
            signature: self.signature,
        }
        .serialize(serializer)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignedCancellationJson {
    order_hashes: Vec<String>,
    cancel_hash: String,
    signature: TypedSignature,
}

impl Serialize for SignedCancellation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SignedCancellationJson {
            order_hashes: self.order_hashes.iter().map(digest_hex).collect(),
            cancel_hash: digest_hex(&self.cancel_hash),
            signature: self.signature,
        }
        .serialize(serializer)
    }
}

/// Signs exchange messages for one key on one domain
///
/// The domain separator and maker address are computed once.
#[derive(Debug)]
pub struct OrderSigner {
    domain: DomainConfig,
    domain_separator: Digest,
    private_key: PrivateKey,
    address: Address,
}

impl OrderSigner {
    pub fn new(domain: DomainConfig, private_key: PrivateKey) -> SignerResult<Self> {
        let domain_separator = domain.separator();
        let address = private_key.address()?;

        log_debug!(
            MODULE,
            "order signer ready",
            chain_id = domain.chain_id,
            contract = domain.verifying_contract,
            domain_separator = digest_hex(&domain_separator),
            address = address,
        );

        Ok(Self {
            domain,
            domain_separator,
            private_key,
            address,
        })
    }

    /// The maker address of the bound key
    pub fn address(&self) -> Address {
        self.address
    }

    pub fn domain(&self) -> &DomainConfig {
        &self.domain
    }

    pub fn domain_separator(&self) -> Digest {
        self.domain_separator
    }

    /// Personal-message signature over keccak256 of the onboarding message
    pub fn onboarding_signature(&self, message: &str) -> SignerResult<Signature> {
        let payload = onboarding_payload(message);
        let signed = SigningScheme::PersonalMessage.sign(&payload, &self.private_key)?;

        log_debug!(MODULE, "signed onboarding message", message = message);
        Ok(*signed.signature())
    }

    /// Domain separator, struct hash and digest of an order
    pub fn order_pre_image(&self, order: &Order) -> SignerResult<Eip712PreImage> {
        Ok(pre_image(self.domain_separator, order.struct_hash()?))
    }

    pub fn sign_order(&self, order: &Order) -> SignerResult<SignedOrder> {
        let image = self.order_pre_image(order)?;
        let signature = self.sign_typed(&image.digest)?;

        log_debug!(
            MODULE,
            "signed order",
            struct_hash = digest_hex(&image.struct_hash),
            order_hash = digest_hex(&image.digest),
        );

        Ok(SignedOrder {
            order_hash: image.digest,
            signature,
        })
    }

    /// Sign the cancellation of the orders with the given hashes
    pub fn sign_cancellation(&self, order_hashes: &[Digest]) -> SignerResult<SignedCancellation> {
        let struct_hash = hash_cancellation_batch(order_hashes)?;
        let cancel_hash = eip712_digest(&self.domain_separator, &struct_hash);
        let signature = self.sign_typed(&cancel_hash)?;

        log_debug!(
            MODULE,
            "signed cancellation",
            orders = order_hashes.len(),
            cancel_hash = digest_hex(&cancel_hash),
        );

        Ok(SignedCancellation {
            order_hashes: order_hashes.to_vec(),
            cancel_hash,
            signature,
        })
    }

    fn sign_typed(&self, digest: &Digest) -> SignerResult<TypedSignature> {
        let prehash = SigningScheme::TypedData.prehash(digest)?;
        sign_typed_data(&prehash, &self.private_key)
    }
}
