//! Firefly Signer
//!
//! EIP-712 typed-data hashing and signing for the Firefly isolated-trader
//! order book on Arbitrum.
//!
//! # Architecture
//!
//! This crate provides:
//! - **order**: the `Order` struct, flag packing, order and cancellation hashes
//! - **eip712**: struct encoding, domain separator, final digest
//! - **signing**: secp256k1 signatures, personal messages, signing schemes
//! - **signer**: `OrderSigner`, one key bound to one domain
//! - **config**: domain values and network presets
//! - **security**: private key storage
//!
//! # Security
//!
//! Private keys are held in `secrecy` boxes and zeroed when dropped. They
//! are never printed and never logged.
//!
//! # Example
//!
//! ```rust,ignore
//! use firefly_signer::{DomainConfig, Network, OrderSigner, PrivateKey};
//!
//! let domain = DomainConfig::for_network(Network::Testnet, "0x934D...6955".parse()?);
//! let signer = OrderSigner::new(domain, PrivateKey::from_hex(&key_hex)?)?;
//!
//! let onboarding = signer.onboarding_signature(Network::Testnet.onboarding_url())?;
//! let signed = signer.sign_order(&order)?;
//! let cancel = signer.sign_cancellation(&[signed.order_hash])?;
//! ```

pub mod config;
pub mod eip712;
pub mod error;
pub mod order;
pub mod security;
pub mod signer;
pub mod signing;
pub mod types;
pub mod utils;

// Re-export key types for convenience
pub use config::{DomainConfig, Network};
pub use error::{ErrorCode, SignerError, SignerResult};
pub use types::{Address, Digest};

pub use eip712::{domain_separator, eip712_digest, Eip712PreImage};
pub use order::{
    hash_cancellation, hash_cancellation_batch, hash_order, pack_flags, unpack_flags, Order,
    OrderRequest,
};
pub use security::PrivateKey;
pub use signer::{OrderSigner, SignedCancellation, SignedOrder};
pub use signing::{
    personal_message_digest, recover_address, sign, sign_typed_data, verify, Signature,
    SignedPayload, SigningScheme, TypedSignature,
};
pub use utils::crypto::{keccak256, to_checksum_address};
pub use utils::units::{format_wei, parse_wei, to_wei};
