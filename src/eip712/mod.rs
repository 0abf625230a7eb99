//! EIP-712 Typed Data Hashing
//!
//! Struct hashing, domain separation and the final signing digest for
//! EIP-712 typed structured data.
//!
//! # Reference
//! - <https://eips.ethereum.org/EIPS/eip-712>
//!
//! # Example
//! ```rust,ignore
//! use firefly_signer::eip712::{domain_separator, eip712_digest};
//!
//! let domain = domain_separator("IsolatedTrader", "1.0", 421613, &contract);
//! let digest = eip712_digest(&domain, &order.struct_hash()?);
//! ```

pub mod types;
pub mod encoder;
pub mod hasher;

pub use types::*;
pub use encoder::*;
pub use hasher::*;

#[cfg(test)]
mod tests;
