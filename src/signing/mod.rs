//! Signature Production
//!
//! - `ecdsa`: raw recoverable secp256k1 signing over a 32-byte digest
//! - `personal`: the EIP-191 personal message digest
//! - `scheme`: the two conventions the exchange accepts
//! - `signature`: 65-byte and 66-byte signature encodings

pub mod ecdsa;
pub mod personal;
pub mod scheme;
pub mod signature;

pub use ecdsa::*;
pub use personal::*;
pub use scheme::*;
pub use signature::*;
