//! Utilities Module
//!
//! Common utilities used across the crate.

pub mod crypto;
pub mod logging;
pub mod units;

pub use crypto::*;
pub use units::*;
