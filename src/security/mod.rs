//! Security Module
//!
//! Key material handling. Private keys live in zeroizing storage and are
//! only exposed to the curve library for the duration of a single call.

pub mod private_key;

pub use private_key::*;
