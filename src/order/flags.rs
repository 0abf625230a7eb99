//! Order Flags
//!
//! The `bytes8 flags` member packs the order salt with two booleans into one
//! big-endian u64:
//!
//! ```text
//! bits 63..4  salt (60 bits)
//! bit  1      reduce_only
//! bit  0      is_buy
//! ```

use crate::error::{SignerError, SignerResult};
use rand::Rng;

/// Largest salt that fits in the 60 salt bits
pub const MAX_SALT: u64 = (1 << 60) - 1;

const IS_BUY_BIT: u64 = 0b01;
const REDUCE_ONLY_BIT: u64 = 0b10;

/// Unpacked contents of a flags word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderFlags {
    pub salt: u64,
    pub is_buy: bool,
    pub reduce_only: bool,
}

impl OrderFlags {
    pub fn pack(&self) -> SignerResult<[u8; 8]> {
        pack_flags(self.salt, self.is_buy, self.reduce_only)
    }
}

/// Pack salt and booleans into the 8-byte flags value
///
/// A salt above [`MAX_SALT`] is rejected rather than truncated.
pub fn pack_flags(salt: u64, is_buy: bool, reduce_only: bool) -> SignerResult<[u8; 8]> {
    if salt > MAX_SALT {
        return Err(SignerError::Overflow(format!(
            "salt {} exceeds 60 bits (max {})",
            salt, MAX_SALT
        )));
    }

    let mut packed = salt << 4;
    if is_buy {
        packed |= IS_BUY_BIT;
    }
    if reduce_only {
        packed |= REDUCE_ONLY_BIT;
    }

    Ok(packed.to_be_bytes())
}

/// Inverse of [`pack_flags`]; bits 2 and 3 are ignored
pub fn unpack_flags(flags: [u8; 8]) -> OrderFlags {
    let packed = u64::from_be_bytes(flags);
    OrderFlags {
        salt: packed >> 4,
        is_buy: packed & IS_BUY_BIT != 0,
        reduce_only: packed & REDUCE_ONLY_BIT != 0,
    }
}

/// Uniform random salt in `0..=MAX_SALT`
pub fn random_salt() -> u64 {
    rand::thread_rng().gen_range(0..=MAX_SALT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_flags() {
        let flags = pack_flags(1_231_231_231, true, true).unwrap();
        assert_eq!(hex::encode(flags), "0000000496318ff3");
    }

    #[test]
    fn test_flag_bits() {
        assert_eq!(pack_flags(0, false, false).unwrap(), [0u8; 8]);
        assert_eq!(pack_flags(0, true, false).unwrap()[7], 0x01);
        assert_eq!(pack_flags(0, false, true).unwrap()[7], 0x02);
        assert_eq!(pack_flags(1, false, false).unwrap()[7], 0x10);
        // bits 2 and 3 stay clear
        assert_eq!(
            pack_flags(MAX_SALT, true, true).unwrap(),
            [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xf3]
        );
    }

    #[test]
    fn test_salt_overflow() {
        assert!(matches!(pack_flags(MAX_SALT + 1, false, false), Err(SignerError::Overflow(_))));
        assert!(matches!(pack_flags(u64::MAX, true, true), Err(SignerError::Overflow(_))));
    }

    #[test]
    fn test_unpack() {
        let unpacked = unpack_flags(pack_flags(1_231_231_231, true, false).unwrap());
        assert_eq!(
            unpacked,
            OrderFlags { salt: 1_231_231_231, is_buy: true, reduce_only: false }
        );
        assert_eq!(unpacked.pack().unwrap(), pack_flags(1_231_231_231, true, false).unwrap());
    }

    #[test]
    fn test_random_salt_in_range() {
        for _ in 0..100 {
            assert!(random_salt() <= MAX_SALT);
        }
    }
}
