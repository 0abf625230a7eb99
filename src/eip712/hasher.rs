//! EIP-712 Hashing
//!
//! Implements the domain separator and the final `\x19\x01` digest.

use super::encoder::{encode_string, encode_uint, hash_words, type_hash};
use super::types::Eip712PreImage;
use crate::types::{Address, Digest};
use crate::utils::crypto::keccak256_concat;

/// Magic prefix for EIP-712 encoding
pub const EIP712_PREFIX: &[u8; 2] = b"\x19\x01";

/// Domain type used by the isolated-trader contracts (note `uint128 chainId`)
pub const EIP712_DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,uint128 chainId,address verifyingContract)";

/// Calculate the domain separator hash
///
/// domainSeparator = hashStruct(EIP712Domain{name, version, chainId, verifyingContract})
pub fn domain_separator(name: &str, version: &str, chain_id: u128, contract: &Address) -> Digest {
    hash_words(
        &type_hash(EIP712_DOMAIN_TYPE),
        &[
            encode_string(name),
            encode_string(version),
            encode_uint(chain_id),
            contract.to_word(),
        ],
    )
}

/// Calculate the final EIP-712 hash for signing
///
/// hash = keccak256("\x19\x01" || domainSeparator || hashStruct(message))
pub fn eip712_digest(domain_separator: &Digest, struct_hash: &Digest) -> Digest {
    keccak256_concat(&[&EIP712_PREFIX[..], &domain_separator[..], &struct_hash[..]])
}

/// Calculate the pre-image components for EIP-712
pub fn pre_image(domain_separator: Digest, struct_hash: Digest) -> Eip712PreImage {
    Eip712PreImage {
        domain_separator,
        struct_hash,
        digest: eip712_digest(&domain_separator, &struct_hash),
    }
}

#[cfg(test)]
mod hasher_tests {
    use super::*;

    const CONTRACT: &str = "0x934Dd6503795ef6EE6a36e3b3f1d7Be6c7096955";

    fn contract() -> Address {
        CONTRACT.parse().unwrap()
    }

    #[test]
    fn test_domain_separator_testnet() {
        let separator = domain_separator("IsolatedTrader", "1.0", 421613, &contract());
        assert_eq!(
            hex::encode(separator),
            "d71d7e5fe57a0c579d5fb79b900a1300bb9868e8427e4a252bd9a3017fcf3e09"
        );
    }

    #[test]
    fn test_domain_separator_binds_chain_and_contract() {
        let testnet = domain_separator("IsolatedTrader", "1.0", 421613, &contract());
        let mainnet = domain_separator("IsolatedTrader", "1.0", 42161, &contract());
        let other_contract = domain_separator("IsolatedTrader", "1.0", 421613, &Address::new([0x11; 20]));

        assert_eq!(
            hex::encode(mainnet),
            "cfd1dac230b91bfb8eea7e3843e65c69a1ba006daf038ff561aef69e05e02611"
        );
        assert_ne!(testnet, mainnet);
        assert_ne!(testnet, other_contract);
    }

    #[test]
    fn test_digest_uses_prefix() {
        let domain = [1u8; 32];
        let data = [2u8; 32];

        let mut manual = Vec::new();
        manual.extend_from_slice(&[0x19, 0x01]);
        manual.extend_from_slice(&domain);
        manual.extend_from_slice(&data);

        assert_eq!(eip712_digest(&domain, &data), crate::utils::crypto::keccak256(&manual));
    }

    #[test]
    fn test_pre_image() {
        let image = pre_image([3u8; 32], [4u8; 32]);
        assert_eq!(image.digest, eip712_digest(&[3u8; 32], &[4u8; 32]));
        assert_eq!(image.struct_hash, [4u8; 32]);
    }
}
