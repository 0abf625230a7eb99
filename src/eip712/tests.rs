//! EIP-712 Test Suite
//!
//! Checks the generic encoder against the canonical vectors from the
//! EIP-712 specification.

use super::*;
use crate::types::Address;

const PERSON_TYPE: &str = "Person(string name,address wallet)";
const MAIL_TYPE: &str = "Mail(Person from,Person to,string contents)Person(string name,address wallet)";
const MAIL_DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";

fn address(s: &str) -> Address {
    s.parse().unwrap()
}

fn person(name: &str, wallet: &str) -> [u8; 32] {
    let sig = TypeSignature::parse(PERSON_TYPE).unwrap();
    hash_struct(
        &sig,
        &[Token::Hash(encode_string(name)), Token::Address(address(wallet))],
    )
    .unwrap()
}

fn mail_domain() -> [u8; 32] {
    let sig = TypeSignature::parse(MAIL_DOMAIN_TYPE).unwrap();
    hash_struct(
        &sig,
        &[
            Token::Hash(encode_string("Ether Mail")),
            Token::Hash(encode_string("1")),
            Token::Uint(1),
            Token::Address(address("0xCcCCccccCCCCcCCCCCCcCcCccCcCCCcCcccccccC")),
        ],
    )
    .unwrap()
}

fn mail_struct() -> [u8; 32] {
    let sig = TypeSignature::parse(MAIL_TYPE).unwrap();
    hash_struct(
        &sig,
        &[
            Token::Hash(person("Cow", "0xCD2a3d9F938E13CD947Ec05AbC7FE734Df8DD826")),
            Token::Hash(person("Bob", "0xbBbBBBBbbBBBbbbBbbBbbbbBBbBbbbbBbBbbBBbB")),
            Token::Hash(encode_string("Hello, Bob!")),
        ],
    )
    .unwrap()
}

/// Test the canonical Mail example from EIP-712 specification
#[test]
fn test_eip712_mail_example() {
    let domain = mail_domain();
    let message = mail_struct();

    assert_eq!(
        hex::encode(domain),
        "f2cee375fa42b42143804025fc449deafd50cc031ca257e0b194a650a912090f"
    );
    assert_eq!(
        hex::encode(message),
        "c52c0ee5d84264471806290a3f2c4cecfc5490626bf912d01f240d7a274b371e"
    );
    assert_eq!(
        hex::encode(eip712_digest(&domain, &message)),
        "be609aee343fb3c4b28e1df9e632fca64fcfaede20f02e86244efddf30957bd2"
    );
}

#[test]
fn test_domain_type_width_changes_nothing_but_type_hash() {
    // Same values, uint128 vs uint256 chainId: only the type hash differs.
    let contract = address("0xCcCCccccCCCCcCCCCCCcCcCccCcCCCcCcccccccC");
    let narrow = domain_separator("Ether Mail", "1", 1, &contract);
    assert_ne!(narrow, mail_domain());

    let words = [
        encode_string("Ether Mail"),
        encode_string("1"),
        encode_uint(1),
        contract.to_word(),
    ];
    assert_eq!(hash_words(&type_hash(MAIL_DOMAIN_TYPE), &words), mail_domain());
    assert_eq!(hash_words(&type_hash(EIP712_DOMAIN_TYPE), &words), narrow);
}

#[test]
fn test_digest_is_deterministic() {
    let first = eip712_digest(&mail_domain(), &mail_struct());
    let second = eip712_digest(&mail_domain(), &mail_struct());
    assert_eq!(first, second);
}
