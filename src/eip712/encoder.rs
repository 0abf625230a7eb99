//! EIP-712 Type Encoding
//!
//! Turns typed values into the 32-byte words of `encodeData` and hashes
//! them into struct hashes.

use super::types::*;
use crate::error::{SignerError, SignerResult};
use crate::types::{Address, Digest};
use crate::utils::crypto::{keccak256, keccak256_concat};

/// A value to be placed in one 32-byte slot of `encodeData`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// bytesN, right-padded to 32 bytes
    FixedBytes(&'a [u8]),
    /// uintN up to 128 bits, big-endian and left-padded
    Uint(u128),
    Bool(bool),
    /// 20 bytes, left-padded with 12 zero bytes
    Address(Address),
    /// A string, bytes, array or struct member already reduced to its hash
    Hash(Digest),
}

/// Calculate the type hash for a struct type
/// typeHash = keccak256(encodeType(typeOf(s)))
pub fn type_hash(encoded_type: &str) -> Digest {
    keccak256(encoded_type.as_bytes())
}

/// Big-endian 256-bit word of an unsigned integer
pub fn encode_uint(value: u128) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[16..].copy_from_slice(&value.to_be_bytes());
    word
}

/// `string` members are encoded as the keccak of their UTF-8 bytes
pub fn encode_string(value: &str) -> Digest {
    keccak256(value.as_bytes())
}

/// Arrays are encoded as the keccak of their concatenated element words
pub fn encode_array(elements: &[[u8; 32]]) -> Digest {
    let parts: Vec<&[u8]> = elements.iter().map(|e| e.as_slice()).collect();
    keccak256_concat(&parts)
}

/// Encode a single token into its 32-byte slot
pub fn encode_token(token: &Token<'_>) -> SignerResult<[u8; 32]> {
    let mut word = [0u8; 32];

    match token {
        Token::FixedBytes(bytes) => {
            if bytes.is_empty() || bytes.len() > 32 {
                return Err(SignerError::InvalidInput(format!(
                    "fixed bytes must be 1..=32 long, got {}",
                    bytes.len()
                )));
            }
            word[..bytes.len()].copy_from_slice(bytes);
        }
        Token::Uint(value) => word = encode_uint(*value),
        Token::Bool(b) => word[31] = u8::from(*b),
        Token::Address(address) => word = address.to_word(),
        Token::Hash(hash) => word = *hash,
    }

    Ok(word)
}

/// Check that a token may stand in the slot of a member of `type_name`
fn check_token(field: &TypedDataField, token: &Token<'_>) -> SignerResult<()> {
    let mismatch = || SignerError::InvalidInput(format!(
        "value {:?} does not match {} {}",
        token, field.type_name, field.name
    ));

    match (FieldKind::of(&field.type_name), token) {
        (FieldKind::Address, Token::Address(_)) => Ok(()),
        (FieldKind::Bool, Token::Bool(_)) => Ok(()),
        (FieldKind::Uint(bits), Token::Uint(value)) => {
            if bits < 128 && (*value >> bits) != 0 {
                return Err(SignerError::Overflow(format!(
                    "{} does not fit in {} {}",
                    value, field.type_name, field.name
                )));
            }
            Ok(())
        }
        (FieldKind::FixedBytes(size), Token::FixedBytes(bytes)) if bytes.len() == size => Ok(()),
        (FieldKind::FixedBytes(32), Token::Hash(_)) => Ok(()),
        (FieldKind::Dynamic | FieldKind::Array | FieldKind::Struct, Token::Hash(_)) => Ok(()),
        _ => Err(mismatch()),
    }
}

/// Concatenate `typeHash || words` and hash it
pub fn hash_words(type_hash: &Digest, words: &[[u8; 32]]) -> Digest {
    let mut parts: Vec<&[u8]> = Vec::with_capacity(words.len() + 1);
    parts.push(type_hash);
    parts.extend(words.iter().map(|w| w.as_slice()));
    keccak256_concat(&parts)
}

/// Encode `typeHash || encodeData(s)` for a struct value
///
/// Tokens are checked against the member types of `signature`, in order.
pub fn encode_struct(signature: &TypeSignature, tokens: &[Token<'_>]) -> SignerResult<Vec<u8>> {
    if tokens.len() != signature.fields.len() {
        return Err(SignerError::InvalidInput(format!(
            "{} has {} members, got {} values",
            signature.name,
            signature.fields.len(),
            tokens.len()
        )));
    }

    let mut encoded = Vec::with_capacity(32 * (tokens.len() + 1));
    encoded.extend_from_slice(&type_hash(signature.encoded()));

    for (field, token) in signature.fields.iter().zip(tokens) {
        check_token(field, token)?;
        encoded.extend_from_slice(&encode_token(token)?);
    }

    Ok(encoded)
}

/// Hash a struct according to EIP-712
///
/// hashStruct(s) = keccak256(typeHash || encodeData(s))
pub fn hash_struct(signature: &TypeSignature, tokens: &[Token<'_>]) -> SignerResult<Digest> {
    let encoded = encode_struct(signature, tokens)?;
    Ok(keccak256(&encoded))
}

#[cfg(test)]
mod encoder_tests {
    use super::*;

    fn signature(s: &str) -> TypeSignature {
        TypeSignature::parse(s).unwrap()
    }

    #[test]
    fn test_fixed_bytes_are_right_padded() {
        let flags = [0, 0, 0, 4, 0x96, 0x31, 0x8f, 0xf3];
        let word = encode_token(&Token::FixedBytes(&flags)).unwrap();
        assert_eq!(&word[..8], &flags);
        assert_eq!(&word[8..], &[0u8; 24]);
    }

    #[test]
    fn test_uint_is_left_padded() {
        let word = encode_uint(421613);
        assert_eq!(&word[..29], &[0u8; 29]);
        assert_eq!(&word[29..], &[0x06, 0x6e, 0xed]);
    }

    #[test]
    fn test_array_of_one_is_hash_of_element() {
        let element = [7u8; 32];
        assert_eq!(encode_array(&[element]), keccak256(&element));
    }

    #[test]
    fn test_struct_member_count_must_match() {
        let sig = signature("Pair(uint128 a,uint128 b)");
        let err = hash_struct(&sig, &[Token::Uint(1)]).unwrap_err();
        assert!(matches!(err, SignerError::InvalidInput(_)));
    }

    #[test]
    fn test_struct_member_types_are_checked() {
        let sig = signature("Flags(bytes8 flags)");
        assert!(hash_struct(&sig, &[Token::FixedBytes(&[0u8; 7])]).is_err());
        assert!(hash_struct(&sig, &[Token::Uint(1)]).is_err());
        assert!(hash_struct(&sig, &[Token::FixedBytes(&[0u8; 8])]).is_ok());
    }

    #[test]
    fn test_narrow_uint_overflow() {
        let sig = signature("Small(uint8 v)");
        assert!(hash_struct(&sig, &[Token::Uint(255)]).is_ok());
        assert!(matches!(
            hash_struct(&sig, &[Token::Uint(256)]),
            Err(SignerError::Overflow(_))
        ));
    }

    #[test]
    fn test_hash_words_matches_encode_struct() {
        let sig = signature("Pair(uint128 a,address b)");
        let b: Address = "0x934Dd6503795ef6EE6a36e3b3f1d7Be6c7096955".parse().unwrap();

        let via_tokens = hash_struct(&sig, &[Token::Uint(5), Token::Address(b)]).unwrap();
        let via_words = hash_words(&type_hash(sig.encoded()), &[encode_uint(5), b.to_word()]);
        assert_eq!(via_tokens, via_words);
    }
}
