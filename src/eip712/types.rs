//! EIP-712 Type Definitions
//!
//! Parsed type signatures and the per-field encoding classes.

use crate::error::{SignerError, SignerResult};
use crate::types::Digest;

/// A field in a struct type definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedDataField {
    /// The name of the field
    pub name: String,
    /// The type of the field (e.g., "address", "uint128", "bytes8")
    pub type_name: String,
}

/// A parsed primary type signature such as
/// `CancelLimitOrder(string action,bytes32[] orderHashes)`
///
/// Only the primary type is parsed. Referenced struct definitions appended
/// after it stay part of the hashed string but are not expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSignature {
    encoded: String,
    pub name: String,
    pub fields: Vec<TypedDataField>,
}

impl TypeSignature {
    pub fn parse(encoded: &str) -> SignerResult<Self> {
        let open = encoded
            .find('(')
            .ok_or_else(|| SignerError::InvalidInput(format!("missing '(' in type: {}", encoded)))?;
        let close = encoded[open..]
            .find(')')
            .map(|pos| open + pos)
            .ok_or_else(|| SignerError::InvalidInput(format!("missing ')' in type: {}", encoded)))?;

        let name = &encoded[..open];
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(SignerError::InvalidInput(format!("invalid type name: {:?}", name)));
        }

        let body = &encoded[open + 1..close];
        let mut fields = Vec::new();
        if !body.is_empty() {
            for member in body.split(',') {
                let (type_name, field_name) = member.split_once(' ').ok_or_else(|| {
                    SignerError::InvalidInput(format!("invalid member {:?} in {}", member, name))
                })?;
                fields.push(TypedDataField {
                    name: field_name.to_string(),
                    type_name: type_name.to_string(),
                });
            }
        }

        Ok(Self {
            encoded: encoded.to_string(),
            name: name.to_string(),
            fields,
        })
    }

    /// The full string that goes into the type hash
    pub fn encoded(&self) -> &str {
        &self.encoded
    }
}

/// How a member of a given type is turned into its 32-byte word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Address,
    Bool,
    /// uintN with its bit width
    Uint(u16),
    /// bytesN with its byte width
    FixedBytes(usize),
    /// string / bytes, encoded as the keccak of the contents
    Dynamic,
    /// T[] or T[k], encoded as the keccak of the concatenated element words
    Array,
    /// reference to another struct, encoded as its struct hash
    Struct,
}

impl FieldKind {
    pub fn of(type_name: &str) -> Self {
        if type_name.ends_with(']') {
            return FieldKind::Array;
        }
        if is_dynamic_type(type_name) {
            return FieldKind::Dynamic;
        }
        if type_name == "address" {
            return FieldKind::Address;
        }
        if type_name == "bool" {
            return FieldKind::Bool;
        }
        if is_atomic_type(type_name) {
            if let Some(bits) = type_name.strip_prefix("uint") {
                if let Ok(n) = bits.parse::<u16>() {
                    return FieldKind::Uint(n);
                }
            }
            if let Some(size) = type_name.strip_prefix("bytes") {
                if let Ok(n) = size.parse::<usize>() {
                    return FieldKind::FixedBytes(n);
                }
            }
        }
        FieldKind::Struct
    }
}

/// Intermediate values of one EIP-712 signing request, for external signers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eip712PreImage {
    pub domain_separator: Digest,
    pub struct_hash: Digest,
    pub digest: Digest,
}

/// Check if a type is an atomic (fixed-size) type
pub fn is_atomic_type(type_name: &str) -> bool {
    if type_name == "address" || type_name == "bool" {
        return true;
    }

    // uintN only; signed integers never appear in this exchange's types
    if let Some(bits) = type_name.strip_prefix("uint") {
        if let Ok(n) = bits.parse::<u32>() {
            return n > 0 && n <= 256 && n % 8 == 0;
        }
        return false;
    }

    // bytesN (fixed-size bytes)
    if let Some(size) = type_name.strip_prefix("bytes") {
        if let Ok(n) = size.parse::<u32>() {
            return n > 0 && n <= 32;
        }
    }

    false
}

/// Check if a type is a dynamic type
pub fn is_dynamic_type(type_name: &str) -> bool {
    type_name == "bytes" || type_name == "string"
}

#[cfg(test)]
mod type_tests {
    use super::*;

    #[test]
    fn test_atomic_types() {
        assert!(is_atomic_type("address"));
        assert!(is_atomic_type("bool"));
        assert!(is_atomic_type("uint128"));
        assert!(is_atomic_type("uint256"));
        assert!(is_atomic_type("bytes8"));
        assert!(is_atomic_type("bytes32"));

        assert!(!is_atomic_type("string"));
        assert!(!is_atomic_type("bytes"));
        assert!(!is_atomic_type("uint"));
        assert!(!is_atomic_type("uint257"));
        assert!(!is_atomic_type("bytes33"));
    }

    #[test]
    fn test_field_kinds() {
        assert_eq!(FieldKind::of("bytes8"), FieldKind::FixedBytes(8));
        assert_eq!(FieldKind::of("uint128"), FieldKind::Uint(128));
        assert_eq!(FieldKind::of("address"), FieldKind::Address);
        assert_eq!(FieldKind::of("string"), FieldKind::Dynamic);
        assert_eq!(FieldKind::of("bytes32[]"), FieldKind::Array);
        assert_eq!(FieldKind::of("Person"), FieldKind::Struct);
    }

    #[test]
    fn test_parse_cancel_signature() {
        let sig = TypeSignature::parse("CancelLimitOrder(string action,bytes32[] orderHashes)").unwrap();
        assert_eq!(sig.name, "CancelLimitOrder");
        assert_eq!(sig.fields.len(), 2);
        assert_eq!(sig.fields[1].type_name, "bytes32[]");
        assert_eq!(sig.fields[1].name, "orderHashes");
    }

    #[test]
    fn test_parse_keeps_referenced_types_in_encoding() {
        let encoded = "Mail(Person from,Person to,string contents)Person(string name,address wallet)";
        let sig = TypeSignature::parse(encoded).unwrap();
        assert_eq!(sig.fields.len(), 3);
        assert_eq!(sig.encoded(), encoded);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(TypeSignature::parse("Order").is_err());
        assert!(TypeSignature::parse("(uint256 a)").is_err());
        assert!(TypeSignature::parse("Order(uint256a)").is_err());
    }
}
