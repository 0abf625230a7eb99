//! Orders
//!
//! The `Order` struct as signed by makers on the isolated-trader order book,
//! its EIP-712 struct hash, and the cancellation message.
//!
//! All amounts are unsigned integers scaled by 10^18.

pub mod cancel;
pub mod flags;

pub use cancel::*;
pub use flags::*;

use crate::eip712::{hash_struct, Token, TypeSignature};
use crate::error::{SignerError, SignerResult};
use crate::types::{Address, Digest};
use crate::utils::units::parse_wei;
use serde::{Deserialize, Serialize};

/// EIP-712 type string of an order
pub const ORDER_TYPE: &str = "Order(bytes8 flags,uint128 quantity,uint128 price,uint128 triggerPrice,uint128 leverage,address maker,uint128 expiration)";

/// A limit order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub is_buy: bool,
    pub reduce_only: bool,
    pub quantity: u128,
    pub price: u128,
    /// Zero for a plain limit order
    pub trigger_price: u128,
    pub leverage: u128,
    pub maker: Address,
    /// Unix seconds
    pub expiration: u64,
    /// Must fit in 60 bits
    pub salt: u64,
}

impl Order {
    /// The packed `bytes8 flags` member
    pub fn flags(&self) -> SignerResult<[u8; 8]> {
        pack_flags(self.salt, self.is_buy, self.reduce_only)
    }

    /// EIP-712 struct hash of this order
    pub fn struct_hash(&self) -> SignerResult<Digest> {
        let flags = self.flags()?;
        let signature = TypeSignature::parse(ORDER_TYPE)?;

        hash_struct(
            &signature,
            &[
                Token::FixedBytes(&flags),
                Token::Uint(self.quantity),
                Token::Uint(self.price),
                Token::Uint(self.trigger_price),
                Token::Uint(self.leverage),
                Token::Address(self.maker),
                Token::Uint(u128::from(self.expiration)),
            ],
        )
    }
}

/// Struct hash of an order
pub fn hash_order(order: &Order) -> SignerResult<Digest> {
    order.struct_hash()
}

fn zero() -> String {
    "0".to_string()
}

/// An order as it arrives in JSON, amounts as scaled decimal strings
///
/// ```json
/// {
///   "isBuy": true,
///   "reduceOnly": false,
///   "quantity": "6000000000000000000",
///   "price": "1800000000000000000000",
///   "leverage": "20000000000000000",
///   "maker": "0x6F03F28bC1eBB7C9B45614bF2483E70F008A6D3D",
///   "expiration": 1690995498,
///   "salt": 1231231231
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub is_buy: bool,
    #[serde(default)]
    pub reduce_only: bool,
    pub quantity: String,
    pub price: String,
    #[serde(default = "zero")]
    pub trigger_price: String,
    pub leverage: String,
    pub maker: Address,
    pub expiration: u64,
    pub salt: u64,
}

impl TryFrom<OrderRequest> for Order {
    type Error = SignerError;

    fn try_from(request: OrderRequest) -> SignerResult<Self> {
        if request.salt > MAX_SALT {
            return Err(SignerError::Overflow(format!(
                "salt {} exceeds 60 bits",
                request.salt
            )));
        }

        Ok(Order {
            is_buy: request.is_buy,
            reduce_only: request.reduce_only,
            quantity: parse_wei(&request.quantity)?,
            price: parse_wei(&request.price)?,
            trigger_price: parse_wei(&request.trigger_price)?,
            leverage: parse_wei(&request.leverage)?,
            maker: request.maker,
            expiration: request.expiration,
            salt: request.salt,
        })
    }
}

impl From<&Order> for OrderRequest {
    fn from(order: &Order) -> Self {
        OrderRequest {
            is_buy: order.is_buy,
            reduce_only: order.reduce_only,
            quantity: order.quantity.to_string(),
            price: order.price.to_string(),
            trigger_price: order.trigger_price.to_string(),
            leverage: order.leverage.to_string(),
            maker: order.maker,
            expiration: order.expiration,
            salt: order.salt,
        }
    }
}
