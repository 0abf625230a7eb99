//! Amount Parsing
//!
//! On-chain amounts are unsigned integers scaled by 10^18. These helpers turn
//! decimal text into that form and back:
//! - `parse_wei("6000000000000000000")` takes an already-scaled integer
//! - `to_wei("6")` scales a human decimal
//! - `format_wei(6 * 10^18)` renders `"6"`

use crate::error::{SignerError, SignerResult};

/// Fractional digits of a scaled amount
pub const WEI_DECIMALS: u32 = 18;

/// 10^18
pub const WEI_PER_UNIT: u128 = 1_000_000_000_000_000_000;

fn check_digits(part: &str, what: &str, input: &str) -> SignerResult<()> {
    if part.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(SignerError::InvalidInput(format!(
            "invalid {} in amount '{}'",
            what, input
        )))
    }
}

fn overflow(input: &str) -> SignerError {
    SignerError::Overflow(format!("amount '{}' does not fit in uint128", input))
}

/// Parse an already-scaled non-negative integer
pub fn parse_wei(amount: &str) -> SignerResult<u128> {
    let trimmed = amount.trim();
    if trimmed.is_empty() {
        return Err(SignerError::InvalidInput("empty amount".to_string()));
    }
    check_digits(trimmed, "digits", amount)?;

    trimmed
        .chars()
        .try_fold(0u128, |acc, c| {
            acc.checked_mul(10)?.checked_add(u128::from(c as u8 - b'0'))
        })
        .ok_or_else(|| overflow(amount))
}

/// Convert a human decimal (`"1800"`, `"0.02"`) to its 10^18-scaled value
pub fn to_wei(amount: &str) -> SignerResult<u128> {
    let trimmed = amount.trim();
    let (integer_str, fractional_str) = match trimmed.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (trimmed, ""),
    };

    if integer_str.is_empty() && fractional_str.is_empty() {
        return Err(SignerError::InvalidInput(format!("invalid amount '{}'", amount)));
    }
    check_digits(integer_str, "integer part", amount)?;
    check_digits(fractional_str, "fractional part", amount)?;

    if fractional_str.len() > WEI_DECIMALS as usize {
        return Err(SignerError::InvalidInput(format!(
            "too many decimal places in '{}': max {}",
            amount, WEI_DECIMALS
        )));
    }

    let integer = if integer_str.is_empty() {
        0
    } else {
        parse_wei(integer_str)?
    };

    // Pad fractional part to full precision
    let padded = format!("{:0<width$}", fractional_str, width = WEI_DECIMALS as usize);
    let fractional = parse_wei(&padded)?;

    integer
        .checked_mul(WEI_PER_UNIT)
        .and_then(|v| v.checked_add(fractional))
        .ok_or_else(|| overflow(amount))
}

/// Format a scaled amount as a human decimal
pub fn format_wei(raw: u128) -> String {
    let integer = raw / WEI_PER_UNIT;
    let fractional = raw % WEI_PER_UNIT;

    if fractional == 0 {
        integer.to_string()
    } else {
        let frac_str = format!("{:0>width$}", fractional, width = WEI_DECIMALS as usize);
        format!("{}.{}", integer, frac_str.trim_end_matches('0'))
    }
}
