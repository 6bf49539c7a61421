use std::str::FromStr;

use alloy_primitives::Address;
use thiserror::Error;

/// Number of hex digits in a textual address, without the `0x` prefix.
const ADDRESS_HEX_LEN: usize = 40;

/// The input is not a syntactically valid account address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid address `{input}`: {reason}")]
pub struct InvalidAddress {
    /// The rejected input, as given
    pub input: String,
    /// Why it was rejected
    pub reason: String,
}

impl InvalidAddress {
    fn new(input: &str, reason: impl Into<String>) -> Self {
        Self { input: input.to_owned(), reason: reason.into() }
    }
}

/// Parse a textual address into its canonical byte form.
///
/// Accepts 40 hex digits with or without a `0x` prefix, in any letter case.
/// Mixed-case input is not checked against its EIP-55 checksum: two spellings
/// of the same bytes always normalize to the same [`Address`].
pub fn normalize(raw: &str) -> Result<Address, InvalidAddress> {
    let trimmed = raw.trim();
    let digits =
        trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")).unwrap_or(trimmed);

    if digits.len() != ADDRESS_HEX_LEN {
        return Err(InvalidAddress::new(
            raw,
            format!("expected {ADDRESS_HEX_LEN} hex digits, got {}", digits.len()),
        ));
    }

    Address::from_str(digits).map_err(|e| InvalidAddress::new(raw, e.to_string()))
}

/// The EIP-55 checksummed spelling of `address`.
pub fn to_canonical(address: &Address) -> String {
    address.to_checksum(None)
}
