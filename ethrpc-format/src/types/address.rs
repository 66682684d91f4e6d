use crate::{Error, Result};
use alloy_primitives::FixedBytes;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::result::Result as StdResult;
use std::str::FromStr;

use super::Hex;

const PATTERN: &str = "^0x[0-9a-fA-F]{40}$";

/// Hex-encoded Ethereum address, 20 bytes.
///
/// Hex digits are accepted in either case and the input text is stored
/// verbatim, so EIP-55 checksum casing survives validation.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Into, derive_more::Deref)]
pub struct Address(Box<str>);

impl Address {
    /// Checks `value` against the address pattern without constructing.
    pub fn is_valid(value: &str) -> bool {
        match value.strip_prefix("0x") {
            Some(body) => body.len() == 40 && body.bytes().all(|b| b.is_ascii_hexdigit()),
            None => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes into the 20 raw bytes.
    pub fn to_fixed_bytes(&self) -> FixedBytes<20> {
        let mut buf = [0u8; 20];
        faster_hex::hex_decode(self.0[2..].as_bytes(), &mut buf).expect("validated hex");
        FixedBytes::from(buf)
    }
}

fn invalid(value: &str) -> Error {
    Error::InvalidParams(format!(
        "invalid address, expected {PATTERN}, got \"{value}\""
    ))
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> StdResult<Self, Self::Err> {
        if !Self::is_valid(s) {
            return Err(invalid(s));
        }
        Ok(Self(s.into()))
    }
}

impl TryFrom<String> for Address {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        if !Self::is_valid(&value) {
            return Err(invalid(&value));
        }
        Ok(Self(value.into_boxed_str()))
    }
}

impl From<FixedBytes<20>> for Address {
    fn from(bytes: FixedBytes<20>) -> Self {
        Self(format!("0x{}", faster_hex::hex_string(bytes.as_slice())).into())
    }
}

impl From<[u8; 20]> for Address {
    fn from(buf: [u8; 20]) -> Self {
        Self::from(FixedBytes::from(buf))
    }
}

impl Hex for Address {
    fn encode_hex(&self) -> String {
        self.0.to_string()
    }

    fn decode_hex(hex: &str) -> Result<Self> {
        hex.parse()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.0)
    }
}

struct AddressVisitor;

impl Visitor<'_> for AddressVisitor {
    type Value = Address;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("hex string for a 20 byte address")
    }

    fn visit_str<E>(self, value: &str) -> StdResult<Self::Value, E>
    where
        E: de::Error,
    {
        Address::from_str(value).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> StdResult<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(AddressVisitor)
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> StdResult<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Address;
    use hex_literal::hex;
    use serde_test::{assert_de_tokens, assert_tokens, Token};
    use std::str::FromStr;

    #[test]
    fn test_serde() {
        let addr = Address::from_str("0x742d35cc6634c0532925a3b844bc9e7595f0beb0").unwrap();
        assert_tokens(&addr, &[Token::Str("0x742d35cc6634c0532925a3b844bc9e7595f0beb0")]);
    }

    #[test]
    fn test_mixed_case_preserved() {
        let addr = Address::from_str("0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb0").unwrap();
        assert_eq!(addr.as_str(), "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb0");
    }

    #[test]
    #[should_panic]
    fn test_de_wrong_length() {
        let addr = Address::from([0; 20]);
        assert_de_tokens(&addr, &[Token::Str("0x742d35cc")]);
    }

    #[test]
    fn test_is_valid() {
        assert!(Address::is_valid(
            "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb0"
        ));
        // missing prefix
        assert!(!Address::is_valid("742d35Cc6634C0532925a3b844Bc9e7595f0bEb0"));
        // too short
        assert!(!Address::is_valid("0x742d35cc"));
        // non-hex digit
        assert!(!Address::is_valid(
            "0xg42d35cc6634c0532925a3b844bc9e7595f0beb0"
        ));
    }

    #[test]
    fn test_invalid_has_params_code() {
        let err = Address::from_str("0x742d").unwrap_err();
        assert_eq!(err.code(), -32602);
    }

    #[test]
    fn test_fixed_bytes_round_trip() {
        let bytes = hex!("742d35cc6634c0532925a3b844bc9e7595f0beb0");
        let addr = Address::from(bytes);
        assert_eq!(addr.as_str(), "0x742d35cc6634c0532925a3b844bc9e7595f0beb0");
        assert_eq!(addr.to_fixed_bytes().as_slice(), bytes);
    }
}
