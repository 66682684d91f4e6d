use crate::{Error, Result};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::result::Result as StdResult;
use std::str::FromStr;

use super::hex::is_lower_hex;
use super::Hex;

const PATTERN: &str = "^0x(0|[1-9a-f][0-9a-f]*)$";

/// Hex-encoded unsigned integer quantity.
///
/// Leading zero digits are not allowed; the only spelling of zero is `0x0`.
/// `0x01` is rejected, never normalized.
#[derive(Clone, PartialEq, Eq, Hash, derive_more::Into, derive_more::Deref)]
pub struct Quantity(Box<str>);

impl Quantity {
    /// Checks `value` against the quantity pattern without constructing.
    pub fn is_valid(value: &str) -> bool {
        match value.strip_prefix("0x") {
            Some("0") => true,
            Some(body) => {
                let mut bytes = body.bytes();
                matches!(bytes.next(), Some(b'1'..=b'9' | b'a'..=b'f')) && bytes.all(is_lower_hex)
            }
            None => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The value as big-endian bytes, with the odd leading nibble zero-padded
    /// to a whole byte.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut body: Cow<str> = Cow::Borrowed(&self.0[2..]);

        if body.len() % 2 != 0 {
            body = format!("0{body}").into();
        }

        let mut buf = vec![0; body.len() / 2];
        faster_hex::hex_decode(body.as_bytes(), &mut buf).expect("validated hex");
        buf
    }

    /// Encodes big-endian bytes in canonical form, stripping leading zero
    /// digits down to `0x0` for an all-zero input.
    pub fn from_be_bytes(buf: &[u8]) -> Self {
        let hex_val = faster_hex::hex_string(buf);

        match hex_val.find(|c| c != '0') {
            Some(idx) => Self(format!("0x{}", &hex_val[idx..]).into()),
            None => Self::default(),
        }
    }

    /// The numeric value, if it fits in a u64.
    pub fn to_u64(&self) -> Option<u64> {
        u64::from_str_radix(&self.0[2..], 16).ok()
    }
}

impl Default for Quantity {
    fn default() -> Quantity {
        Quantity("0x0".into())
    }
}

impl From<u64> for Quantity {
    fn from(value: u64) -> Self {
        Self(format!("{value:#x}").into())
    }
}

fn invalid(value: &str) -> Error {
    Error::InvalidParams(format!(
        "invalid quantity, expected {PATTERN}, got \"{value}\""
    ))
}

impl FromStr for Quantity {
    type Err = Error;

    fn from_str(s: &str) -> StdResult<Self, Self::Err> {
        if !Self::is_valid(s) {
            return Err(invalid(s));
        }
        Ok(Self(s.into()))
    }
}

impl TryFrom<String> for Quantity {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        if !Self::is_valid(&value) {
            return Err(invalid(&value));
        }
        Ok(Self(value.into_boxed_str()))
    }
}

impl Hex for Quantity {
    fn encode_hex(&self) -> String {
        self.0.to_string()
    }

    fn decode_hex(hex: &str) -> Result<Self> {
        hex.parse()
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quantity({})", self.0)
    }
}

struct QuantityVisitor;

impl Visitor<'_> for QuantityVisitor {
    type Value = Quantity;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("hex string for a quantity")
    }

    fn visit_str<E>(self, value: &str) -> StdResult<Self::Value, E>
    where
        E: de::Error,
    {
        Quantity::from_str(value).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> StdResult<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(QuantityVisitor)
    }
}

impl Serialize for Quantity {
    fn serialize<S>(&self, serializer: S) -> StdResult<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Quantity;
    use hex_literal::hex;
    use serde_test::{assert_de_tokens, assert_tokens, Token};
    use std::str::FromStr;

    #[test]
    fn test_serde_zero() {
        assert_eq!(Quantity::default(), Quantity::from(0));
        assert_tokens(&Quantity::default(), &[Token::Str("0x0")]);
    }

    #[test]
    fn test_serde() {
        assert_tokens(&Quantity::from(0x4200), &[Token::Str("0x4200")]);
        assert_tokens(&Quantity::from(0x1a), &[Token::Str("0x1a")]);
    }

    #[test]
    #[should_panic]
    fn test_de_leading_zeroes() {
        assert_de_tokens(&Quantity::from(0x420000), &[Token::Str("0x00420000")]);
    }

    #[test]
    #[should_panic]
    fn test_de_empty() {
        assert_de_tokens(&Quantity::default(), &[Token::Str("0x")]);
    }

    #[test]
    fn test_is_valid() {
        assert!(Quantity::is_valid("0x0"));
        assert!(Quantity::is_valid("0x1a"));
        assert!(Quantity::is_valid("0xf00"));
        // leading zero digit
        assert!(!Quantity::is_valid("0x00"));
        assert!(!Quantity::is_valid("0x01"));
        // uppercase
        assert!(!Quantity::is_valid("0x1A"));
        // non-hex digit
        assert!(!Quantity::is_valid("0xg"));
        assert!(!Quantity::is_valid("0x"));
        assert!(!Quantity::is_valid("1a"));
    }

    #[test]
    fn test_invalid_has_params_code() {
        let err = Quantity::from_str("0x00").unwrap_err();
        assert_eq!(err.code(), -32602);
    }

    #[test]
    fn test_to_u64() {
        assert_eq!(Quantity::from_str("0x1a").unwrap().to_u64(), Some(26));
        assert_eq!(Quantity::default().to_u64(), Some(0));
        // 2^64 does not fit
        let big = Quantity::from_str("0x10000000000000000").unwrap();
        assert_eq!(big.to_u64(), None);
    }

    #[test]
    fn test_be_bytes_round_trip() {
        let q = Quantity::from_str("0x4200").unwrap();
        assert_eq!(q.to_be_bytes(), hex!("4200"));
        assert_eq!(Quantity::from_be_bytes(&hex!("4200")), q);

        // odd nibble count pads on decode, strips on encode
        let q = Quantity::from_str("0x100").unwrap();
        assert_eq!(q.to_be_bytes(), hex!("0100"));
        assert_eq!(Quantity::from_be_bytes(&hex!("0100")), q);
    }

    #[test]
    fn test_from_be_bytes_zero() {
        assert_eq!(Quantity::from_be_bytes(&[0, 0]), Quantity::default());
        assert_eq!(Quantity::from_be_bytes(&[]), Quantity::default());
    }
}
