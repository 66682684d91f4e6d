use crate::{Error, Result};
use alloy_primitives::FixedBytes;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::result::Result as StdResult;
use std::str::FromStr;

use super::hex::is_lower_hex;
use super::Hex;

const PATTERN: &str = "^0x[0-9a-f]{64}$";

/// Hex-encoded 32-byte hash.
///
/// Unlike [`Address`](super::Address), hashes are canonically lowercase and
/// uppercase hex digits are rejected.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Into, derive_more::Deref)]
pub struct Hash(Box<str>);

impl Hash {
    /// Checks `value` against the hash pattern without constructing.
    pub fn is_valid(value: &str) -> bool {
        match value.strip_prefix("0x") {
            Some(body) => body.len() == 64 && body.bytes().all(is_lower_hex),
            None => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes into the 32 raw bytes.
    pub fn to_fixed_bytes(&self) -> FixedBytes<32> {
        let mut buf = [0u8; 32];
        faster_hex::hex_decode(self.0[2..].as_bytes(), &mut buf).expect("validated hex");
        FixedBytes::from(buf)
    }
}

fn invalid(value: &str) -> Error {
    Error::InvalidParams(format!("invalid hash, expected {PATTERN}, got \"{value}\""))
}

impl FromStr for Hash {
    type Err = Error;

    fn from_str(s: &str) -> StdResult<Self, Self::Err> {
        if !Self::is_valid(s) {
            return Err(invalid(s));
        }
        Ok(Self(s.into()))
    }
}

impl TryFrom<String> for Hash {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        if !Self::is_valid(&value) {
            return Err(invalid(&value));
        }
        Ok(Self(value.into_boxed_str()))
    }
}

impl From<FixedBytes<32>> for Hash {
    fn from(bytes: FixedBytes<32>) -> Self {
        Self(format!("0x{}", faster_hex::hex_string(bytes.as_slice())).into())
    }
}

impl From<[u8; 32]> for Hash {
    fn from(buf: [u8; 32]) -> Self {
        Self::from(FixedBytes::from(buf))
    }
}

impl Hex for Hash {
    fn encode_hex(&self) -> String {
        self.0.to_string()
    }

    fn decode_hex(hex: &str) -> Result<Self> {
        hex.parse()
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self.0)
    }
}

struct HashVisitor;

impl Visitor<'_> for HashVisitor {
    type Value = Hash;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("lowercase hex string for 32 byte data")
    }

    fn visit_str<E>(self, value: &str) -> StdResult<Self::Value, E>
    where
        E: de::Error,
    {
        Hash::from_str(value).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D>(deserializer: D) -> StdResult<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(HashVisitor)
    }
}

impl Serialize for Hash {
    fn serialize<S>(&self, serializer: S) -> StdResult<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Hash;
    use hex_literal::hex;
    use serde_test::{assert_de_tokens, assert_tokens, Token};
    use std::str::FromStr;

    const VALID: &str = "0x1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef";

    #[test]
    fn test_serde() {
        let hash = Hash::from_str(VALID).unwrap();
        assert_tokens(&hash, &[Token::Str(VALID)]);
    }

    #[test]
    #[should_panic]
    fn test_de_uppercase() {
        let hash = Hash::from([0; 32]);
        assert_de_tokens(
            &hash,
            &[Token::Str(
                "0x1234567890ABCDEF1234567890abcdef1234567890abcdef1234567890abcdef",
            )],
        );
    }

    #[test]
    fn test_uppercase_rejected() {
        // uppercase is accepted for addresses, never for hashes
        let upper = format!("0x{}", "F".repeat(64));
        assert!(!Hash::is_valid(&upper));
        assert!(Hash::from_str(&upper).is_err());

        let lower = format!("0x{}", "f".repeat(64));
        assert!(Hash::is_valid(&lower));
    }

    #[test]
    fn test_is_valid() {
        assert!(Hash::is_valid(VALID));
        assert!(!Hash::is_valid(&VALID[2..]));
        assert!(!Hash::is_valid("0x1234"));
    }

    #[test]
    fn test_invalid_has_params_code() {
        let err = Hash::from_str("0x1234").unwrap_err();
        assert_eq!(err.code(), -32602);
    }

    #[test]
    fn test_fixed_bytes_round_trip() {
        let bytes = hex!("1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef");
        let hash = Hash::from(bytes);
        assert_eq!(hash.as_str(), VALID);
        assert_eq!(hash.to_fixed_bytes().as_slice(), bytes);
    }
}
