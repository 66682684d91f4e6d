use crate::Error;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::result::Result as StdResult;
use std::str::FromStr;

use super::{BlockTag, Hash, Quantity};

/// Block identifier, accepted anywhere a block must be named.
///
/// The three forms share one string representation on the wire; a bare string
/// is discriminated as a tag, then a 32-byte hash, then a block number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::From)]
pub enum BlockSpec {
    /// Hex-encoded block number.
    Number(Quantity),
    /// Named block reference.
    Tag(BlockTag),
    /// 32-byte block hash.
    Hash(Hash),
}

impl BlockSpec {
    /// Checks whether `value` parses as any of the three forms.
    pub fn is_valid(value: &str) -> bool {
        BlockTag::is_valid(value) || Hash::is_valid(value) || Quantity::is_valid(value)
    }

    pub fn latest() -> Self {
        Self::Tag(BlockTag::Latest)
    }

    pub fn pending() -> Self {
        Self::Tag(BlockTag::Pending)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Number(number) => number.as_str(),
            Self::Tag(tag) => tag.as_str(),
            Self::Hash(hash) => hash.as_str(),
        }
    }
}

impl Default for BlockSpec {
    fn default() -> Self {
        Self::latest()
    }
}

impl FromStr for BlockSpec {
    type Err = Error;

    fn from_str(s: &str) -> StdResult<Self, Self::Err> {
        if let Ok(tag) = s.parse::<BlockTag>() {
            return Ok(Self::Tag(tag));
        }
        // a 64-digit hex string is always a hash, even when it would also
        // scan as a quantity
        if Hash::is_valid(s) {
            return Ok(Self::Hash(s.parse()?));
        }
        if Quantity::is_valid(s) {
            return Ok(Self::Number(s.parse()?));
        }
        Err(Error::InvalidParams(format!(
            "invalid block spec, expected a block number, tag, or 32 byte hash, got \"{s}\""
        )))
    }
}

impl fmt::Display for BlockSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

struct BlockSpecVisitor;

impl Visitor<'_> for BlockSpecVisitor {
    type Value = BlockSpec;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("block number, tag, or hash")
    }

    fn visit_str<E>(self, value: &str) -> StdResult<Self::Value, E>
    where
        E: de::Error,
    {
        BlockSpec::from_str(value).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for BlockSpec {
    fn deserialize<D>(deserializer: D) -> StdResult<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(BlockSpecVisitor)
    }
}

impl Serialize for BlockSpec {
    fn serialize<S>(&self, serializer: S) -> StdResult<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{BlockSpec, BlockTag, Hash, Quantity};
    use serde_test::{assert_de_tokens, assert_tokens, Token};
    use std::str::FromStr;

    const HASH: &str = "0x1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef";

    #[test]
    fn test_serde() {
        assert_tokens(&BlockSpec::latest(), &[Token::Str("latest")]);
        assert_tokens(
            &BlockSpec::from(Quantity::from(0x1a)),
            &[Token::Str("0x1a")],
        );
        assert_tokens(
            &BlockSpec::from(Hash::from_str(HASH).unwrap()),
            &[Token::Str(HASH)],
        );
    }

    #[test]
    #[should_panic]
    fn test_de_invalid() {
        assert_de_tokens(&BlockSpec::latest(), &[Token::Str("0x01")]);
    }

    #[test]
    fn test_discrimination() {
        assert_eq!(
            BlockSpec::from_str("latest").unwrap(),
            BlockSpec::Tag(BlockTag::Latest)
        );
        assert!(matches!(
            BlockSpec::from_str("0x1a").unwrap(),
            BlockSpec::Number(_)
        ));
        assert!(matches!(
            BlockSpec::from_str(HASH).unwrap(),
            BlockSpec::Hash(_)
        ));
    }

    #[test]
    fn test_hash_wins_over_number() {
        // 64 lowercase hex digits with a nonzero lead would scan as a
        // quantity too; the hash form takes precedence
        let ambiguous = format!("0x{}", "1".repeat(64));
        assert!(matches!(
            BlockSpec::from_str(&ambiguous).unwrap(),
            BlockSpec::Hash(_)
        ));
    }

    #[test]
    fn test_invalid_has_params_code() {
        let err = BlockSpec::from_str("newest").unwrap_err();
        assert_eq!(err.code(), -32602);
    }
}
