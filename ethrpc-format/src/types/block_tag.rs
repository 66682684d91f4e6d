use crate::Error;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::result::Result as StdResult;
use std::str::FromStr;

/// Named reference to a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlockTag {
    /// The lowest numbered block the client has available.
    Earliest,
    /// The most recent crypto-economically secure block; cannot be re-orged
    /// outside of manual intervention driven by community coordination.
    Finalized,
    /// The most recent block that is safe from re-orgs under honest majority
    /// and certain synchronicity assumptions.
    Safe,
    /// The most recent block in the canonical chain observed by the client.
    Latest,
    /// A sample next block built on top of `latest` from the local mempool.
    Pending,
}

impl BlockTag {
    pub const ALL: [BlockTag; 5] = [
        Self::Earliest,
        Self::Finalized,
        Self::Safe,
        Self::Latest,
        Self::Pending,
    ];

    /// Checks whether `value` is one of the five tag names.
    pub fn is_valid(value: &str) -> bool {
        value.parse::<Self>().is_ok()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Earliest => "earliest",
            Self::Finalized => "finalized",
            Self::Safe => "safe",
            Self::Latest => "latest",
            Self::Pending => "pending",
        }
    }
}

impl FromStr for BlockTag {
    type Err = Error;

    fn from_str(s: &str) -> StdResult<Self, Self::Err> {
        match s {
            "earliest" => Ok(Self::Earliest),
            "finalized" => Ok(Self::Finalized),
            "safe" => Ok(Self::Safe),
            "latest" => Ok(Self::Latest),
            "pending" => Ok(Self::Pending),
            _ => Err(Error::InvalidParams(format!(
                "invalid block tag, expected one of earliest|finalized|safe|latest|pending, got \"{s}\""
            ))),
        }
    }
}

impl fmt::Display for BlockTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

struct BlockTagVisitor;

impl Visitor<'_> for BlockTagVisitor {
    type Value = BlockTag;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("block tag name")
    }

    fn visit_str<E>(self, value: &str) -> StdResult<Self::Value, E>
    where
        E: de::Error,
    {
        BlockTag::from_str(value).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for BlockTag {
    fn deserialize<D>(deserializer: D) -> StdResult<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(BlockTagVisitor)
    }
}

impl Serialize for BlockTag {
    fn serialize<S>(&self, serializer: S) -> StdResult<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::BlockTag;
    use serde_test::{assert_de_tokens, assert_tokens, Token};

    #[test]
    fn test_serde() {
        assert_tokens(&BlockTag::Earliest, &[Token::Str("earliest")]);
        assert_tokens(&BlockTag::Finalized, &[Token::Str("finalized")]);
        assert_tokens(&BlockTag::Safe, &[Token::Str("safe")]);
        assert_tokens(&BlockTag::Latest, &[Token::Str("latest")]);
        assert_tokens(&BlockTag::Pending, &[Token::Str("pending")]);
    }

    #[test]
    #[should_panic]
    fn test_de_unknown() {
        assert_de_tokens(&BlockTag::Latest, &[Token::Str("newest")]);
    }

    #[test]
    fn test_name_round_trip() {
        for tag in BlockTag::ALL {
            assert_eq!(tag.as_str().parse::<BlockTag>().unwrap(), tag);
        }
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!BlockTag::is_valid("Latest"));
        assert!(!BlockTag::is_valid(""));
    }
}
