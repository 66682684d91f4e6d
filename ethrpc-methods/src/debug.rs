//! `debug` namespace method signatures.

use crate::Method;
use ethrpc_format::{Error, Hash, Quantity};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::result::Result as StdResult;
use std::str::FromStr;

/// Method names in the `debug` namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebugMethod {
    GetBadBlocks,
    GetRawBlock,
    GetRawHeader,
    GetRawReceipts,
    GetRawTransaction,
}

impl DebugMethod {
    /// Every method in the namespace, in wire-name order.
    pub const ALL: [DebugMethod; 5] = [
        Self::GetBadBlocks,
        Self::GetRawBlock,
        Self::GetRawHeader,
        Self::GetRawReceipts,
        Self::GetRawTransaction,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetBadBlocks => "debug_getBadBlocks",
            Self::GetRawBlock => "debug_getRawBlock",
            Self::GetRawHeader => "debug_getRawHeader",
            Self::GetRawReceipts => "debug_getRawReceipts",
            Self::GetRawTransaction => "debug_getRawTransaction",
        }
    }
}

impl FromStr for DebugMethod {
    type Err = Error;

    fn from_str(s: &str) -> StdResult<Self, Self::Err> {
        match s {
            "debug_getBadBlocks" => Ok(Self::GetBadBlocks),
            "debug_getRawBlock" => Ok(Self::GetRawBlock),
            "debug_getRawHeader" => Ok(Self::GetRawHeader),
            "debug_getRawReceipts" => Ok(Self::GetRawReceipts),
            "debug_getRawTransaction" => Ok(Self::GetRawTransaction),
            _ => Err(Error::MethodNotFound(format!(
                "unknown debug method \"{s}\""
            ))),
        }
    }
}

impl fmt::Display for DebugMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

struct DebugMethodVisitor;

impl Visitor<'_> for DebugMethodVisitor {
    type Value = DebugMethod;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("debug namespace method name")
    }

    fn visit_str<E>(self, value: &str) -> StdResult<Self::Value, E>
    where
        E: de::Error,
    {
        DebugMethod::from_str(value).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for DebugMethod {
    fn deserialize<D>(deserializer: D) -> StdResult<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(DebugMethodVisitor)
    }
}

impl Serialize for DebugMethod {
    fn serialize<S>(&self, serializer: S) -> StdResult<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Parameters for `debug_getBadBlocks`.
///
/// Returns an array of recent bad blocks that the client has seen on the
/// network.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBadBlocksParams {}

pub type GetBadBlocksResult = Quantity;

impl Method for GetBadBlocksParams {
    const NAME: &'static str = "debug_getBadBlocks";
    type Result = GetBadBlocksResult;
}

/// Parameters for `debug_getRawBlock`.
///
/// Returns an RLP-encoded block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetRawBlockParams {
    /// Block number or tag
    pub block: Quantity,
}

pub type GetRawBlockResult = Quantity;

impl Method for GetRawBlockParams {
    const NAME: &'static str = "debug_getRawBlock";
    type Result = GetRawBlockResult;
}

/// Parameters for `debug_getRawHeader`.
///
/// Returns an RLP-encoded block header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetRawHeaderParams {
    /// Block number or tag
    pub block: Quantity,
}

pub type GetRawHeaderResult = Quantity;

impl Method for GetRawHeaderParams {
    const NAME: &'static str = "debug_getRawHeader";
    type Result = GetRawHeaderResult;
}

/// Parameters for `debug_getRawReceipts`.
///
/// Returns an array of EIP-2718 binary-encoded receipts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetRawReceiptsParams {
    /// Block number or tag
    pub block: Quantity,
}

pub type GetRawReceiptsResult = Quantity;

impl Method for GetRawReceiptsParams {
    const NAME: &'static str = "debug_getRawReceipts";
    type Result = GetRawReceiptsResult;
}

/// Parameters for `debug_getRawTransaction`.
///
/// Returns an EIP-2718 binary-encoded transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetRawTransactionParams {
    /// Transaction hash
    pub transaction: Hash,
}

pub type GetRawTransactionResult = Quantity;

impl Method for GetRawTransactionParams {
    const NAME: &'static str = "debug_getRawTransaction";
    type Result = GetRawTransactionResult;
}

#[cfg(test)]
mod tests {
    use super::DebugMethod;
    use serde_test::{assert_tokens, Token};

    #[test]
    fn test_serde() {
        assert_tokens(
            &DebugMethod::GetBadBlocks,
            &[Token::Str("debug_getBadBlocks")],
        );
        assert_tokens(
            &DebugMethod::GetRawTransaction,
            &[Token::Str("debug_getRawTransaction")],
        );
    }

    #[test]
    fn test_name_round_trip() {
        for method in DebugMethod::ALL {
            assert_eq!(method.as_str().parse::<DebugMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_method_count() {
        assert_eq!(DebugMethod::ALL.len(), 5);
    }
}
