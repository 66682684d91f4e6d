//! `engine` namespace method signatures.
//!
//! The consensus-layer facing Engine API. Payload and forkchoice state
//! objects are carried opaquely; this catalog declares the method names and
//! the primitive-typed signature surface.

use crate::Method;
use ethrpc_format::{Error, Quantity};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::result::Result as StdResult;
use std::str::FromStr;

/// Method names in the `engine` namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineMethod {
    ExchangeCapabilities,
    ExchangeTransitionConfigurationV1,
    ForkchoiceUpdatedV1,
    ForkchoiceUpdatedV2,
    ForkchoiceUpdatedV3,
    GetBlobsV1,
    GetBlobsV2,
    GetPayloadBodiesByHashV1,
    GetPayloadBodiesByRangeV1,
    GetPayloadV1,
    GetPayloadV2,
    GetPayloadV3,
    GetPayloadV4,
    GetPayloadV5,
    GetPayloadV6,
    NewPayloadV1,
    NewPayloadV2,
    NewPayloadV3,
    NewPayloadV4,
    NewPayloadV5,
}

impl EngineMethod {
    /// Every method in the namespace, in wire-name order.
    pub const ALL: [EngineMethod; 20] = [
        Self::ExchangeCapabilities,
        Self::ExchangeTransitionConfigurationV1,
        Self::ForkchoiceUpdatedV1,
        Self::ForkchoiceUpdatedV2,
        Self::ForkchoiceUpdatedV3,
        Self::GetBlobsV1,
        Self::GetBlobsV2,
        Self::GetPayloadBodiesByHashV1,
        Self::GetPayloadBodiesByRangeV1,
        Self::GetPayloadV1,
        Self::GetPayloadV2,
        Self::GetPayloadV3,
        Self::GetPayloadV4,
        Self::GetPayloadV5,
        Self::GetPayloadV6,
        Self::NewPayloadV1,
        Self::NewPayloadV2,
        Self::NewPayloadV3,
        Self::NewPayloadV4,
        Self::NewPayloadV5,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExchangeCapabilities => "engine_exchangeCapabilities",
            Self::ExchangeTransitionConfigurationV1 => "engine_exchangeTransitionConfigurationV1",
            Self::ForkchoiceUpdatedV1 => "engine_forkchoiceUpdatedV1",
            Self::ForkchoiceUpdatedV2 => "engine_forkchoiceUpdatedV2",
            Self::ForkchoiceUpdatedV3 => "engine_forkchoiceUpdatedV3",
            Self::GetBlobsV1 => "engine_getBlobsV1",
            Self::GetBlobsV2 => "engine_getBlobsV2",
            Self::GetPayloadBodiesByHashV1 => "engine_getPayloadBodiesByHashV1",
            Self::GetPayloadBodiesByRangeV1 => "engine_getPayloadBodiesByRangeV1",
            Self::GetPayloadV1 => "engine_getPayloadV1",
            Self::GetPayloadV2 => "engine_getPayloadV2",
            Self::GetPayloadV3 => "engine_getPayloadV3",
            Self::GetPayloadV4 => "engine_getPayloadV4",
            Self::GetPayloadV5 => "engine_getPayloadV5",
            Self::GetPayloadV6 => "engine_getPayloadV6",
            Self::NewPayloadV1 => "engine_newPayloadV1",
            Self::NewPayloadV2 => "engine_newPayloadV2",
            Self::NewPayloadV3 => "engine_newPayloadV3",
            Self::NewPayloadV4 => "engine_newPayloadV4",
            Self::NewPayloadV5 => "engine_newPayloadV5",
        }
    }
}

impl FromStr for EngineMethod {
    type Err = Error;

    fn from_str(s: &str) -> StdResult<Self, Self::Err> {
        match s {
            "engine_exchangeCapabilities" => Ok(Self::ExchangeCapabilities),
            "engine_exchangeTransitionConfigurationV1" => {
                Ok(Self::ExchangeTransitionConfigurationV1)
            }
            "engine_forkchoiceUpdatedV1" => Ok(Self::ForkchoiceUpdatedV1),
            "engine_forkchoiceUpdatedV2" => Ok(Self::ForkchoiceUpdatedV2),
            "engine_forkchoiceUpdatedV3" => Ok(Self::ForkchoiceUpdatedV3),
            "engine_getBlobsV1" => Ok(Self::GetBlobsV1),
            "engine_getBlobsV2" => Ok(Self::GetBlobsV2),
            "engine_getPayloadBodiesByHashV1" => Ok(Self::GetPayloadBodiesByHashV1),
            "engine_getPayloadBodiesByRangeV1" => Ok(Self::GetPayloadBodiesByRangeV1),
            "engine_getPayloadV1" => Ok(Self::GetPayloadV1),
            "engine_getPayloadV2" => Ok(Self::GetPayloadV2),
            "engine_getPayloadV3" => Ok(Self::GetPayloadV3),
            "engine_getPayloadV4" => Ok(Self::GetPayloadV4),
            "engine_getPayloadV5" => Ok(Self::GetPayloadV5),
            "engine_getPayloadV6" => Ok(Self::GetPayloadV6),
            "engine_newPayloadV1" => Ok(Self::NewPayloadV1),
            "engine_newPayloadV2" => Ok(Self::NewPayloadV2),
            "engine_newPayloadV3" => Ok(Self::NewPayloadV3),
            "engine_newPayloadV4" => Ok(Self::NewPayloadV4),
            "engine_newPayloadV5" => Ok(Self::NewPayloadV5),
            _ => Err(Error::MethodNotFound(format!(
                "unknown engine method \"{s}\""
            ))),
        }
    }
}

impl fmt::Display for EngineMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

struct EngineMethodVisitor;

impl Visitor<'_> for EngineMethodVisitor {
    type Value = EngineMethod;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("engine namespace method name")
    }

    fn visit_str<E>(self, value: &str) -> StdResult<Self::Value, E>
    where
        E: de::Error,
    {
        EngineMethod::from_str(value).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for EngineMethod {
    fn deserialize<D>(deserializer: D) -> StdResult<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(EngineMethodVisitor)
    }
}

impl Serialize for EngineMethod {
    fn serialize<S>(&self, serializer: S) -> StdResult<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Parameters for `engine_exchangeCapabilities`.
///
/// Exchanges list of supported Engine API methods.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeCapabilitiesParams {}

pub type ExchangeCapabilitiesResult = Quantity;

impl Method for ExchangeCapabilitiesParams {
    const NAME: &'static str = "engine_exchangeCapabilities";
    type Result = ExchangeCapabilitiesResult;
}

/// Parameters for `engine_exchangeTransitionConfigurationV1`.
///
/// Exchanges transition configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeTransitionConfigurationV1Params {}

pub type ExchangeTransitionConfigurationV1Result = Quantity;

impl Method for ExchangeTransitionConfigurationV1Params {
    const NAME: &'static str = "engine_exchangeTransitionConfigurationV1";
    type Result = ExchangeTransitionConfigurationV1Result;
}

/// Parameters for `engine_forkchoiceUpdatedV1`.
///
/// Updates the forkchoice state.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForkchoiceUpdatedV1Params {}

pub type ForkchoiceUpdatedV1Result = Quantity;

impl Method for ForkchoiceUpdatedV1Params {
    const NAME: &'static str = "engine_forkchoiceUpdatedV1";
    type Result = ForkchoiceUpdatedV1Result;
}

/// Parameters for `engine_forkchoiceUpdatedV2`.
///
/// Updates the forkchoice state.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForkchoiceUpdatedV2Params {}

pub type ForkchoiceUpdatedV2Result = Quantity;

impl Method for ForkchoiceUpdatedV2Params {
    const NAME: &'static str = "engine_forkchoiceUpdatedV2";
    type Result = ForkchoiceUpdatedV2Result;
}

/// Parameters for `engine_forkchoiceUpdatedV3`.
///
/// Updates the forkchoice state.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForkchoiceUpdatedV3Params {}

pub type ForkchoiceUpdatedV3Result = Quantity;

impl Method for ForkchoiceUpdatedV3Params {
    const NAME: &'static str = "engine_forkchoiceUpdatedV3";
    type Result = ForkchoiceUpdatedV3Result;
}

/// Parameters for `engine_getBlobsV1`.
///
/// Fetches blobs from the blob pool.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBlobsV1Params {}

pub type GetBlobsV1Result = Quantity;

impl Method for GetBlobsV1Params {
    const NAME: &'static str = "engine_getBlobsV1";
    type Result = GetBlobsV1Result;
}

/// Parameters for `engine_getBlobsV2`.
///
/// Fetches blobs from the blob mempool.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBlobsV2Params {}

pub type GetBlobsV2Result = Quantity;

impl Method for GetBlobsV2Params {
    const NAME: &'static str = "engine_getBlobsV2";
    type Result = GetBlobsV2Result;
}

/// Parameters for `engine_getPayloadBodiesByHashV1`.
///
/// Given block hashes returns bodies of the corresponding execution
/// payloads.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetPayloadBodiesByHashV1Params {}

pub type GetPayloadBodiesByHashV1Result = Quantity;

impl Method for GetPayloadBodiesByHashV1Params {
    const NAME: &'static str = "engine_getPayloadBodiesByHashV1";
    type Result = GetPayloadBodiesByHashV1Result;
}

/// Parameters for `engine_getPayloadBodiesByRangeV1`.
///
/// Given a range of block numbers returns bodies of the corresponding
/// execution payloads.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetPayloadBodiesByRangeV1Params {}

pub type GetPayloadBodiesByRangeV1Result = Quantity;

impl Method for GetPayloadBodiesByRangeV1Params {
    const NAME: &'static str = "engine_getPayloadBodiesByRangeV1";
    type Result = GetPayloadBodiesByRangeV1Result;
}

/// Parameters for `engine_getPayloadV1`.
///
/// Obtains execution payload from payload build process.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetPayloadV1Params {}

pub type GetPayloadV1Result = Quantity;

impl Method for GetPayloadV1Params {
    const NAME: &'static str = "engine_getPayloadV1";
    type Result = GetPayloadV1Result;
}

/// Parameters for `engine_getPayloadV2`.
///
/// Obtains execution payload from payload build process.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetPayloadV2Params {}

pub type GetPayloadV2Result = Quantity;

impl Method for GetPayloadV2Params {
    const NAME: &'static str = "engine_getPayloadV2";
    type Result = GetPayloadV2Result;
}

/// Parameters for `engine_getPayloadV3`.
///
/// Obtains execution payload from payload build process.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetPayloadV3Params {}

pub type GetPayloadV3Result = Quantity;

impl Method for GetPayloadV3Params {
    const NAME: &'static str = "engine_getPayloadV3";
    type Result = GetPayloadV3Result;
}

/// Parameters for `engine_getPayloadV4`.
///
/// Obtains execution payload from payload build process.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetPayloadV4Params {}

pub type GetPayloadV4Result = Quantity;

impl Method for GetPayloadV4Params {
    const NAME: &'static str = "engine_getPayloadV4";
    type Result = GetPayloadV4Result;
}

/// Parameters for `engine_getPayloadV5`.
///
/// Obtains execution payload from payload build process.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetPayloadV5Params {}

pub type GetPayloadV5Result = Quantity;

impl Method for GetPayloadV5Params {
    const NAME: &'static str = "engine_getPayloadV5";
    type Result = GetPayloadV5Result;
}

/// Parameters for `engine_getPayloadV6`.
///
/// Obtains execution payload from payload build process.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetPayloadV6Params {}

pub type GetPayloadV6Result = Quantity;

impl Method for GetPayloadV6Params {
    const NAME: &'static str = "engine_getPayloadV6";
    type Result = GetPayloadV6Result;
}

/// Parameters for `engine_newPayloadV1`.
///
/// Runs execution payload validation.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPayloadV1Params {}

pub type NewPayloadV1Result = Quantity;

impl Method for NewPayloadV1Params {
    const NAME: &'static str = "engine_newPayloadV1";
    type Result = NewPayloadV1Result;
}

/// Parameters for `engine_newPayloadV2`.
///
/// Runs execution payload validation.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPayloadV2Params {}

pub type NewPayloadV2Result = Quantity;

impl Method for NewPayloadV2Params {
    const NAME: &'static str = "engine_newPayloadV2";
    type Result = NewPayloadV2Result;
}

/// Parameters for `engine_newPayloadV3`.
///
/// Runs execution payload validation.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPayloadV3Params {}

pub type NewPayloadV3Result = Quantity;

impl Method for NewPayloadV3Params {
    const NAME: &'static str = "engine_newPayloadV3";
    type Result = NewPayloadV3Result;
}

/// Parameters for `engine_newPayloadV4`.
///
/// Runs execution payload validation.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPayloadV4Params {}

pub type NewPayloadV4Result = Quantity;

impl Method for NewPayloadV4Params {
    const NAME: &'static str = "engine_newPayloadV4";
    type Result = NewPayloadV4Result;
}

/// Parameters for `engine_newPayloadV5`.
///
/// Runs execution payload validation.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPayloadV5Params {}

pub type NewPayloadV5Result = Quantity;

impl Method for NewPayloadV5Params {
    const NAME: &'static str = "engine_newPayloadV5";
    type Result = NewPayloadV5Result;
}

#[cfg(test)]
mod tests {
    use super::EngineMethod;
    use serde_test::{assert_tokens, Token};

    #[test]
    fn test_serde() {
        assert_tokens(
            &EngineMethod::NewPayloadV1,
            &[Token::Str("engine_newPayloadV1")],
        );
        assert_tokens(
            &EngineMethod::ExchangeTransitionConfigurationV1,
            &[Token::Str("engine_exchangeTransitionConfigurationV1")],
        );
    }

    #[test]
    fn test_name_round_trip() {
        for method in EngineMethod::ALL {
            assert_eq!(method.as_str().parse::<EngineMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_method_count() {
        assert_eq!(EngineMethod::ALL.len(), 20);
    }
}
