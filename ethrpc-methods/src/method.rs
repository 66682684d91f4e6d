use crate::{DebugMethod, EngineMethod, EthMethod};
use ethrpc_format::Error;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::result::Result as StdResult;
use std::str::FromStr;

/// Typed link from a parameter shape to its wire name and result shape.
///
/// Implemented by every per-method `Params` struct, so the method a set of
/// parameters belongs to, and the result it produces, can be named at the
/// type level.
pub trait Method {
    /// Wire name of the method, e.g. `eth_getBalance`.
    const NAME: &'static str;
    /// Shape of a successful response's `result` member.
    type Result;
}

/// Any method name across the three namespaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RpcMethod {
    Eth(EthMethod),
    Debug(DebugMethod),
    Engine(EngineMethod),
}

impl RpcMethod {
    /// Total number of cataloged methods.
    pub const COUNT: usize =
        EthMethod::ALL.len() + DebugMethod::ALL.len() + EngineMethod::ALL.len();

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eth(method) => method.as_str(),
            Self::Debug(method) => method.as_str(),
            Self::Engine(method) => method.as_str(),
        }
    }

    /// Namespace prefix of the method name.
    pub fn namespace(&self) -> &'static str {
        match self {
            Self::Eth(_) => "eth",
            Self::Debug(_) => "debug",
            Self::Engine(_) => "engine",
        }
    }
}

impl From<EthMethod> for RpcMethod {
    fn from(method: EthMethod) -> Self {
        Self::Eth(method)
    }
}

impl From<DebugMethod> for RpcMethod {
    fn from(method: DebugMethod) -> Self {
        Self::Debug(method)
    }
}

impl From<EngineMethod> for RpcMethod {
    fn from(method: EngineMethod) -> Self {
        Self::Engine(method)
    }
}

impl FromStr for RpcMethod {
    type Err = Error;

    fn from_str(s: &str) -> StdResult<Self, Self::Err> {
        if let Ok(method) = s.parse::<EthMethod>() {
            return Ok(Self::Eth(method));
        }
        if let Ok(method) = s.parse::<DebugMethod>() {
            return Ok(Self::Debug(method));
        }
        if let Ok(method) = s.parse::<EngineMethod>() {
            return Ok(Self::Engine(method));
        }
        Err(Error::MethodNotFound(format!("unknown method \"{s}\"")))
    }
}

impl fmt::Display for RpcMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

struct RpcMethodVisitor;

impl Visitor<'_> for RpcMethodVisitor {
    type Value = RpcMethod;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("JSON-RPC method name")
    }

    fn visit_str<E>(self, value: &str) -> StdResult<Self::Value, E>
    where
        E: de::Error,
    {
        RpcMethod::from_str(value).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for RpcMethod {
    fn deserialize<D>(deserializer: D) -> StdResult<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(RpcMethodVisitor)
    }
}

impl Serialize for RpcMethod {
    fn serialize<S>(&self, serializer: S) -> StdResult<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
