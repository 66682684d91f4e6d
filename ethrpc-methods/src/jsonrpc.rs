//! JSON-RPC 2.0 envelope shapes.
//!
//! Passive serde types for the request/response objects method signatures
//! travel in. Nothing here routes or transports anything.

use ethrpc_format::Error;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Protocol version marker, always the literal `"2.0"`.
///
/// Deserialization rejects any other string.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Version {
    #[default]
    #[serde(rename = "2.0")]
    V2,
}

/// Request/response correlation id: a string, a number, or null.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Number(i64),
    String(String),
    Null,
}

/// JSON-RPC 2.0 request object.
///
/// `method` stays a plain string so an unknown name can still be carried and
/// mapped to a method-not-found error by the consumer; the typed path is
/// [`RpcMethod`](crate::RpcMethod)`::from_str`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub jsonrpc: Version,
    pub method: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub params: Value,
    pub id: Id,
}

/// JSON-RPC 2.0 successful response object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub jsonrpc: Version,
    pub result: Value,
    pub id: Id,
}

/// JSON-RPC 2.0 error response object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub jsonrpc: Version,
    pub error: ErrorObject,
    pub id: Id,
}

/// The `error` member of an error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl From<&Error> for ErrorObject {
    fn from(err: &Error) -> Self {
        Self {
            code: err.code(),
            message: err.message().to_owned(),
            data: None,
        }
    }
}

impl From<Error> for ErrorObject {
    fn from(err: Error) -> Self {
        Self::from(&err)
    }
}

impl ErrorResponse {
    pub fn new(error: impl Into<ErrorObject>, id: Id) -> Self {
        Self {
            jsonrpc: Version::V2,
            error: error.into(),
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorObject, ErrorResponse, Id, Version};
    use ethrpc_format::Error;

    #[test]
    fn test_version_literal() {
        assert_eq!(serde_json::to_string(&Version::V2).unwrap(), "\"2.0\"");
        assert!(serde_json::from_str::<Version>("\"1.0\"").is_err());
    }

    #[test]
    fn test_id_forms() {
        assert_eq!(serde_json::to_string(&Id::Number(1)).unwrap(), "1");
        assert_eq!(
            serde_json::to_string(&Id::String("a".to_owned())).unwrap(),
            "\"a\""
        );
        assert_eq!(serde_json::to_string(&Id::Null).unwrap(), "null");

        assert_eq!(serde_json::from_str::<Id>("7").unwrap(), Id::Number(7));
        assert_eq!(serde_json::from_str::<Id>("null").unwrap(), Id::Null);
    }

    #[test]
    fn test_error_object_from_error() {
        let err = Error::InvalidParams("bad address".to_owned());
        let object = ErrorObject::from(&err);
        assert_eq!(object.code, -32602);
        assert_eq!(object.message, "bad address");
        assert_eq!(object.data, None);
    }

    #[test]
    fn test_error_response_shape() {
        let response =
            ErrorResponse::new(Error::MethodNotFound("eth_x".to_owned()), Id::Number(3));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "jsonrpc": "2.0",
                "error": { "code": -32601, "message": "eth_x" },
                "id": 3,
            })
        );
    }
}
