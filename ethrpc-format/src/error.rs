use std::result::Result as StdResult;
use thiserror::Error as ThisError;

/// JSON-RPC error, one variant per error kind.
///
/// Covers the five JSON-RPC 2.0 standard codes and the seven extended codes
/// used by the Ethereum execution APIs. Each variant carries a human-readable
/// message and owns its numeric code, so a mismatched kind/code pair cannot
/// be constructed.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Malformed JSON.
    #[error("Parse error: {0}")]
    Parse(String),
    /// Not a valid request object.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    /// Method does not exist.
    #[error("Method not found: {0}")]
    MethodNotFound(String),
    /// Parameters fail validation.
    #[error("Invalid params: {0}")]
    InvalidParams(String),
    /// Unclassified internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
    /// Missing or semantically invalid input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Referenced resource absent.
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),
    /// Resource exists but is not currently accessible.
    #[error("Resource unavailable: {0}")]
    ResourceUnavailable(String),
    /// Transaction failed submission.
    #[error("Transaction rejected: {0}")]
    TransactionRejected(String),
    /// Method recognized but not implemented.
    #[error("Method not supported: {0}")]
    MethodNotSupported(String),
    /// Request exceeds a defined limit.
    #[error("Limit exceeded: {0}")]
    LimitExceeded(String),
    /// Unsupported protocol version.
    #[error("Version not supported: {0}")]
    VersionNotSupported(String),
}

impl Error {
    /// The fixed JSON-RPC code for this error kind.
    pub const fn code(&self) -> i64 {
        match self {
            Self::Parse(_) => -32700,
            Self::InvalidRequest(_) => -32600,
            Self::MethodNotFound(_) => -32601,
            Self::InvalidParams(_) => -32602,
            Self::Internal(_) => -32603,
            Self::InvalidInput(_) => -32000,
            Self::ResourceNotFound(_) => -32001,
            Self::ResourceUnavailable(_) => -32002,
            Self::TransactionRejected(_) => -32003,
            Self::MethodNotSupported(_) => -32004,
            Self::LimitExceeded(_) => -32005,
            Self::VersionNotSupported(_) => -32006,
        }
    }

    /// Kind discriminator name.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Parse(_) => "ParseError",
            Self::InvalidRequest(_) => "InvalidRequestError",
            Self::MethodNotFound(_) => "MethodNotFoundError",
            Self::InvalidParams(_) => "InvalidParamsError",
            Self::Internal(_) => "InternalError",
            Self::InvalidInput(_) => "InvalidInputError",
            Self::ResourceNotFound(_) => "ResourceNotFoundError",
            Self::ResourceUnavailable(_) => "ResourceUnavailableError",
            Self::TransactionRejected(_) => "TransactionRejectedError",
            Self::MethodNotSupported(_) => "MethodNotSupportedError",
            Self::LimitExceeded(_) => "LimitExceededError",
            Self::VersionNotSupported(_) => "VersionNotSupportedError",
        }
    }

    /// The message supplied at construction, without the kind prefix that
    /// `Display` adds.
    pub fn message(&self) -> &str {
        match self {
            Self::Parse(msg)
            | Self::InvalidRequest(msg)
            | Self::MethodNotFound(msg)
            | Self::InvalidParams(msg)
            | Self::Internal(msg)
            | Self::InvalidInput(msg)
            | Self::ResourceNotFound(msg)
            | Self::ResourceUnavailable(msg)
            | Self::TransactionRejected(msg)
            | Self::MethodNotSupported(msg)
            | Self::LimitExceeded(msg)
            | Self::VersionNotSupported(msg) => msg,
        }
    }
}

pub type Result<T> = StdResult<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_codes_are_fixed() {
        let cases = [
            (Error::Parse(String::new()), -32700),
            (Error::InvalidRequest(String::new()), -32600),
            (Error::MethodNotFound(String::new()), -32601),
            (Error::InvalidParams(String::new()), -32602),
            (Error::Internal(String::new()), -32603),
            (Error::InvalidInput(String::new()), -32000),
            (Error::ResourceNotFound(String::new()), -32001),
            (Error::ResourceUnavailable(String::new()), -32002),
            (Error::TransactionRejected(String::new()), -32003),
            (Error::MethodNotSupported(String::new()), -32004),
            (Error::LimitExceeded(String::new()), -32005),
            (Error::VersionNotSupported(String::new()), -32006),
        ];

        for (err, code) in cases {
            assert_eq!(err.code(), code);
        }
    }

    #[test]
    fn test_code_ignores_message() {
        assert_eq!(Error::InvalidParams("a".to_owned()).code(), -32602);
        assert_eq!(Error::InvalidParams("b".to_owned()).code(), -32602);
    }

    #[test]
    fn test_message_is_unprefixed() {
        let err = Error::MethodNotFound("eth_unknown".to_owned());
        assert_eq!(err.message(), "eth_unknown");
        assert_eq!(err.to_string(), "Method not found: eth_unknown");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Error::Parse(String::new()).kind(), "ParseError");
        assert_eq!(
            Error::VersionNotSupported(String::new()).kind(),
            "VersionNotSupportedError"
        );
    }
}
