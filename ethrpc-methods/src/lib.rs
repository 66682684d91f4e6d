//! Ethereum JSON-RPC method signatures.
//!
//! One module per namespace (`eth`, `debug`, `engine`), each declaring a
//! method-name enum plus a parameter struct and result alias per method,
//! generated from the Ethereum execution API specification. The
//! [`jsonrpc`] module carries the JSON-RPC 2.0 envelope shapes these
//! signatures travel in.
//!
//! There is no dispatcher and no transport here; these are passive
//! declarations for consumers that implement or call the methods.

// Module declarations
pub mod debug;
pub mod engine;
pub mod eth;
pub mod jsonrpc;
mod method;

// Re-export types from modules for convenience
pub use debug::DebugMethod;
pub use engine::EngineMethod;
pub use eth::EthMethod;
pub use jsonrpc::{ErrorObject, ErrorResponse, Id, Request, Response, Version};
pub use method::{Method, RpcMethod};
