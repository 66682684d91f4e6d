//! Catalog of Ethereum JSON-RPC method signatures for the `eth`, `debug`, and
//! `engine` namespaces.
//!
//! Find the validated value types (`Address`, `Hash`, `Quantity`, `BlockTag`,
//! `BlockSpec`) and the JSON-RPC error taxonomy in `ethrpc-format`, and the
//! per-method parameter/result declarations plus the JSON-RPC 2.0 envelope
//! shapes in `ethrpc-methods`.

pub use ethrpc_format as format;
pub use ethrpc_methods as methods;
