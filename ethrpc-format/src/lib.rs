//! # ethrpc format
//!
//! Validated value types for the Ethereum JSON-RPC wire format.
//!
//! Every binary or numeric value on the wire is a `0x`-prefixed hex string.
//! This crate provides newtypes that admit exactly the strings the execution
//! API specification allows, so a value of type [`Address`], [`Hash`], or
//! [`Quantity`] is known-valid by construction and the raw text survives
//! unchanged.
//!
//! ## Key Types
//!
//! - [`Address`] - 20-byte Ethereum address, case-insensitive hex
//! - [`Hash`] - 32-byte hash, lowercase hex only
//! - [`Quantity`] - unsigned integer with no leading zero digits
//! - [`BlockTag`] - named block reference (`latest`, `safe`, ...)
//! - [`BlockSpec`] - block number, tag, or hash
//! - [`Error`] - the twelve-kind JSON-RPC error taxonomy
//!
//! ## Example
//!
//! ```
//! use ethrpc_format::{Address, Quantity};
//!
//! let addr: Address = "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb0".parse()?;
//! assert_eq!(addr.as_str(), "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb0");
//!
//! let qty: Quantity = "0x1a".parse()?;
//! assert_eq!(qty.to_u64(), Some(26));
//! # Ok::<(), ethrpc_format::Error>(())
//! ```

mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Address, BlockSpec, BlockTag, Hash, Hex, Quantity};
