mod address;
mod block_spec;
mod block_tag;
mod hash;
mod hex;
mod quantity;

pub use address::Address;
pub use block_spec::BlockSpec;
pub use block_tag::BlockTag;
pub use hash::Hash;
pub use hex::Hex;
pub use quantity::Quantity;
