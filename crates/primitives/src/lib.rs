//! Transaction model for zkSync-style layer-2 transactions.
//!
//! This crate only stores transaction fields and the type discriminator. Encoding, hashing and
//! signing digests live in `zktx-core`.

/// Bytecode hashing used for factory dependencies.
pub mod bytecode;
/// Well-known chains.
pub mod chain;
/// Network constants.
pub mod constants;
/// Types definition
pub mod types;

pub use alloy_primitives;
pub use alloy_primitives::{
    address, b256, bytes, keccak256, Address, Bytes, ChainId, TxHash, B256, U256,
};

pub use types::{TxEip712, TxLegacy, TxSignature, TxType, TxTypeError, TypedTransaction};
