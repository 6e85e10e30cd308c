use crate::{address, Address};

/// Type tag of a legacy transaction.
pub const LEGACY_TX_TYPE: u8 = 0x00;

/// Type tag of the extended (EIP-712 signed) transaction.
pub const EIP712_TX_TYPE: u8 = 0x71;

/// Gas per publication-data byte limit used when the caller does not set one.
pub const DEFAULT_GAS_PER_PUBDATA_BYTE_LIMIT: u64 = 160_000;

/// The L2 base token (ETH) system contract.
pub const ETH_TOKEN: Address = address!("000000000000000000000000000000000000800a");

/// The contract deployer system contract.
pub const CONTRACT_DEPLOYER: Address = address!("0000000000000000000000000000000000008006");

/// Largest deployable bytecode, in bytes. The word count has to fit into a `u16`.
pub const MAX_BYTECODE_SIZE: usize = (u16::MAX as usize) * 32;
