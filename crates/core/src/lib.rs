//! Canonical encoding and hashing of zkSync-style layer-2 transactions.
//!
//! The extended transaction (type `0x71`) is serialized as its type byte followed by the RLP
//! list of its fields, every field first passed through [`norm`]. The transaction hash is the
//! keccak-256 digest of those bytes.

#[macro_use]
extern crate zktx_helpers;

mod eip712;
mod encoder;
mod error;
mod legacy;
mod norm;
mod rlp;
mod signing;

#[cfg(test)]
mod test_utils;

pub use encoder::{encode, hash, EncodedTransaction, TxEncoder};
pub use error::EncodeError;
pub use norm::{norm, Normalize};
pub use signing::{
    eip712_domain, Eip712Transaction, SignableTransaction, EIP712_DOMAIN_NAME,
    EIP712_DOMAIN_VERSION,
};

#[cfg(test)]
#[ctor::ctor]
fn init() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
