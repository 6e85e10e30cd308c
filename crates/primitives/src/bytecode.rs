use crate::{constants::MAX_BYTECODE_SIZE, B256};
use sha2::{Digest, Sha256};

/// Version byte of the bytecode hash format.
pub const BYTECODE_HASH_VERSION: u8 = 0x01;

/// Errors returned when a bytecode cannot be hashed for deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BytecodeHashError {
    /// The bytecode length is not a multiple of 32.
    #[error("bytecode length must be a multiple of 32, got {0}")]
    NotWordAligned(usize),
    /// The bytecode must consist of an odd number of 32-byte words.
    #[error("bytecode must have an odd number of words, got {0}")]
    EvenWordCount(usize),
    /// The bytecode does not fit the 16-bit word counter.
    #[error("bytecode of {0} bytes exceeds the maximum of {MAX_BYTECODE_SIZE} bytes")]
    TooLarge(usize),
}

/// Hash deployment bytecode the way the network's contract deployer expects it.
///
/// The layout is `version (1 byte) || 0x00 || word count (2 bytes, big-endian) ||
/// sha256(bytecode)[4..]`. The resulting value is what goes into a transaction's factory
/// dependencies.
pub fn hash_bytecode(bytecode: &[u8]) -> Result<B256, BytecodeHashError> {
    let len = bytecode.len();
    if len > MAX_BYTECODE_SIZE {
        return Err(BytecodeHashError::TooLarge(len));
    }
    if len % 32 != 0 {
        return Err(BytecodeHashError::NotWordAligned(len));
    }
    let words = len / 32;
    if words % 2 == 0 {
        return Err(BytecodeHashError::EvenWordCount(words));
    }

    let digest = Sha256::digest(bytecode);
    let mut hash = B256::ZERO;
    hash[0] = BYTECODE_HASH_VERSION;
    hash[2..4].copy_from_slice(&(words as u16).to_be_bytes());
    hash[4..].copy_from_slice(&digest[4..]);
    Ok(hash)
}

/// Number of 32-byte words encoded in a bytecode hash.
pub fn bytecode_len_in_words(hash: &B256) -> u16 {
    u16::from_be_bytes([hash[2], hash[3]])
}
