use crate::constants::{EIP712_TX_TYPE, LEGACY_TX_TYPE};
use std::fmt;

/// One-byte transaction type discriminator.
///
/// The tag of a typed transaction is prepended to its encoding and is part of the hashed bytes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TxType {
    /// Legacy fee-based transaction.
    #[default]
    Legacy = LEGACY_TX_TYPE,
    /// Extended transaction with publication-data pricing, paymaster and account abstraction.
    Eip712 = EIP712_TX_TYPE,
}

/// Error for an unknown transaction type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TxTypeError {
    /// The tag does not belong to a supported transaction type.
    #[error("unsupported transaction type 0x{0:02x}")]
    Unsupported(u64),
}

impl TxType {
    /// Whether this is the legacy type.
    #[inline]
    pub const fn is_legacy(self) -> bool {
        matches!(self, TxType::Legacy)
    }

    /// Whether this type is enveloped, i.e. carries its tag as the first payload byte.
    #[inline]
    pub const fn is_typed(self) -> bool {
        !self.is_legacy()
    }
}

impl From<TxType> for u8 {
    fn from(ty: TxType) -> Self {
        ty as u8
    }
}

impl TryFrom<u8> for TxType {
    type Error = TxTypeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            LEGACY_TX_TYPE => Ok(TxType::Legacy),
            EIP712_TX_TYPE => Ok(TxType::Eip712),
            other => Err(TxTypeError::Unsupported(other.into())),
        }
    }
}

impl TryFrom<u64> for TxType {
    type Error = TxTypeError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| TxTypeError::Unsupported(value))
            .and_then(TxType::try_from)
    }
}

impl fmt::Display for TxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxType::Legacy => write!(f, "legacy (0x{:02x})", u8::from(*self)),
            TxType::Eip712 => write!(f, "eip712 (0x{:02x})", u8::from(*self)),
        }
    }
}
