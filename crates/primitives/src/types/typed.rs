use crate::{Address, Bytes, ChainId, TxEip712, TxLegacy, TxSignature, TxType, U256};

/// Either of the supported transaction types.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypedTransaction {
    /// Legacy transaction
    Legacy(TxLegacy),
    /// Extended transaction
    Eip712(TxEip712),
}

impl TypedTransaction {
    /// The type tag of the inner transaction.
    pub const fn tx_type(&self) -> TxType {
        match self {
            TypedTransaction::Legacy(tx) => tx.tx_type(),
            TypedTransaction::Eip712(tx) => tx.tx_type(),
        }
    }

    /// The nonce of the inner transaction.
    pub const fn nonce(&self) -> u64 {
        match self {
            TypedTransaction::Legacy(tx) => tx.nonce,
            TypedTransaction::Eip712(tx) => tx.nonce,
        }
    }

    /// The chain id, if the inner transaction is bound to one.
    pub const fn chain_id(&self) -> Option<ChainId> {
        match self {
            TypedTransaction::Legacy(tx) => tx.chain_id,
            TypedTransaction::Eip712(tx) => Some(tx.chain_id),
        }
    }

    /// The recipient, `None` for contract creation.
    pub const fn to(&self) -> Option<Address> {
        match self {
            TypedTransaction::Legacy(tx) => tx.to,
            TypedTransaction::Eip712(tx) => tx.to,
        }
    }

    /// The transferred value.
    pub const fn value(&self) -> U256 {
        match self {
            TypedTransaction::Legacy(tx) => tx.value,
            TypedTransaction::Eip712(tx) => tx.value,
        }
    }

    /// The call data.
    pub fn input(&self) -> &Bytes {
        match self {
            TypedTransaction::Legacy(tx) => &tx.input,
            TypedTransaction::Eip712(tx) => &tx.input,
        }
    }

    /// The ECDSA signature, if any.
    pub const fn signature(&self) -> Option<&TxSignature> {
        match self {
            TypedTransaction::Legacy(tx) => tx.signature.as_ref(),
            TypedTransaction::Eip712(tx) => tx.signature.as_ref(),
        }
    }

    /// Returns the legacy transaction if this is one.
    pub const fn as_legacy(&self) -> Option<&TxLegacy> {
        match self {
            TypedTransaction::Legacy(tx) => Some(tx),
            _ => None,
        }
    }

    /// Returns the extended transaction if this is one.
    pub const fn as_eip712(&self) -> Option<&TxEip712> {
        match self {
            TypedTransaction::Eip712(tx) => Some(tx),
            _ => None,
        }
    }
}

impl From<TxLegacy> for TypedTransaction {
    fn from(tx: TxLegacy) -> Self {
        TypedTransaction::Legacy(tx)
    }
}

impl From<TxEip712> for TypedTransaction {
    fn from(tx: TxEip712) -> Self {
        TypedTransaction::Eip712(tx)
    }
}
