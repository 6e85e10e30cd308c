use crate::EncodeError;
use alloy_primitives::{keccak256, Bytes, TxHash};
use auto_impl::auto_impl;
use once_cell::sync::OnceCell;
use std::fmt;
use zktx_primitives::{TxType, TypedTransaction};

/// Canonical wire encoding of a transaction.
#[auto_impl(&, Box, Arc)]
pub trait TxEncoder {
    /// The type discriminator written in front of the payload of typed transactions.
    fn encoded_type(&self) -> TxType;

    /// Encode the transaction into the bytes submitted to the network.
    ///
    /// The encoding is deterministic and never mutates the transaction.
    fn encode(&self) -> Result<Bytes, EncodeError>;

    /// Keccak-256 of [`TxEncoder::encode`], including the type byte.
    fn tx_hash(&self) -> Result<TxHash, EncodeError> {
        self.encode().map(keccak256)
    }

    /// Encode the transaction and keep the payload together with a lazily computed hash.
    fn seal(&self) -> Result<EncodedTransaction, EncodeError> {
        Ok(EncodedTransaction::new(self.encoded_type(), self.encode()?))
    }
}

/// Encode a transaction. See [`TxEncoder::encode`].
pub fn encode<T: TxEncoder + ?Sized>(tx: &T) -> Result<Bytes, EncodeError> {
    tx.encode()
}

/// Hash a transaction. See [`TxEncoder::tx_hash`].
pub fn hash<T: TxEncoder + ?Sized>(tx: &T) -> Result<TxHash, EncodeError> {
    tx.tx_hash()
}

impl TxEncoder for TypedTransaction {
    fn encoded_type(&self) -> TxType {
        self.tx_type()
    }

    fn encode(&self) -> Result<Bytes, EncodeError> {
        match self {
            TypedTransaction::Legacy(tx) => tx.encode(),
            TypedTransaction::Eip712(tx) => tx.encode(),
        }
    }
}

/// An encoded transaction whose hash is computed on first use.
#[derive(Clone)]
pub struct EncodedTransaction {
    tx_type: TxType,
    payload: Bytes,
    hash: OnceCell<TxHash>,
}

impl EncodedTransaction {
    /// Wrap an already encoded payload.
    pub fn new(tx_type: TxType, payload: Bytes) -> Self {
        Self {
            tx_type,
            payload,
            hash: OnceCell::new(),
        }
    }

    /// Type of the encoded transaction.
    pub fn tx_type(&self) -> TxType {
        self.tx_type
    }

    /// The encoded bytes.
    pub fn payload(&self) -> &Bytes {
        &self.payload
    }

    /// Consume and return the encoded bytes.
    pub fn into_payload(self) -> Bytes {
        self.payload
    }

    /// The transaction hash.
    pub fn hash(&self) -> TxHash {
        *self.hash.get_or_init(|| {
            dev_trace!(len = self.payload.len(), "hashing encoded transaction");
            keccak256(&self.payload)
        })
    }
}

impl fmt::Debug for EncodedTransaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedTransaction")
            .field("tx_type", &self.tx_type)
            .field("payload", &self.payload)
            .field("hash", &self.hash.get())
            .finish()
    }
}

impl PartialEq for EncodedTransaction {
    fn eq(&self, other: &Self) -> bool {
        self.tx_type == other.tx_type && self.payload == other.payload
    }
}

impl Eq for EncodedTransaction {}

impl AsRef<[u8]> for EncodedTransaction {
    fn as_ref(&self) -> &[u8] {
        &self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{aa_tx, scenario_tx};
    use std::sync::Arc;

    #[test]
    fn sealed_hash_is_lazy_and_stable() {
        let tx = scenario_tx();
        let sealed = tx.seal().unwrap();
        assert!(sealed.hash.get().is_none());
        assert_eq!(sealed.hash(), tx.tx_hash().unwrap());
        assert!(sealed.hash.get().is_some());
        assert_eq!(sealed.hash(), keccak256(sealed.payload()));
        assert_eq!(sealed.tx_type(), TxType::Eip712);
    }

    #[test]
    fn sealed_hash_is_shared_across_threads() {
        let sealed = Arc::new(aa_tx().seal().unwrap());
        let expected = keccak256(sealed.payload());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let sealed = Arc::clone(&sealed);
                std::thread::spawn(move || sealed.hash())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }

    #[test]
    fn typed_transaction_dispatches() {
        let tx = scenario_tx();
        let typed = TypedTransaction::from(tx.clone());
        assert_eq!(typed.encode().unwrap(), tx.encode().unwrap());
        assert_eq!(hash(&typed).unwrap(), hash(&tx).unwrap());
        assert_eq!(encode(&Arc::new(typed)).unwrap(), encode(&tx).unwrap());
    }

    #[test]
    fn seal_propagates_errors() {
        let mut tx = scenario_tx();
        tx.signature = None;
        assert_eq!(tx.seal(), Err(EncodeError::MissingSignature));
    }
}
