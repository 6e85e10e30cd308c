use crate::{Address, Bytes, ChainId, TxSignature, TxType, U256};

/// Legacy fee-based transaction (type `0x00`).
///
/// When `chain_id` is set the transaction is replay protected as described in EIP-155.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TxLegacy {
    /// A scalar value equal to the number of transactions sent by the sender.
    #[cfg_attr(feature = "serde", serde(default, with = "alloy_serde::quantity"))]
    pub nonce: u64,
    /// Price paid per unit of gas.
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            with = "alloy_serde::quantity::opt",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub gas_price: Option<u128>,
    /// Maximum amount of gas the transaction may use.
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            with = "alloy_serde::quantity::opt",
            alias = "gas",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub gas_limit: Option<u64>,
    /// The recipient, `None` for a contract creation.
    #[cfg_attr(
        feature = "serde",
        serde(default, alias = "receiver", skip_serializing_if = "Option::is_none")
    )]
    pub to: Option<Address>,
    /// Amount of the native asset transferred to the recipient.
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: U256,
    /// Call data.
    #[cfg_attr(feature = "serde", serde(default, alias = "data"))]
    pub input: Bytes,
    /// Chain id for EIP-155 replay protection.
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            with = "alloy_serde::quantity::opt",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub chain_id: Option<ChainId>,
    /// ECDSA signature; `v` is kept in the 27/28 convention.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub signature: Option<TxSignature>,
}

impl TxLegacy {
    /// The type tag of this transaction.
    #[inline]
    pub const fn tx_type(&self) -> TxType {
        TxType::Legacy
    }

    /// Whether the transaction is signed.
    #[inline]
    pub const fn is_signed(&self) -> bool {
        self.signature.is_some()
    }

    /// Attach an ECDSA signature.
    pub fn with_signature(mut self, signature: TxSignature) -> Self {
        self.signature = Some(signature);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_has_zero_tag() {
        let tx = TxLegacy::default();
        assert_eq!(u8::from(tx.tx_type()), 0x00);
        assert!(!tx.is_signed());
        assert!(tx
            .with_signature(TxSignature::new(27, U256::from(1), U256::from(1)))
            .is_signed());
    }
}
