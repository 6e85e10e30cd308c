use crate::legacy::legacy_signing_fields;
use alloy_primitives::{keccak256, Address, ChainId, B256, U256};
use alloy_sol_types::{Eip712Domain, SolStruct};
use auto_impl::auto_impl;
use std::borrow::Cow;
use zktx_primitives::{TxEip712, TxLegacy, TxType, TypedTransaction};

/// `name` of the EIP-712 domain transactions are signed under.
pub const EIP712_DOMAIN_NAME: &str = "zkSync";
/// `version` of the EIP-712 domain transactions are signed under.
pub const EIP712_DOMAIN_VERSION: &str = "2";

#[allow(missing_docs)]
mod sol_types {
    alloy_sol_types::sol! {
        /// Typed-data view of an extended transaction, as signed by wallets.
        #[derive(Debug, PartialEq, Eq)]
        struct Transaction {
            uint256 txType;
            uint256 from;
            uint256 to;
            uint256 gasLimit;
            uint256 gasPerPubdataByteLimit;
            uint256 maxFeePerGas;
            uint256 maxPriorityFeePerGas;
            uint256 paymaster;
            uint256 nonce;
            uint256 value;
            bytes data;
            bytes32[] factoryDeps;
            bytes paymasterInput;
        }
    }
}

pub use sol_types::Transaction as Eip712Transaction;

/// The EIP-712 domain for `chain_id`.
pub fn eip712_domain(chain_id: ChainId) -> Eip712Domain {
    Eip712Domain::new(
        Some(Cow::Borrowed(EIP712_DOMAIN_NAME)),
        Some(Cow::Borrowed(EIP712_DOMAIN_VERSION)),
        Some(U256::from(chain_id)),
        None,
        None,
    )
}

fn address_to_uint(address: Option<Address>) -> U256 {
    address.map_or(U256::ZERO, |a| U256::from_be_slice(a.as_slice()))
}

impl From<&TxEip712> for Eip712Transaction {
    fn from(tx: &TxEip712) -> Self {
        let max_fee_per_gas = tx.max_fee_per_gas.unwrap_or_default();
        let max_priority_fee_per_gas = tx.max_priority_fee_per_gas.unwrap_or(max_fee_per_gas);
        let (paymaster, paymaster_input) = tx.paymaster_params().unzip();
        Self {
            txType: U256::from(u8::from(TxType::Eip712)),
            from: address_to_uint(tx.from),
            to: address_to_uint(tx.to),
            gasLimit: U256::from(tx.gas_limit.unwrap_or_default()),
            gasPerPubdataByteLimit: U256::from(tx.gas_per_pubdata_byte_limit),
            maxFeePerGas: U256::from(max_fee_per_gas),
            maxPriorityFeePerGas: U256::from(max_priority_fee_per_gas),
            paymaster: address_to_uint(paymaster),
            nonce: U256::from(tx.nonce),
            value: tx.value,
            data: tx.input.clone(),
            factoryDeps: tx.factory_deps().to_vec(),
            paymasterInput: paymaster_input.unwrap_or_default(),
        }
    }
}

/// Digest a wallet signs to authorize a transaction.
#[auto_impl(&, Box, Arc)]
pub trait SignableTransaction {
    /// The 32-byte signing digest.
    fn signing_hash(&self) -> B256;
}

impl SignableTransaction for TxEip712 {
    /// EIP-712 typed-data digest under [`eip712_domain`] of the transaction's chain.
    fn signing_hash(&self) -> B256 {
        let domain = eip712_domain(self.chain_id);
        Eip712Transaction::from(self).eip712_signing_hash(&domain)
    }
}

impl SignableTransaction for TxLegacy {
    /// Keccak-256 of the unsigned RLP list, EIP-155 protected when a chain id is set.
    fn signing_hash(&self) -> B256 {
        keccak256(legacy_signing_fields(self).encode(self.tx_type()))
    }
}

impl SignableTransaction for TypedTransaction {
    fn signing_hash(&self) -> B256 {
        match self {
            TypedTransaction::Legacy(tx) => tx.signing_hash(),
            TypedTransaction::Eip712(tx) => tx.signing_hash(),
        }
    }
}
