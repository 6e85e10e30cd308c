use crate::{
    constants::DEFAULT_GAS_PER_PUBDATA_BYTE_LIMIT, Address, Bytes, ChainId, TxSignature, TxType,
    B256, U256,
};

/// Extended layer-2 transaction (type `0x71`).
///
/// On top of the usual fee-based fields it carries a gas limit per publication-data byte, the
/// bytecode hashes needed for deployments, an optional paymaster that sponsors fees, and an
/// optional account-abstraction signature used when the sender is a smart-contract account.
///
/// Fields can be filled in any order; nothing is validated until the transaction is encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TxEip712 {
    /// A scalar value equal to the number of transactions sent by the sender.
    #[cfg_attr(feature = "serde", serde(default, with = "alloy_serde::quantity"))]
    pub nonce: u64,
    /// Max priority fee per unit of gas.
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            with = "alloy_serde::quantity::opt",
            alias = "maxPriorityFeePerErg",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub max_priority_fee_per_gas: Option<u128>,
    /// Max fee per unit of gas.
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            with = "alloy_serde::quantity::opt",
            alias = "maxFeePerErg",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub max_fee_per_gas: Option<u128>,
    /// Maximum amount of gas the transaction may use.
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            with = "alloy_serde::quantity::opt",
            alias = "ergsLimit",
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
    /// ECDSA signature over the EIP-712 digest of the transaction.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub signature: Option<TxSignature>,
    /// Account-abstraction signature, validated by the sender's account contract.
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            alias = "aaSignature",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub custom_signature: Option<Bytes>,
    /// Chain id of the target network.
    #[cfg_attr(feature = "serde", serde(default, with = "alloy_serde::quantity"))]
    pub chain_id: ChainId,
    /// The sender. Required when the transaction is authorized by `custom_signature`.
    #[cfg_attr(
        feature = "serde",
        serde(default, alias = "sender", skip_serializing_if = "Option::is_none")
    )]
    pub from: Option<Address>,
    /// Gas limit per byte of data published to layer 1.
    #[cfg_attr(
        feature = "serde",
        serde(
            default = "default_gas_per_pubdata_byte_limit",
            with = "alloy_serde::quantity",
            alias = "ergsPerPubdataByteLimit",
            alias = "gasPerPubdata"
        )
    )]
    pub gas_per_pubdata_byte_limit: u64,
    /// Hashes of the bytecodes a deployment depends on, in order.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub factory_deps: Option<Vec<B256>>,
    /// Contract that sponsors the fees of this transaction.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub paymaster: Option<Address>,
    /// Input passed to the paymaster. Ignored unless `paymaster` is set.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub paymaster_input: Option<Bytes>,
}

#[cfg(feature = "serde")]
const fn default_gas_per_pubdata_byte_limit() -> u64 {
    DEFAULT_GAS_PER_PUBDATA_BYTE_LIMIT
}

impl Default for TxEip712 {
    fn default() -> Self {
        Self {
            nonce: 0,
            max_priority_fee_per_gas: None,
            max_fee_per_gas: None,
            gas_limit: None,
            to: None,
            value: U256::ZERO,
            input: Bytes::new(),
            signature: None,
            custom_signature: None,
            chain_id: 0,
            from: None,
            gas_per_pubdata_byte_limit: DEFAULT_GAS_PER_PUBDATA_BYTE_LIMIT,
            factory_deps: None,
            paymaster: None,
            paymaster_input: None,
        }
    }
}

impl TxEip712 {
    /// The type tag of this transaction.
    #[inline]
    pub const fn tx_type(&self) -> TxType {
        TxType::Eip712
    }

    /// Whether the transaction carries either form of signature.
    #[inline]
    pub const fn is_signed(&self) -> bool {
        self.signature.is_some() || self.custom_signature.is_some()
    }

    /// Whether the transaction is authorized by an account-abstraction signature only.
    #[inline]
    pub const fn is_account_abstraction(&self) -> bool {
        self.signature.is_none() && self.custom_signature.is_some()
    }

    /// The paymaster and its input, if a paymaster is set.
    ///
    /// A missing input is reported as empty bytes.
    pub fn paymaster_params(&self) -> Option<(Address, Bytes)> {
        let input = self.paymaster_input.as_ref();
        self.paymaster
            .map(|paymaster| (paymaster, input.cloned().unwrap_or_default()))
    }

    /// Factory dependencies, empty when unset.
    pub fn factory_deps(&self) -> &[B256] {
        self.factory_deps.as_deref().unwrap_or_default()
    }

    /// Set the nonce.
    pub fn with_nonce(mut self, nonce: u64) -> Self {
        self.nonce = nonce;
        self
    }

    /// Set both fee parameters.
    pub fn with_fees(mut self, max_fee_per_gas: u128, max_priority_fee_per_gas: u128) -> Self {
        self.max_fee_per_gas = Some(max_fee_per_gas);
        self.max_priority_fee_per_gas = Some(max_priority_fee_per_gas);
        self
    }

    /// Set the gas limit.
    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = Some(gas_limit);
        self
    }

    /// Set the recipient.
    pub fn with_to(mut self, to: Address) -> Self {
        self.to = Some(to);
        self
    }

    /// Set the transferred value.
    pub fn with_value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }

    /// Set the call data.
    pub fn with_input(mut self, input: impl Into<Bytes>) -> Self {
        self.input = input.into();
        self
    }

    /// Set the chain id.
    pub fn with_chain_id(mut self, chain_id: ChainId) -> Self {
        self.chain_id = chain_id;
        self
    }

    /// Set the sender.
    pub fn with_from(mut self, from: Address) -> Self {
        self.from = Some(from);
        self
    }

    /// Set the gas limit per publication-data byte.
    pub fn with_gas_per_pubdata_byte_limit(mut self, limit: u64) -> Self {
        self.gas_per_pubdata_byte_limit = limit;
        self
    }

    /// Set the factory dependencies.
    pub fn with_factory_deps(mut self, deps: impl IntoIterator<Item = B256>) -> Self {
        self.factory_deps = Some(deps.into_iter().collect());
        self
    }

    /// Set the paymaster and its input.
    pub fn with_paymaster(mut self, paymaster: Address, input: impl Into<Bytes>) -> Self {
        self.paymaster = Some(paymaster);
        self.paymaster_input = Some(input.into());
        self
    }

    /// Attach an ECDSA signature.
    pub fn with_signature(mut self, signature: TxSignature) -> Self {
        self.signature = Some(signature);
        self
    }

    /// Attach an account-abstraction signature.
    pub fn with_custom_signature(mut self, signature: impl Into<Bytes>) -> Self {
        self.custom_signature = Some(signature.into());
        self
    }
}
