use alloy_primitives::{address, b256, bytes, Address, U256};
use alloy_rlp::Header;
use zktx_primitives::{TxEip712, TxSignature};

pub(crate) const SENDER: Address = address!("36615cf349d7f6344891b1e7ca7c72883f5dc049");
pub(crate) const PAYMASTER: Address = address!("4b5df730c2e6b28e17013a1485e5d9bc41efe021");

/// A top-level element of an RLP list, with its header stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Item<'a> {
    Str(&'a [u8]),
    List(&'a [u8]),
}

/// Split an encoded RLP list into its top-level elements.
pub(crate) fn top_level_items(mut buf: &[u8]) -> Vec<Item<'_>> {
    let header = Header::decode(&mut buf).unwrap();
    assert!(header.list, "not a list");
    assert_eq!(buf.len(), header.payload_length, "trailing bytes");

    let mut items = Vec::new();
    while !buf.is_empty() {
        let header = Header::decode(&mut buf).unwrap();
        let (payload, rest) = buf.split_at(header.payload_length);
        items.push(if header.list {
            Item::List(payload)
        } else {
            Item::Str(payload)
        });
        buf = rest;
    }
    items
}

/// Plain ECDSA-signed transfer on a local node.
pub(crate) fn scenario_tx() -> TxEip712 {
    TxEip712::default()
        .with_nonce(5)
        .with_fees(2_000_000_000, 1_000_000_000)
        .with_gas_limit(100_000)
        .with_to(SENDER)
        .with_chain_id(270)
        .with_from(SENDER)
        .with_signature(TxSignature::new(
            27,
            U256::from_be_bytes([0x11; 32]),
            U256::from_be_bytes([0x22; 32]),
        ))
}

/// Contract-account transaction sponsored by a paymaster, with factory dependencies.
pub(crate) fn aa_tx() -> TxEip712 {
    TxEip712 {
        max_fee_per_gas: Some(250_000_000),
        value: U256::from(1_000_000_000_000_000_000u128),
        input: bytes!("00aabb"),
        chain_id: 270,
        from: Some(SENDER),
        gas_per_pubdata_byte_limit: 50_000,
        ..Default::default()
    }
    .with_factory_deps([
        b256!("0000abababababababababababababababababababababababababababababab"),
        b256!("0100000000000000000000000000000000000000000000000000000000000000"),
    ])
    .with_custom_signature(bytes!("deadbeef"))
    .with_paymaster(PAYMASTER, bytes!("8c5a3445"))
}
