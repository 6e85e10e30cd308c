use crate::{norm, rlp::FieldList, EncodeError, TxEncoder};
use alloy_primitives::Bytes;
use zktx_primitives::{TxEip712, TxType};

/// Top-level elements of an extended transaction without a paymaster.
const BASE_FIELD_COUNT: usize = 15;

/// Build the ordered, normalized field list of an extended transaction.
///
/// Layout: `nonce, max_priority_fee_per_gas, max_fee_per_gas, gas_limit, to, value, input,
/// v, r, s, chain_id, from, gas_per_pubdata_byte_limit, [factory_deps], custom_signature`
/// followed by `paymaster, paymaster_input` when a paymaster is set.
fn eip712_fields(tx: &TxEip712) -> Result<FieldList, EncodeError> {
    if !tx.is_signed() {
        return Err(EncodeError::missing_signature());
    }

    let mut fields = FieldList::with_capacity(BASE_FIELD_COUNT + 2);
    fields.push(&tx.nonce);
    fields.push(&tx.max_priority_fee_per_gas);
    fields.push(&tx.max_fee_per_gas);
    fields.push(&tx.gas_limit);
    fields.push(&tx.to);
    fields.push(&tx.value);
    fields.push(&tx.input);

    match &tx.signature {
        Some(signature) => {
            let recovery_id = signature.recovery_id().ok_or_else(|| {
                EncodeError::invalid_field(
                    "signature.v",
                    format!("recovery id {} is below 27", signature.v),
                )
            })?;
            dev_trace!(recovery_id, "encoding ecdsa signature");
            fields.push(&recovery_id);
            fields.push(&signature.r);
            fields.push(&signature.s);
        }
        None => {
            // account abstraction: chain id takes the `v` slot, `r` and `s` stay empty
            if tx.from.is_none() {
                return Err(EncodeError::invalid_field(
                    "from",
                    "sender is required when the transaction carries only a custom signature",
                ));
            }
            dev_trace!(
                chain_id = tx.chain_id,
                "encoding account abstraction signature"
            );
            fields.push(&tx.chain_id);
            fields.push_empty();
            fields.push_empty();
        }
    }

    fields.push(&tx.chain_id);
    fields.push(&tx.from);
    fields.push(&tx.gas_per_pubdata_byte_limit);
    fields.push_list(tx.factory_deps().iter().map(norm));
    fields.push(&tx.custom_signature);

    match tx.paymaster {
        Some(paymaster) => {
            fields.push(&paymaster);
            fields.push(&tx.paymaster_input);
        }
        None if tx.paymaster_input.is_some() => {
            dev_warn!("paymaster input is set without a paymaster, leaving it out");
        }
        None => {}
    }

    debug_assert!(fields.len() >= BASE_FIELD_COUNT);
    Ok(fields)
}

impl TxEncoder for TxEip712 {
    fn encoded_type(&self) -> TxType {
        self.tx_type()
    }

    fn encode(&self) -> Result<Bytes, EncodeError> {
        Ok(eip712_fields(self)?.encode(self.tx_type()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{aa_tx, scenario_tx, top_level_items, Item, SENDER};
    use alloy_primitives::{b256, bytes, hex, keccak256, Address, U256};
    use zktx_primitives::{bytecode::hash_bytecode, constants::CONTRACT_DEPLOYER, TxSignature};

    const SCENARIO: &str = "71f88705843b9aca008477359400830186a09436615cf349d7f6344891b1e7ca7c72883f5dc049808080a01111111111111111111111111111111111111111111111111111111111111111a0222222222222222222222222222222222222222222222222222222222222222282010e9436615cf349d7f6344891b1e7ca7c72883f5dc04983027100c080";

    #[test]
    fn scenario_matches_known_encoding() {
        let tx = scenario_tx();
        let encoded = tx.encode().unwrap();
        assert_eq!(hex::encode(&encoded), SCENARIO);
        assert_eq!(
            tx.tx_hash().unwrap(),
            b256!("aa9b01d8f9d3db0583f47da72b6a5bb17b91dc1e78a9223aa897a01538dbbc0c")
        );
    }

    #[test]
    fn scenario_structure() {
        let encoded = scenario_tx().encode().unwrap();
        assert_eq!(encoded[0], 0x71);

        let items = top_level_items(&encoded[1..]);
        assert_eq!(items.len(), BASE_FIELD_COUNT);
        // value, data
        assert_eq!(items[5], Item::Str(&[]));
        assert_eq!(items[6], Item::Str(&[]));
        // v = 27 rebases to zero
        assert_eq!(items[7], Item::Str(&[]));
        assert_eq!(items[10], Item::Str(&[0x01, 0x0e]));
        assert_eq!(items[11], Item::Str(SENDER.as_slice()));
        assert_eq!(items[13], Item::List(&[]));
        assert_eq!(items[14], Item::Str(&[]));
    }

    #[test]
    fn account_abstraction_with_paymaster_matches_known_encoding() {
        let tx = aa_tx();
        let encoded = tx.encode().unwrap();
        assert_eq!(
            hex::encode(&encoded),
            "71f8968080840ee6b2808080880de0b6b3a764000082aabb82010e808082010e9436615cf349d7f6344891b1e7ca7c72883f5dc04982c350f8409eababababababababababababababababababababababababababababababa0010000000000000000000000000000000000000000000000000000000000000084deadbeef944b5df730c2e6b28e17013a1485e5d9bc41efe021848c5a3445"
        );
        assert_eq!(
            keccak256(&encoded),
            b256!("bc798ba218727e3d88bc0dde88947259faffc444ae2ad63a1916ca79ed8dda83")
        );

        let items = top_level_items(&encoded[1..]);
        assert_eq!(items.len(), BASE_FIELD_COUNT + 2);
        // chain id in the `v` slot, empty `r` and `s`
        assert_eq!(items[7], Item::Str(&[0x01, 0x0e]));
        assert_eq!(items[8], Item::Str(&[]));
        assert_eq!(items[9], Item::Str(&[]));
    }

    #[test]
    fn encoding_is_deterministic_and_pure() {
        let tx = scenario_tx();
        let before = tx.clone();
        let first = tx.encode().unwrap();
        let second = tx.encode().unwrap();
        assert_eq!(first, second);
        assert_eq!(tx, before);
    }

    #[test]
    fn unsigned_transaction_is_rejected() {
        let mut tx = scenario_tx();
        tx.signature = None;
        assert_eq!(tx.encode(), Err(EncodeError::MissingSignature));
        assert_eq!(tx.tx_hash(), Err(EncodeError::MissingSignature));
    }

    #[test]
    fn zero_nonce_is_an_empty_element() {
        let tx = scenario_tx().with_nonce(0);
        let encoded = tx.encode().unwrap();
        assert_eq!(top_level_items(&encoded[1..])[0], Item::Str(&[]));
    }

    #[rstest::rstest]
    #[case(27, &[])]
    #[case(28, &[0x01])]
    fn recovery_id_is_rebased(#[case] v: u64, #[case] expected: &[u8]) {
        let mut tx = scenario_tx();
        tx.signature = Some(TxSignature::new(v, U256::from(1), U256::from(2)));
        let encoded = tx.encode().unwrap();
        assert_eq!(top_level_items(&encoded[1..])[7], Item::Str(expected));
    }

    #[test]
    fn recovery_id_below_27_is_invalid() {
        let mut tx = scenario_tx();
        tx.signature = Some(TxSignature::new(1, U256::from(1), U256::from(2)));
        assert!(matches!(
            tx.encode(),
            Err(EncodeError::InvalidField {
                field: "signature.v",
                ..
            })
        ));
    }

    #[test]
    fn paymaster_adds_exactly_two_elements() {
        let without = scenario_tx();
        let with = without
            .clone()
            .with_paymaster(Address::repeat_byte(0x42), bytes!("8c5a3445"));

        let without = without.encode().unwrap();
        let with = with.encode().unwrap();
        let without_items = top_level_items(&without[1..]);
        let with_items = top_level_items(&with[1..]);
        assert_eq!(with_items.len(), without_items.len() + 2);
        assert_eq!(&with_items[..without_items.len()], &without_items[..]);
        assert_eq!(with_items[15], Item::Str(&[0x42; 20]));
        assert_eq!(with_items[16], Item::Str(&[0x8c, 0x5a, 0x34, 0x45]));
    }

    #[test]
    fn paymaster_input_without_paymaster_is_dropped() {
        let mut tx = scenario_tx();
        tx.paymaster_input = Some(bytes!("01"));
        assert_eq!(tx.encode().unwrap(), scenario_tx().encode().unwrap());
    }

    #[test]
    fn paymaster_without_input_encodes_empty_input() {
        let mut tx = scenario_tx();
        tx.paymaster = Some(Address::repeat_byte(0x42));
        let encoded = tx.encode().unwrap();
        let items = top_level_items(&encoded[1..]);
        assert_eq!(items.len(), BASE_FIELD_COUNT + 2);
        assert_eq!(items[16], Item::Str(&[]));
    }

    #[test]
    fn empty_and_absent_factory_deps_are_indistinguishable() {
        let absent = scenario_tx();
        let empty = scenario_tx().with_factory_deps(Vec::new());
        assert_eq!(absent.factory_deps, None);
        assert_eq!(empty.factory_deps, Some(vec![]));
        assert_eq!(absent.encode().unwrap(), empty.encode().unwrap());
    }

    #[test]
    fn factory_deps_keep_order_and_are_normalized() {
        let first = b256!("0000000000000000000000000000000000000000000000000000000000000001");
        let second = b256!("0100000300000000000000000000000000000000000000000000000000000000");
        let tx = scenario_tx().with_factory_deps([first, second]);
        let encoded = tx.encode().unwrap();
        let items = top_level_items(&encoded[1..]);
        // 0x01 is a single-byte string, the second hash is a 32-byte string
        let mut expected = vec![0x01, 0xa0];
        expected.extend_from_slice(second.as_slice());
        assert_eq!(items[13], Item::List(&expected));
    }

    #[test]
    fn custom_signature_only_requires_sender() {
        let mut tx = aa_tx();
        tx.from = None;
        assert!(matches!(
            tx.encode(),
            Err(EncodeError::InvalidField { field: "from", .. })
        ));
    }

    #[test]
    fn both_signatures_use_the_ecdsa_slots() {
        let tx = scenario_tx().with_custom_signature(bytes!("deadbeef"));
        let encoded = tx.encode().unwrap();
        let items = top_level_items(&encoded[1..]);
        assert_eq!(items[7], Item::Str(&[]));
        assert_eq!(items[8], Item::Str(&[0x11; 32]));
        assert_eq!(items[14], Item::Str(&[0xde, 0xad, 0xbe, 0xef]));
    }

    #[test]
    fn deployment_lists_bytecode_hashes() {
        let bytecode: Vec<u8> = (0..96).collect();
        let bytecode_hash = hash_bytecode(&bytecode).unwrap();
        let tx = scenario_tx()
            .with_to(CONTRACT_DEPLOYER)
            .with_factory_deps([bytecode_hash]);
        let encoded = tx.encode().unwrap();
        let items = top_level_items(&encoded[1..]);
        // the deployer address has leading zero bytes that are stripped
        assert_eq!(items[4], Item::Str(&[0x80, 0x06]));
        let mut expected = vec![0xa0];
        expected.extend_from_slice(bytecode_hash.as_slice());
        assert_eq!(items[13], Item::List(&expected));
    }

    #[test]
    fn changing_a_field_changes_the_hash() {
        let tx = scenario_tx();
        let bumped = tx.clone().with_nonce(tx.nonce + 1);
        assert_ne!(tx.tx_hash().unwrap(), bumped.tx_hash().unwrap());
        assert_eq!(tx.tx_hash().unwrap(), keccak256(tx.encode().unwrap()));
    }
}
