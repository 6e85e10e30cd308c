use crate::{rlp::FieldList, EncodeError, TxEncoder};
use alloy_primitives::{Bytes, ChainId};
use zktx_primitives::{TxLegacy, TxSignature, TxType};

/// EIP-155 offset added to `chain_id * 2`.
const EIP155_V_OFFSET: u64 = 35;

/// Fields shared by the signed payload and the signing preimage.
fn push_unsigned_fields(fields: &mut FieldList, tx: &TxLegacy) {
    fields.push(&tx.nonce);
    fields.push(&tx.gas_price);
    fields.push(&tx.gas_limit);
    fields.push(&tx.to);
    fields.push(&tx.value);
    fields.push(&tx.input);
}

/// The list hashed to produce the signature, `[chain_id, 0, 0]` appended when replay protected.
pub(crate) fn legacy_signing_fields(tx: &TxLegacy) -> FieldList {
    let mut fields = FieldList::with_capacity(9);
    push_unsigned_fields(&mut fields, tx);
    if let Some(chain_id) = tx.chain_id {
        fields.push(&chain_id);
        fields.push_empty();
        fields.push_empty();
    }
    fields
}

/// The `v` value that goes on the wire.
fn wire_v(signature: &TxSignature, chain_id: Option<ChainId>) -> Result<u64, EncodeError> {
    let Some(chain_id) = chain_id else {
        return Ok(signature.v);
    };

    let parity = signature
        .recovery_id()
        .filter(|id| *id <= 1)
        .ok_or_else(|| {
            EncodeError::invalid_field(
                "signature.v",
                format!("expected 27 or 28, got {}", signature.v),
            )
        })?;
    chain_id
        .checked_mul(2)
        .and_then(|v| v.checked_add(EIP155_V_OFFSET + parity))
        .ok_or_else(|| {
            EncodeError::invalid_field(
                "chain_id",
                format!("chain id {chain_id} overflows the EIP-155 `v` value"),
            )
        })
}

impl TxEncoder for TxLegacy {
    fn encoded_type(&self) -> TxType {
        self.tx_type()
    }

    fn encode(&self) -> Result<Bytes, EncodeError> {
        let signature = self
            .signature
            .as_ref()
            .ok_or_else(EncodeError::missing_signature)?;
        let v = wire_v(signature, self.chain_id)?;
        dev_trace!(v, chain_id = ?self.chain_id, "encoding legacy signature");

        let mut fields = FieldList::with_capacity(9);
        push_unsigned_fields(&mut fields, self);
        fields.push(&v);
        fields.push(&signature.r);
        fields.push(&signature.s);
        Ok(fields.encode(self.tx_type()))
    }
}
