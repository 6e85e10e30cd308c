use crate::norm::{norm, Normalize};
use alloy_primitives::Bytes;
use alloy_rlp::{BufMut, Encodable, Header};
use zktx_primitives::TxType;

/// A single top-level element of an encoded transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Field {
    /// A byte string.
    Str(Bytes),
    /// A nested list of byte strings.
    List(Vec<Bytes>),
}

impl Encodable for Field {
    fn encode(&self, out: &mut dyn BufMut) {
        match self {
            Field::Str(bytes) => bytes.encode(out),
            Field::List(items) => items.encode(out),
        }
    }

    fn length(&self) -> usize {
        match self {
            Field::Str(bytes) => bytes.length(),
            Field::List(items) => items.length(),
        }
    }
}

/// Ordered sequence of normalized fields, encoded as one RLP list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct FieldList {
    fields: Vec<Field>,
}

impl FieldList {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Append `norm(value)`.
    pub(crate) fn push<T: Normalize + ?Sized>(&mut self, value: &T) {
        self.fields.push(Field::Str(norm(value)));
    }

    /// Append an empty byte string.
    pub(crate) fn push_empty(&mut self) {
        self.fields.push(Field::Str(Bytes::new()));
    }

    /// Append a nested list; an empty iterator still produces an (empty) list element.
    pub(crate) fn push_list(&mut self, items: impl IntoIterator<Item = Bytes>) {
        self.fields.push(Field::List(items.into_iter().collect()));
    }

    /// Number of top-level elements.
    pub(crate) fn len(&self) -> usize {
        self.fields.len()
    }

    /// Outputs the length of the transaction's fields.
    pub(crate) fn fields_len(&self) -> usize {
        self.fields.iter().map(Encodable::length).sum()
    }

    /// Encode the list, prefixed with the type byte of enveloped transactions.
    pub(crate) fn encode(&self, tx_type: TxType) -> Bytes {
        let header = Header {
            list: true,
            payload_length: self.fields_len(),
        };
        let type_len = usize::from(tx_type.is_typed());
        let mut out = Vec::with_capacity(type_len + header.length() + header.payload_length);
        if tx_type.is_typed() {
            out.put_u8(tx_type.into());
        }
        header.encode(&mut out);
        for field in &self.fields {
            field.encode(&mut out);
        }
        dev_trace!(
            tx_type = u8::from(tx_type),
            fields = self.len(),
            len = out.len(),
            "encoded field list"
        );
        out.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{bytes, hex};

    #[test]
    fn empty_list() {
        let fields = FieldList::default();
        assert_eq!(fields.encode(TxType::Legacy), bytes!("c0"));
        assert_eq!(fields.encode(TxType::Eip712), bytes!("71c0"));
    }

    #[test]
    fn strings_and_nested_lists() {
        let mut fields = FieldList::with_capacity(4);
        fields.push(&0u64);
        fields.push(&0x7fu64);
        fields.push(&0x80u64);
        fields.push_list(Vec::new());
        assert_eq!(fields.len(), 4);
        assert_eq!(fields.encode(TxType::Legacy), bytes!("c5807f8180c0"));
    }

    #[test]
    fn long_payload_uses_long_list_header() {
        let mut fields = FieldList::default();
        fields.push(&Bytes::from(vec![0xaa; 60]));
        let encoded = fields.encode(TxType::Eip712);
        // 0x71, list header f8 3e, string header b8 3c, 60 bytes
        assert_eq!(encoded.len(), 1 + 2 + 2 + 60);
        assert_eq!(hex::encode(&encoded[..5]), "71f83eb83c");
    }
}
