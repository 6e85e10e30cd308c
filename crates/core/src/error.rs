/// Errors raised while encoding a transaction.
///
/// Encoding either succeeds with the full payload or fails before any byte is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// Neither an ECDSA signature nor an account-abstraction signature is present.
    #[error("transaction is not signed")]
    MissingSignature,
    /// A field value violates the encoder's input contract.
    #[error("invalid field `{field}`: {reason}")]
    InvalidField {
        /// Name of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

impl EncodeError {
    pub(crate) fn missing_signature() -> Self {
        dev_debug!("refusing to encode an unsigned transaction");
        EncodeError::MissingSignature
    }

    pub(crate) fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        dev_debug!("invalid field {field}: {reason}");
        EncodeError::InvalidField { field, reason }
    }
}
