mod eip712;
mod legacy;
mod signature;
mod tx_type;
mod typed;

pub use eip712::TxEip712;
pub use legacy::TxLegacy;
pub use signature::TxSignature;
pub use tx_type::{TxType, TxTypeError};
pub use typed::TypedTransaction;
