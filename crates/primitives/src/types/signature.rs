use crate::U256;

/// An ECDSA signature `(v, r, s)` in the Ethereum 27/28 recovery id convention.
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TxSignature {
    /// Recovery id, 27 or 28.
    #[cfg_attr(feature = "serde", serde(with = "alloy_serde::quantity"))]
    pub v: u64,
    /// The R field of the signature; the point on the curve.
    pub r: U256,
    /// The S field of the signature; the point on the curve.
    pub s: U256,
}

impl TxSignature {
    /// Offset between the 27/28 recovery id and the y-parity bit.
    pub const RECOVERY_ID_OFFSET: u64 = 27;

    /// Create a signature from its raw parts.
    pub const fn new(v: u64, r: U256, s: U256) -> Self {
        Self { v, r, s }
    }

    /// Create a signature from `r`, `s` and the y-parity bit.
    pub const fn from_parity(r: U256, s: U256, y_parity: bool) -> Self {
        Self {
            v: Self::RECOVERY_ID_OFFSET + y_parity as u64,
            r,
            s,
        }
    }

    /// The recovery id rebased to 0/1, or `None` if `v` is below 27.
    pub const fn recovery_id(&self) -> Option<u64> {
        self.v.checked_sub(Self::RECOVERY_ID_OFFSET)
    }
}

impl From<alloy_primitives::Signature> for TxSignature {
    fn from(sig: alloy_primitives::Signature) -> Self {
        Self::from_parity(sig.r(), sig.s(), sig.v())
    }
}
