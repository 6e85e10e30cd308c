use alloy_primitives::{Address, Bytes, B256, U256};
use auto_impl::auto_impl;

/// Projection of a field value onto the byte string that is RLP-encoded for it.
///
/// Every value is rendered big-endian with all leading zero bytes removed. Zero, empty and
/// absent values all become the empty byte string, never a single `0x00`. Byte strings and
/// hashes go through the same stripping, so `0x00ab` is encoded as `0xab`.
#[auto_impl(&, Box)]
pub trait Normalize {
    /// The normalized bytes of `self`.
    fn normalized(&self) -> Bytes;
}

/// Normalize a single field value. See [`Normalize`].
#[inline]
pub fn norm<T: Normalize + ?Sized>(value: &T) -> Bytes {
    value.normalized()
}

fn strip_leading_zeros(bytes: &[u8]) -> Bytes {
    let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    Bytes::copy_from_slice(&bytes[start..])
}

macro_rules! impl_normalize_uint {
    ($($t:ty),*) => {
        $(
            impl Normalize for $t {
                #[inline]
                fn normalized(&self) -> Bytes {
                    strip_leading_zeros(&self.to_be_bytes())
                }
            }
        )*
    };
}

impl_normalize_uint!(u8, u16, u32, u64, u128);

impl Normalize for U256 {
    #[inline]
    fn normalized(&self) -> Bytes {
        strip_leading_zeros(&self.to_be_bytes::<{ U256::BYTES }>())
    }
}

impl Normalize for Address {
    #[inline]
    fn normalized(&self) -> Bytes {
        strip_leading_zeros(self.as_slice())
    }
}

impl Normalize for B256 {
    #[inline]
    fn normalized(&self) -> Bytes {
        strip_leading_zeros(self.as_slice())
    }
}

impl Normalize for Bytes {
    #[inline]
    fn normalized(&self) -> Bytes {
        strip_leading_zeros(self)
    }
}

impl Normalize for [u8] {
    #[inline]
    fn normalized(&self) -> Bytes {
        strip_leading_zeros(self)
    }
}

impl<T: Normalize> Normalize for Option<T> {
    #[inline]
    fn normalized(&self) -> Bytes {
        self.as_ref().map(Normalize::normalized).unwrap_or_default()
    }
}
