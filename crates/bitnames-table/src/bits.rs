//! Mask widths and declared flag representations.

use std::fmt::{Debug, LowerHex};
use std::hash::Hash;
use std::ops::{BitAnd, BitXorAssign};

/// Unsigned integer a mask can be decoded at.
///
/// Implemented for `u8`, `u16`, `u32` and `u64`. Specialized tables decode at
/// the flag type's own width; descriptors always decode at `u64`.
pub trait Bits:
    Copy
    + Eq
    + Hash
    + Debug
    + LowerHex
    + BitAnd<Output = Self>
    + BitXorAssign
    + Send
    + Sync
    + 'static
{
    /// The empty mask.
    const ZERO: Self;
    /// Width in bits.
    const WIDTH: u32;

    /// Shift left by `n`, yielding zero once every bit has been shifted out.
    fn shl(self, n: u32) -> Self;

    /// Truncate a 64-bit value to this width.
    fn from_u64(value: u64) -> Self;

    /// Zero-extend to 64 bits.
    fn to_u64(self) -> u64;
}

macro_rules! impl_bits {
    ($($ty:ty),*) => {$(
        impl Bits for $ty {
            const ZERO: Self = 0;
            const WIDTH: u32 = <$ty>::BITS;

            #[inline]
            fn shl(self, n: u32) -> Self {
                self.checked_shl(n).unwrap_or(0)
            }

            #[inline]
            fn from_u64(value: u64) -> Self {
                value as $ty
            }

            #[inline]
            fn to_u64(self) -> u64 {
                self as u64
            }
        }
    )*};
}

impl_bits!(u8, u16, u32, u64);

/// Integer type a flag type is declared with.
///
/// Signed representations are reinterpreted at their own width, so `-128i8`
/// decodes as bit 7 rather than as a sign-extended 64-bit pattern.
pub trait FlagRepr: Copy {
    /// Unsigned mask of the same width.
    type Bits: Bits;

    fn to_bits(self) -> Self::Bits;
}

macro_rules! impl_flag_repr {
    ($($ty:ty => $bits:ty),*) => {$(
        impl FlagRepr for $ty {
            type Bits = $bits;

            #[inline]
            fn to_bits(self) -> $bits {
                self as $bits
            }
        }
    )*};
}

impl_flag_repr!(
    u8 => u8, u16 => u16, u32 => u32, u64 => u64,
    i8 => u8, i16 => u16, i32 => u32, i64 => u64
);
