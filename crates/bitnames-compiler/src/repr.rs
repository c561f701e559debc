use std::fmt;

use serde::Deserialize;

use crate::manifest::ConstValue;

/// Declared integer representation of a flag type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Repr {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    #[default]
    U64,
}

impl Repr {
    pub fn width(self) -> u32 {
        match self {
            Repr::I8 | Repr::U8 => 8,
            Repr::I16 | Repr::U16 => 16,
            Repr::I32 | Repr::U32 => 32,
            Repr::I64 | Repr::U64 => 64,
        }
    }

    pub fn is_signed(self) -> bool {
        matches!(self, Repr::I8 | Repr::I16 | Repr::I32 | Repr::I64)
    }

    /// Rust name of the declared type.
    pub fn name(self) -> &'static str {
        match self {
            Repr::I8 => "i8",
            Repr::I16 => "i16",
            Repr::I32 => "i32",
            Repr::I64 => "i64",
            Repr::U8 => "u8",
            Repr::U16 => "u16",
            Repr::U32 => "u32",
            Repr::U64 => "u64",
        }
    }

    /// Rust name of the unsigned type of the same width, used as the mask type.
    pub fn bits_name(self) -> &'static str {
        match self.width() {
            8 => "u8",
            16 => "u16",
            32 => "u32",
            _ => "u64",
        }
    }

    /// All ones at this width.
    pub fn mask(self) -> u64 {
        u64::MAX >> (64 - self.width())
    }

    /// Reinterpret `value` as unsigned at this width.
    ///
    /// Returns `None` when the value does not fit the representation.
    pub fn to_bits(self, value: ConstValue) -> Option<u64> {
        let shift = 64 - self.width();
        match value {
            ConstValue::Unsigned(v) if self.is_signed() => {
                (v <= (i64::MAX >> shift) as u64).then_some(v)
            }
            ConstValue::Unsigned(v) => (v <= self.mask()).then_some(v),
            ConstValue::Signed(v) if self.is_signed() => {
                let range = (i64::MIN >> shift)..=(i64::MAX >> shift);
                range.contains(&v).then_some(v as u64 & self.mask())
            }
            ConstValue::Signed(v) => u64::try_from(v).ok().filter(|&v| v <= self.mask()),
        }
    }
}

impl fmt::Display for Repr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
