//! Encoded name table format.
//!
//! A table stores every flag name of one type in ascending bit order:
//! - `names`: the names concatenated into one blob
//! - `offsets`: one entry per decode step, either a name's byte length or `0`
//!   marking a gap between two runs of consecutive bits
//! - `skips`: one entry per gap, the extra shifts needed to cross it plus one
//! - `first`: the bit of the lowest named flag
//!
//! Gap-free tables carry no skips at all and decode without sentinel checks.

use crate::bits::Bits;

/// Name table invariant violation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("offsets cover {offsets} bytes, name blob has {names}")]
    NameLengthMismatch { offsets: usize, names: usize },
    #[error("{sentinels} gap sentinels but {skips} skips")]
    SkipCountMismatch { sentinels: usize, skips: usize },
    #[error("skip {index} is zero")]
    ZeroSkip { index: usize },
    #[error("first bit {0:#x} must have exactly one bit set")]
    FirstBitNotSingle(u64),
    #[error("name at byte {offset} does not start on a character boundary")]
    NotCharBoundary { offset: usize },
    #[error("table names no flags")]
    Empty,
}

/// Borrowed view of a name table at mask width `M`.
///
/// Constructible in `const` context so generated code can embed tables in
/// `static` items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Table<'a, M> {
    type_name: &'a str,
    zero_name: &'a str,
    names: &'a str,
    offsets: &'a [u8],
    skips: &'a [u8],
    first: M,
}

impl<'a, M: Bits> Table<'a, M> {
    /// Create a table with gaps between its runs.
    pub const fn new(
        type_name: &'a str,
        zero_name: &'a str,
        names: &'a str,
        offsets: &'a [u8],
        skips: &'a [u8],
        first: M,
    ) -> Self {
        Self {
            type_name,
            zero_name,
            names,
            offsets,
            skips,
            first,
        }
    }

    /// Create a table whose flags form a single run.
    pub const fn contiguous(
        type_name: &'a str,
        zero_name: &'a str,
        names: &'a str,
        offsets: &'a [u8],
        first: M,
    ) -> Self {
        Self::new(type_name, zero_name, names, offsets, &[], first)
    }

    pub fn type_name(&self) -> &'a str {
        self.type_name
    }

    /// Display string for the empty mask.
    pub fn zero_name(&self) -> &'a str {
        self.zero_name
    }

    pub fn names(&self) -> &'a str {
        self.names
    }

    pub fn offsets(&self) -> &'a [u8] {
        self.offsets
    }

    pub fn skips(&self) -> &'a [u8] {
        self.skips
    }

    pub fn first(&self) -> M {
        self.first
    }

    /// Whether every flag sits in one run of consecutive bits.
    pub fn is_contiguous(&self) -> bool {
        self.skips.is_empty()
    }

    /// Iterate `(bit position, name)` pairs in ascending bit order.
    pub fn flags(&self) -> Flags<'a> {
        Flags {
            names: self.names,
            offsets: self.offsets.iter(),
            skips: self.skips.iter(),
            bit: self.first.to_u64().trailing_zeros(),
            cursor: 0,
        }
    }

    /// Validate the table invariants.
    ///
    /// Tables built by the compiler always pass; this is for tables assembled
    /// by hand.
    pub fn check(&self) -> Result<(), TableError> {
        let first = self.first.to_u64();
        if first.count_ones() != 1 {
            return Err(TableError::FirstBitNotSingle(first));
        }

        let mut covered = 0usize;
        let mut sentinels = 0usize;
        for &o in self.offsets {
            if o == 0 {
                sentinels += 1;
                continue;
            }
            if !self.names.is_char_boundary(covered) {
                return Err(TableError::NotCharBoundary { offset: covered });
            }
            covered += usize::from(o);
        }

        if covered == 0 {
            return Err(TableError::Empty);
        }
        if covered != self.names.len() {
            return Err(TableError::NameLengthMismatch {
                offsets: covered,
                names: self.names.len(),
            });
        }
        if sentinels != self.skips.len() {
            return Err(TableError::SkipCountMismatch {
                sentinels,
                skips: self.skips.len(),
            });
        }
        if let Some(index) = self.skips.iter().position(|&s| s == 0) {
            return Err(TableError::ZeroSkip { index });
        }
        Ok(())
    }
}

/// Iterator over the named flags of a table.
#[derive(Clone, Debug)]
pub struct Flags<'a> {
    names: &'a str,
    offsets: std::slice::Iter<'a, u8>,
    skips: std::slice::Iter<'a, u8>,
    bit: u32,
    cursor: usize,
}

impl<'a> Iterator for Flags<'a> {
    type Item = (u32, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let o = usize::from(*self.offsets.next()?);
            if o == 0 {
                let skip = self.skips.next().copied().unwrap_or(1);
                self.bit += u32::from(skip);
                continue;
            }
            let start = self.cursor;
            self.cursor += o;
            let bit = self.bit;
            self.bit += 1;
            return Some((bit, &self.names[start..self.cursor]));
        }
    }
}

/// Owned name table, as produced by the compiler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedTable {
    pub type_name: String,
    pub zero_name: String,
    pub names: String,
    pub offsets: Vec<u8>,
    pub skips: Vec<u8>,
    /// `1 << bit` of the lowest named flag.
    pub first_bit: u64,
}

impl EncodedTable {
    /// Borrow the table at mask width `M`.
    ///
    /// `first_bit` is truncated to `M`; callers pick a width that holds every
    /// flag of the type.
    pub fn view<M: Bits>(&self) -> Table<'_, M> {
        Table::new(
            &self.type_name,
            &self.zero_name,
            &self.names,
            &self.offsets,
            &self.skips,
            M::from_u64(self.first_bit),
        )
    }

    /// Number of named flags.
    pub fn flag_count(&self) -> usize {
        self.offsets.iter().filter(|&&o| o != 0).count()
    }

    /// Number of gaps between runs.
    pub fn gap_count(&self) -> usize {
        self.skips.len()
    }

    pub fn is_contiguous(&self) -> bool {
        self.skips.is_empty()
    }

    /// Bit position of the highest named flag.
    pub fn last_bit(&self) -> u32 {
        self.view::<u64>()
            .flags()
            .last()
            .map_or(self.first_bit.trailing_zeros(), |(bit, _)| bit)
    }

    pub fn check(&self) -> Result<(), TableError> {
        self.view::<u64>().check()
    }
}
