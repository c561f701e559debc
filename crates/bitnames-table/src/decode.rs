//! Mask-to-string decoding.
//!
//! [`mstring`] is the only decoder: specialized stringers and descriptors both
//! call it. Gap-free tables take a loop that never looks at sentinels.
//!
//! # Panics
//! Decoding a table that fails [`Table::check`](crate::Table::check) may panic
//! on an out-of-range slice. Every table produced by the compiler is valid.

use crate::bits::Bits;
use crate::table::Table;

/// Render `mask` as a combination of the table's flag names.
///
/// - the empty mask renders as the zero name
/// - a single known flag renders bare: `Wednesday`
/// - several flags render in ascending bit order: `(Monday|Sunday)`
/// - bits without a name render as `Type(0x..)`, joined with any matched names
pub fn mstring<M: Bits>(table: &Table<'_, M>, mask: M) -> String {
    if mask == M::ZERO {
        return table.zero_name().to_string();
    }
    if table.is_contiguous() {
        decode_contiguous(table, mask)
    } else {
        decode_gapped(table, mask)
    }
}

fn decode_contiguous<M: Bits>(table: &Table<'_, M>, mut mask: M) -> String {
    let names = table.names();
    let mut out = Joiner::default();
    let mut v = table.first();
    let mut p1 = 0usize;

    for &o in table.offsets() {
        let p0 = p1;
        p1 += usize::from(o);
        if v & mask != M::ZERO {
            mask ^= v;
            out.push(&names[p0..p1]);
            if mask == M::ZERO {
                return out.finish();
            }
        }
        v = v.shl(1);
    }

    out.finish_with_remainder(table.type_name(), mask)
}

fn decode_gapped<M: Bits>(table: &Table<'_, M>, mut mask: M) -> String {
    let names = table.names();
    let skips = table.skips();
    let mut out = Joiner::default();
    let mut v = table.first();
    let mut si = 0usize;
    let mut p1 = 0usize;

    for &o in table.offsets() {
        if o == 0 {
            // One of the skip's shifts is the per-step shift below.
            v = v.shl(u32::from(skips[si]).wrapping_sub(1));
            si += 1;
        } else {
            let p0 = p1;
            p1 += usize::from(o);
            if v & mask != M::ZERO {
                mask ^= v;
                out.push(&names[p0..p1]);
                if mask == M::ZERO {
                    return out.finish();
                }
            }
        }
        v = v.shl(1);
    }

    out.finish_with_remainder(table.type_name(), mask)
}

/// Accumulates matched names.
///
/// The buffer always starts with `(`; a lone match drops it again.
#[derive(Default)]
struct Joiner {
    buf: String,
    matched: usize,
}

impl Joiner {
    fn push(&mut self, name: &str) {
        self.buf.push(if self.matched == 0 { '(' } else { '|' });
        self.buf.push_str(name);
        self.matched += 1;
    }

    /// Every bit of the mask was named.
    fn finish(mut self) -> String {
        if self.matched == 1 {
            self.buf.remove(0);
            return self.buf;
        }
        self.buf.push(')');
        self.buf
    }

    /// `rest` holds bits no flag names.
    fn finish_with_remainder<M: Bits>(mut self, type_name: &str, rest: M) -> String {
        let rest = format!("{type_name}(0x{rest:x})");
        if self.matched == 0 {
            return rest;
        }
        self.buf.push('|');
        self.buf.push_str(&rest);
        self.buf.push(')');
        self.buf
    }
}
