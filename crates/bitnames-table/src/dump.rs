//! Human-readable name table dump.
//!
//! ```text
//! [table]
//! type  = Gap
//! zero  = Zero
//! first = 0x4
//! names = 35 bytes
//!
//! [flags]
//!   2  Two
//!   3  Three
//!      ~ skip 1
//!   5  Five
//! ```

use std::fmt::Write as _;

use crate::table::EncodedTable;

/// Escape sequences wrapped around each part of a dump.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    /// Type names, the zero name and flag names.
    pub name: &'static str,
    /// Bit positions, masks and byte counts.
    pub number: &'static str,
    /// Section headers and gap markers.
    pub frame: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::PLAIN
    }
}

impl Colors {
    pub const ANSI: Self = Self {
        name: "\x1b[34m",
        number: "\x1b[32m",
        frame: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// No escapes; the dump is plain text.
    pub const PLAIN: Self = Self {
        name: "",
        number: "",
        frame: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ANSI } else { Self::PLAIN }
    }
}

/// Dump one table.
pub fn dump(table: &EncodedTable, colors: Colors) -> String {
    let c = colors;
    let mut out = String::new();

    writeln!(out, "{}[table]{}", c.frame, c.reset).unwrap();
    writeln!(out, "type  = {}{}{}", c.name, table.type_name, c.reset).unwrap();
    writeln!(out, "zero  = {}{}{}", c.name, table.zero_name, c.reset).unwrap();
    writeln!(out, "first = {}{:#x}{}", c.number, table.first_bit, c.reset).unwrap();
    writeln!(out, "names = {}{}{} bytes", c.number, table.names.len(), c.reset).unwrap();
    out.push('\n');

    writeln!(out, "{}[flags]{}", c.frame, c.reset).unwrap();
    let width = width_for_bit(table.last_bit());
    let mut skips = table.skips.iter();
    let mut flags = table.view::<u64>().flags();
    for &o in &table.offsets {
        if o == 0 {
            let skip = skips.next().copied().unwrap_or(0);
            writeln!(
                out,
                "{:width$}  {}~ skip {}{}",
                "",
                c.frame,
                skip,
                c.reset,
                width = width + 1
            )
            .unwrap();
            continue;
        }
        let Some((bit, name)) = flags.next() else {
            break;
        };
        writeln!(
            out,
            " {}{:>width$}{}  {}{}{}",
            c.number,
            bit,
            c.reset,
            c.name,
            name,
            c.reset,
            width = width
        )
        .unwrap();
    }

    out
}

/// Digits needed to print bit positions up to `last`.
fn width_for_bit(last: u32) -> usize {
    if last < 10 { 1 } else { 2 }
}
