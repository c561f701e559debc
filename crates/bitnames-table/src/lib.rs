//! Encoded name tables and mask decoding for bitflag types.
//!
//! This crate contains:
//! - The name table format (`Table`, `EncodedTable`) and its invariants
//! - The mask decoder shared by every generated type (`decode::mstring`)
//! - The bounded memoizing cache (`DecodeCache`) and the `Stringer` wrapper
//! - The shared `Descriptor` packaging and human-readable dumps

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod bits;
pub mod cache;
pub mod decode;
pub mod descriptor;
pub mod dump;
pub mod stringer;
pub mod table;


pub use bits::{Bits, FlagRepr};
pub use cache::{CACHE_CAPACITY, DecodeCache};
pub use decode::mstring;
pub use descriptor::Descriptor;
pub use dump::{Colors, dump};
pub use stringer::{Strategy, Stringer};
pub use table::{EncodedTable, Table, TableError};
