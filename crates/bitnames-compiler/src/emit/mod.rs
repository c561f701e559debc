//! Name table emission from partitioned flags.
//!
//! Concatenates flag names into one blob and records, per decode step, either
//! the name length or a gap sentinel with its skip count.

mod error;
mod name_table;


pub use error::EmitError;
pub use name_table::{MAX_NAME_LEN, NameTableBuilder};
