//! Source generation from encoded name tables.

pub mod rust;
