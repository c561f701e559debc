//! Rust `Display` implementations for bitflag newtypes.
//!
//! Two packagings are supported:
//! - `Specialized`: per-type constants for the name blob, offsets and skips,
//!   decoded at the type's own unsigned width
//! - `Descriptor`: one `Descriptor` value per type with inline table data,
//!   decoded at `u64`
//!
//! Either way the generated code calls into the runtime crate's decoder.

mod config;
mod emitter;
mod naming;
mod render;

#[cfg(test)]
mod emit_tests;

pub use config::{Config, Packaging};
pub use emitter::Emitter;
