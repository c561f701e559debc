//! Bitnames compiler: flag partitioning, name table emission, and codegen.
//!
//! This crate provides the compilation pipeline for bitflag types:
//! - `partition` - split single-bit constants into runs of consecutive bits
//! - `emit` - encode runs into a name table
//! - `manifest` - JSON description of flag types and their constants
//! - `codegen` - Rust `Display` implementations over the encoded tables
//! - `Generator` - the whole pipeline for a batch of types

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod codegen;
pub mod emit;
mod flag_type;
mod generator;
pub mod manifest;
pub mod partition;
mod repr;

#[cfg(test)]
mod generator_tests;
#[cfg(test)]
mod partition_tests;

pub use emit::{EmitError, NameTableBuilder};
pub use flag_type::FlagType;
pub use generator::{Failure, Generated, Generator};
pub use manifest::ManifestError;
pub use partition::{FlagEntry, Partition, Run, partition};
pub use repr::Repr;

/// Errors that can occur while compiling flag types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

/// Result type for compiler operations.
pub type Result<T> = std::result::Result<T, Error>;
