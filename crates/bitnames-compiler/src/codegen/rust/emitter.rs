//! Core emitter struct and main emit logic.

use std::collections::BTreeSet;

use bitnames_table::EncodedTable;

use super::{Config, Packaging};
use crate::repr::Repr;

/// Rust emitter for a batch of flag types.
pub struct Emitter {
    pub(super) config: Config,
    /// Item prefixes already used (for collision avoidance)
    pub(super) used_prefixes: BTreeSet<String>,
    /// Output buffer
    pub(super) output: String,
}

impl Emitter {
    pub fn new(config: Config) -> Self {
        let mut emitter = Self {
            config,
            used_prefixes: BTreeSet::new(),
            output: String::new(),
        };
        emitter.emit_header();
        emitter
    }

    /// Emit the table and `Display` implementation of one type.
    ///
    /// `repr` is the declared representation of the newtype's field.
    pub fn emit_type(&mut self, table: &EncodedTable, repr: Repr) {
        let prefix = self.item_prefix(&table.type_name);
        match self.config.packaging {
            Packaging::Specialized => self.emit_specialized(&prefix, table, repr),
            Packaging::Descriptor => self.emit_descriptor(&prefix, table),
        }
    }

    /// Finish emission and return the generated source.
    pub fn finish(mut self) -> String {
        // Ensure exactly one trailing newline
        self.output.truncate(self.output.trim_end().len());
        self.output.push('\n');
        self.output
    }
}
