use bitnames_table::EncodedTable;
use tracing::trace;

use crate::emit::{EmitError, NameTableBuilder};
use crate::partition::{FlagEntry, partition};
use crate::repr::Repr;

/// A flag type and its constants in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlagType {
    pub name: String,
    pub repr: Repr,
    pub entries: Vec<FlagEntry>,
}

impl FlagType {
    pub fn new(name: impl Into<String>, repr: Repr) -> Self {
        Self {
            name: name.into(),
            repr,
            entries: Vec::new(),
        }
    }

    /// Declare the next constant.
    ///
    /// A value with bits above the type's width is kept here but never named:
    /// [`compile`](Self::compile) drops it.
    pub fn constant(mut self, name: impl Into<String>, value: u64) -> Self {
        let decl_order = self.entries.len();
        self.entries.push(FlagEntry::new(name, value, decl_order));
        self
    }

    /// Build the name table for this type.
    pub fn compile(&self) -> Result<EncodedTable, EmitError> {
        let mask = self.repr.mask();
        let fitting = self.entries.iter().filter(|entry| {
            let fits = entry.value & !mask == 0;
            if !fits {
                trace!("dropping {} ({:#x}): wider than {}", entry.name, entry.value, self.repr);
            }
            fits
        });
        let partition = partition(fitting.cloned());
        NameTableBuilder::build(&partition, &self.name)
    }
}
