//! Name table builder.

use bitnames_table::EncodedTable;
use tracing::debug;

use crate::partition::{Partition, Run};

use super::EmitError;

/// Longest name an offset entry can hold.
pub const MAX_NAME_LEN: usize = u8::MAX as usize;

/// Builds the name blob, offsets and skips of one type, run by run.
#[derive(Debug, Default)]
pub struct NameTableBuilder {
    names: String,
    offsets: Vec<u8>,
    skips: Vec<u8>,
    /// Bit of the first flag pushed.
    first: Option<u32>,
    /// Bit of the last flag pushed.
    last: Option<u32>,
}

impl NameTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode a partition into a table for `type_name`.
    ///
    /// The zero name falls back to `{type_name}(0)` when the type declares no
    /// zero-valued constant.
    pub fn build(partition: &Partition, type_name: &str) -> Result<EncodedTable, EmitError> {
        let mut builder = Self::new();
        for run in &partition.runs {
            builder.push_run(run)?;
        }

        let zero_name = match &partition.zero {
            Some(zero) => zero.name.clone(),
            None => format!("{type_name}(0)"),
        };
        builder.finish(type_name, zero_name)
    }

    /// Append a run, separated from the previous one by a gap.
    ///
    /// Runs must be pushed in ascending bit order.
    pub fn push_run(&mut self, run: &Run) -> Result<(), EmitError> {
        if let Some(last) = self.last {
            debug_assert!(run.first_bit() > last + 1, "runs must not touch");
            self.offsets.push(0);
            self.skips.push((run.first_bit() - last - 1) as u8);
        }
        for (bit, entry) in (run.first_bit()..).zip(run.entries()) {
            self.push_name(bit, &entry.name)?;
        }
        self.first.get_or_insert(run.first_bit());
        self.last = Some(run.last_bit());
        Ok(())
    }

    fn push_name(&mut self, bit: u32, name: &str) -> Result<(), EmitError> {
        if name.is_empty() {
            return Err(EmitError::EmptyName { bit });
        }
        let len = u8::try_from(name.len()).map_err(|_| EmitError::EncodingTooLarge {
            name: name.to_string(),
            len: name.len(),
        })?;
        self.names.push_str(name);
        self.offsets.push(len);
        Ok(())
    }

    /// Number of flags pushed so far.
    pub fn len(&self) -> usize {
        self.offsets.len() - self.skips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    pub fn finish(
        self,
        type_name: &str,
        zero_name: impl Into<String>,
    ) -> Result<EncodedTable, EmitError> {
        let Some(first) = self.first else {
            return Err(EmitError::NoFlags {
                type_name: type_name.to_string(),
            });
        };

        debug!(
            "{}: {} flags, {} gaps, {} name bytes",
            type_name,
            self.len(),
            self.skips.len(),
            self.names.len()
        );

        let table = EncodedTable {
            type_name: type_name.to_string(),
            zero_name: zero_name.into(),
            names: self.names,
            offsets: self.offsets,
            skips: self.skips,
            first_bit: 1 << first,
        };
        debug_assert_eq!(table.check(), Ok(()), "builder produced an invalid table");
        Ok(table)
    }
}
