//! Run partitioning.
//!
//! Turns the constants of one flag type into the zero-name candidate plus
//! maximal runs of consecutive single-bit flags, in ascending bit order.

use tracing::trace;

/// One candidate constant of a flag type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlagEntry {
    pub name: String,
    /// The constant reinterpreted as unsigned at its type's width.
    pub value: u64,
    /// Position of the constant in its declaration.
    pub decl_order: usize,
}

impl FlagEntry {
    pub fn new(name: impl Into<String>, value: u64, decl_order: usize) -> Self {
        Self {
            name: name.into(),
            value,
            decl_order,
        }
    }

    /// Bit position, when exactly one bit is set.
    pub fn bit(&self) -> Option<u32> {
        (self.value.count_ones() == 1).then(|| self.value.trailing_zeros())
    }
}

/// Flags at consecutive bit positions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Run {
    start: u32,
    entries: Vec<FlagEntry>,
}

impl Run {
    /// Bit position of the first flag.
    pub fn first_bit(&self) -> u32 {
        self.start
    }

    /// Bit position of the last flag.
    pub fn last_bit(&self) -> u32 {
        self.start + self.entries.len() as u32 - 1
    }

    pub fn entries(&self) -> &[FlagEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of [`partition`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Partition {
    /// First-declared zero-valued constant.
    pub zero: Option<FlagEntry>,
    /// Runs in ascending bit order; never adjacent.
    pub runs: Vec<Run>,
}

impl Partition {
    /// Number of flags across all runs.
    pub fn flag_count(&self) -> usize {
        self.runs.iter().map(Run::len).sum()
    }

    /// Number of gaps between runs.
    pub fn gap_count(&self) -> usize {
        self.runs.len().saturating_sub(1)
    }
}

/// Split constants into the zero candidate and runs of consecutive bits.
///
/// Constants with several bits set are dropped. When constants share a bit,
/// the first declared one keeps it.
pub fn partition(entries: impl IntoIterator<Item = FlagEntry>) -> Partition {
    let mut zero: Option<FlagEntry> = None;
    let mut flags: Vec<(u32, FlagEntry)> = Vec::new();

    for entry in entries {
        if entry.value == 0 {
            if zero.as_ref().is_none_or(|z| entry.decl_order < z.decl_order) {
                zero = Some(entry);
            }
            continue;
        }
        let Some(bit) = entry.bit() else {
            trace!("dropping {} ({:#x}): more than one bit set", entry.name, entry.value);
            continue;
        };
        flags.push((bit, entry));
    }

    flags.sort_by_key(|(bit, entry)| (*bit, entry.decl_order));
    flags.dedup_by(|(bit, entry), (kept_bit, kept)| {
        if bit != kept_bit {
            return false;
        }
        trace!("dropping {}: bit {} already named {}", entry.name, bit, kept.name);
        true
    });

    let mut runs: Vec<Run> = Vec::new();
    for (bit, entry) in flags {
        if let Some(run) = runs.last_mut().filter(|run| run.last_bit() + 1 == bit) {
            run.entries.push(entry);
            continue;
        }
        runs.push(Run {
            start: bit,
            entries: vec![entry],
        });
    }

    Partition { zero, runs }
}
