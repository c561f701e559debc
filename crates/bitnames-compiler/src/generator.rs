//! Batch generation facade.

use bitnames_table::EncodedTable;
use tracing::{info, warn};

use crate::codegen::rust::{Config, Emitter};
use crate::emit::EmitError;
use crate::flag_type::FlagType;

/// A type that could not be encoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Failure {
    pub type_name: String,
    pub error: EmitError,
}

/// Output of [`Generator::generate`].
#[derive(Clone, Debug)]
pub struct Generated {
    /// Rust source for every type that compiled.
    pub source: String,
    /// Tables of the types in `source`, in input order.
    pub tables: Vec<EncodedTable>,
    /// Types left out of `source`.
    pub failures: Vec<Failure>,
}

impl Generated {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Compiles flag types and renders them into one Rust source file.
#[derive(Clone, Debug, Default)]
pub struct Generator {
    config: Config,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Compile every type. A type that fails is reported and skipped; the
    /// rest are still generated.
    pub fn generate(&self, types: &[FlagType]) -> Generated {
        let mut emitter = Emitter::new(self.config.clone());
        let mut tables = Vec::with_capacity(types.len());
        let mut failures = Vec::new();

        for ty in types {
            match ty.compile() {
                Ok(table) => {
                    emitter.emit_type(&table, ty.repr);
                    tables.push(table);
                }
                Err(error) => {
                    warn!("skipping {}: {}", ty.name, error);
                    failures.push(Failure {
                        type_name: ty.name.clone(),
                        error,
                    });
                }
            }
        }

        info!(
            "generated {} of {} types",
            tables.len(),
            types.len()
        );

        Generated {
            source: emitter.finish(),
            tables,
            failures,
        }
    }
}
