//! Configuration types for Rust emission.

use bitnames_table::Strategy;

/// Where a type's table lives in generated code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Packaging {
    /// Named constants per type, decoded at the type's width.
    #[default]
    Specialized,
    /// A shared-runtime `Descriptor` per type, decoded at `u64`.
    Descriptor,
}

/// Configuration for Rust emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Table packaging
    pub(crate) packaging: Packaging,
    /// Cached or uncached decoding
    pub(crate) strategy: Strategy,
    /// Path of the runtime crate
    pub(crate) runtime: String,
    /// Expression yielding the raw value inside `fmt`
    pub(crate) value_expr: String,
    /// Arguments echoed in the header comment
    pub(crate) header_args: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            packaging: Packaging::default(),
            strategy: Strategy::default(),
            runtime: "::bitnames_table".to_string(),
            value_expr: "self.0".to_string(),
            header_args: String::new(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the table packaging.
    pub fn packaging(mut self, value: Packaging) -> Self {
        self.packaging = value;
        self
    }

    /// Set the decoding strategy.
    pub fn strategy(mut self, value: Strategy) -> Self {
        self.strategy = value;
        self
    }

    /// Set the path generated code uses for the runtime crate.
    pub fn runtime(mut self, path: impl Into<String>) -> Self {
        self.runtime = path.into();
        self
    }

    /// Set the expression that reads the raw value from `self`.
    pub fn value_expr(mut self, expr: impl Into<String>) -> Self {
        self.value_expr = expr.into();
        self
    }

    /// Set the command-line arguments shown in the header comment.
    pub fn header_args(mut self, args: impl Into<String>) -> Self {
        self.header_args = args.into();
        self
    }
}
