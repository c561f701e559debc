//! JSON manifest describing flag types.
//!
//! ```json
//! {
//!   "types": [
//!     {
//!       "name": "Gap",
//!       "repr": "i32",
//!       "constants": [
//!         { "name": "Zero", "value": 0 },
//!         { "name": "Two", "value": 4, "comment": "two" }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! `repr` defaults to `u64`. Constants keep their array order as declaration
//! order.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::flag_type::FlagType;
use crate::repr::Repr;

/// Errors from loading a manifest or turning it into flag types.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("invalid manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot read {path}: {source}")]
    Io { path: String, source: io::Error },

    #[error("constant {type_name}.{name} = {value} does not fit {repr}")]
    ValueOutOfRange {
        type_name: String,
        name: String,
        value: ConstValue,
        repr: Repr,
    },

    #[error("type {0} declares no constants")]
    NoValues(String),

    #[error("no type named {0} in manifest")]
    UnknownType(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub types: Vec<TypeDecl>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeDecl {
    pub name: String,
    #[serde(default)]
    pub repr: Repr,
    #[serde(default)]
    pub constants: Vec<ConstDecl>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstDecl {
    pub name: String,
    pub value: ConstValue,
    /// Trailing line comment of the declaration.
    #[serde(default)]
    pub comment: Option<String>,
}

/// A JSON integer constant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ConstValue {
    Unsigned(u64),
    Signed(i64),
}

impl fmt::Display for ConstValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstValue::Unsigned(v) => write!(f, "{v}"),
            ConstValue::Signed(v) => write!(f, "{v}"),
        }
    }
}

/// How constant names become display names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Naming {
    pub(crate) trim_prefix: String,
    pub(crate) line_comment: bool,
}

impl Naming {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix removed from every name.
    pub fn trim_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.trim_prefix = prefix.into();
        self
    }

    /// Set whether a declaration's comment replaces its name.
    pub fn line_comment(mut self, value: bool) -> Self {
        self.line_comment = value;
        self
    }

    /// Display name of one constant.
    ///
    /// The comment (if enabled and non-blank) replaces the name, then the
    /// prefix is trimmed. A name that is nothing but the prefix is kept whole.
    pub fn display_name(&self, decl: &ConstDecl) -> String {
        let name = match decl.comment.as_deref().map(str::trim) {
            Some(comment) if self.line_comment && !comment.is_empty() => comment,
            _ => decl.name.as_str(),
        };
        match name.strip_prefix(self.trim_prefix.as_str()) {
            Some(rest) if !rest.is_empty() => rest.to_string(),
            _ => name.to_string(),
        }
    }
}

impl Manifest {
    pub fn parse(source: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&source)
    }

    pub fn get(&self, name: &str) -> Option<&TypeDecl> {
        self.types.iter().find(|ty| ty.name == name)
    }

    /// Types named in `names`, once each, in the order given.
    ///
    /// An empty `names` selects every type in manifest order.
    pub fn select(&self, names: &[String]) -> Result<Vec<&TypeDecl>, ManifestError> {
        if names.is_empty() {
            return Ok(self.types.iter().collect());
        }
        let mut selected: Vec<&TypeDecl> = Vec::with_capacity(names.len());
        for name in names {
            let ty = self
                .get(name)
                .ok_or_else(|| ManifestError::UnknownType(name.clone()))?;
            if !selected.iter().any(|s| s.name == ty.name) {
                selected.push(ty);
            }
        }
        Ok(selected)
    }

    /// Convert the selected types, applying `naming` to every constant.
    pub fn flag_types(
        &self,
        names: &[String],
        naming: &Naming,
    ) -> Result<Vec<FlagType>, ManifestError> {
        self.select(names)?
            .into_iter()
            .map(|ty| ty.to_flag_type(naming))
            .collect()
    }
}

impl TypeDecl {
    pub fn to_flag_type(&self, naming: &Naming) -> Result<FlagType, ManifestError> {
        if self.constants.is_empty() {
            return Err(ManifestError::NoValues(self.name.clone()));
        }

        let mut ty = FlagType::new(&self.name, self.repr);
        for decl in &self.constants {
            let value =
                self.repr
                    .to_bits(decl.value)
                    .ok_or_else(|| ManifestError::ValueOutOfRange {
                        type_name: self.name.clone(),
                        name: decl.name.clone(),
                        value: decl.value,
                        repr: self.repr,
                    })?;
            ty = ty.constant(naming.display_name(decl), value);
        }
        Ok(ty)
    }
}
