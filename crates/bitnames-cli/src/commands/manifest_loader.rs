use std::io::{self, Read};
use std::path::Path;

use bitnames_compiler::manifest::{Manifest, ManifestError, Naming};
use bitnames_compiler::{FlagType, Result};
use tracing::debug;

/// Load a manifest from a file, or from stdin when `path` is `-`.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    if path.as_os_str() == "-" {
        return load_stdin();
    }
    let manifest = Manifest::load(path)?;
    debug!(
        "loaded {} types from {}",
        manifest.types.len(),
        path.display()
    );
    Ok(manifest)
}

fn load_stdin() -> Result<Manifest> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|source| ManifestError::Io {
            path: "<stdin>".to_string(),
            source,
        })?;
    Ok(Manifest::parse(&buf)?)
}

/// Build the naming options shared by every command.
pub fn naming(trim_prefix: Option<&str>, line_comment: bool) -> Naming {
    Naming::new()
        .trim_prefix(trim_prefix.unwrap_or_default())
        .line_comment(line_comment)
}

/// Load the manifest and convert the selected types.
pub fn load_flag_types(path: &Path, types: &[String], naming: &Naming) -> Result<Vec<FlagType>> {
    let manifest = load_manifest(path)?;
    Ok(manifest.flag_types(types, naming)?)
}
