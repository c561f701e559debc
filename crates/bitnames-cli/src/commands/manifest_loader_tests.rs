use std::fs;

use bitnames_compiler::Error;
use bitnames_compiler::manifest::ManifestError;
use indoc::indoc;

use super::manifest_loader::{load_flag_types, load_manifest, naming};

const MANIFEST: &str = indoc! {r#"
    {
      "types": [
        {
          "name": "Days",
          "repr": "u8",
          "constants": [
            { "name": "DayMonday", "value": 1, "comment": "Mon" },
            { "name": "DayTuesday", "value": 2 }
          ]
        }
      ]
    }
"#};

#[test]
fn load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flags.json");
    fs::write(&path, MANIFEST).unwrap();

    let manifest = load_manifest(&path).unwrap();
    assert_eq!(manifest.types.len(), 1);
}

#[test]
fn load_types_with_naming() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flags.json");
    fs::write(&path, MANIFEST).unwrap();

    let types = load_flag_types(&path, &[], &naming(Some("Day"), true)).unwrap();
    let names: Vec<&str> = types[0].entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Mon", "Tuesday"]);
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_manifest(&dir.path().join("missing.json")).unwrap_err();

    assert!(matches!(err, Error::Manifest(ManifestError::Io { .. })));
}

#[test]
fn unknown_type() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flags.json");
    fs::write(&path, MANIFEST).unwrap();

    let err = load_flag_types(&path, &["Gap".to_string()], &naming(None, false)).unwrap_err();
    assert_eq!(err.to_string(), "no type named Gap in manifest");
}
