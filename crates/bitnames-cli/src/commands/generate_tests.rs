use std::path::PathBuf;

use bitnames_compiler::Generator;

use super::generate::{GenArgs, config, header_args};

fn args() -> GenArgs {
    GenArgs {
        manifest: PathBuf::from("flags.json"),
        types: Vec::new(),
        trim_prefix: None,
        line_comment: false,
        shared: false,
        cached: true,
        runtime: "::bitnames_table".to_string(),
        value_expr: "self.0".to_string(),
        output: None,
    }
}

#[test]
fn header_for_defaults() {
    assert_eq!(header_args(&args()), " gen");
}

#[test]
fn header_lists_options() {
    let args = GenArgs {
        types: vec!["Days".to_string(), "Gap".to_string()],
        trim_prefix: Some("Day".to_string()),
        line_comment: true,
        shared: true,
        cached: false,
        ..args()
    };

    assert_eq!(
        header_args(&args),
        " gen -t Days,Gap --trimprefix Day --linecomment --shared --nocache"
    );
}

#[test]
fn config_follows_flags() {
    let args = GenArgs {
        shared: true,
        cached: false,
        runtime: "rt".to_string(),
        ..args()
    };
    let generated = Generator::new(config(&args)).generate(&[]);

    assert_eq!(
        generated.source,
        "// Code generated by bitnames gen --shared --nocache; DO NOT EDIT.\n"
    );
}
