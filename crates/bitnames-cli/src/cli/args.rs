//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Manifest file (positional).
pub fn manifest_arg() -> Arg {
    Arg::new("manifest")
        .value_name("MANIFEST")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Manifest file describing the flag types, or - for stdin")
}

/// Type selection (-t/--type), comma-separated and repeatable.
pub fn types_arg() -> Arg {
    Arg::new("types")
        .short('t')
        .long("type")
        .value_name("TYPE")
        .value_delimiter(',')
        .action(ArgAction::Append)
        .help("Comma-separated list of type names (default: every type)")
}

/// Single type (-t/--type), required.
pub fn type_arg() -> Arg {
    Arg::new("type")
        .short('t')
        .long("type")
        .value_name("TYPE")
        .required(true)
        .help("Type whose table decodes the masks")
}

/// Prefix to trim from names (--trimprefix).
pub fn trim_prefix_arg() -> Arg {
    Arg::new("trim_prefix")
        .long("trimprefix")
        .value_name("PREFIX")
        .help("Trim the prefix from the generated constant names")
}

/// Use comments as names (--linecomment).
pub fn line_comment_arg() -> Arg {
    Arg::new("line_comment")
        .long("linecomment")
        .action(ArgAction::SetTrue)
        .help("Use line comment text as printed text when present")
}

/// Descriptor packaging (--shared).
pub fn shared_arg() -> Arg {
    Arg::new("shared")
        .long("shared")
        .action(ArgAction::SetTrue)
        .help("Emit one shared-runtime descriptor per type instead of specialized tables")
}

/// Disable caching (--nocache).
pub fn nocache_arg() -> Arg {
    Arg::new("nocache")
        .long("nocache")
        .action(ArgAction::SetTrue)
        .help("Do not cache decoded strings")
}

/// Runtime crate path (--runtime).
pub fn runtime_arg() -> Arg {
    Arg::new("runtime")
        .long("runtime")
        .value_name("PATH")
        .default_value("::bitnames_table")
        .help("Path generated code uses for the runtime crate")
}

/// Raw value expression (--value).
pub fn value_arg() -> Arg {
    Arg::new("value")
        .long("value")
        .value_name("EXPR")
        .default_value("self.0")
        .help("Expression reading the raw value inside `fmt`")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Masks to decode (positional, one or more).
pub fn masks_arg() -> Arg {
    Arg::new("masks")
        .value_name("MASK")
        .value_parser(parse_mask)
        .num_args(1..)
        .required(true)
        .help("Masks to decode, decimal or 0x-prefixed hex")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Verbosity level (-v, -vv, -vvv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Verbosity level (-v info, -vv debug, -vvv trace)")
}

/// Parse `42` or `0x2a`.
fn parse_mask(s: &str) -> Result<u64, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16),
        None => s.replace('_', "").parse(),
    };
    parsed.map_err(|e| format!("invalid mask '{}': {}", s, e))
}
