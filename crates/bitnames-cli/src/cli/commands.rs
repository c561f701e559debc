//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("bitnames")
        .about("Readable names for bitflag masks")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(gen_command())
        .subcommand(dump_command())
        .subcommand(decode_command())
}

/// Generate `Display` implementations.
pub fn gen_command() -> Command {
    Command::new("gen")
        .about("Generate Display implementations for flag types")
        .override_usage(
            "\
  bitnames gen <MANIFEST> [-t <TYPE>[,<TYPE>...]] [-o <FILE>]
  bitnames gen <MANIFEST> --shared [--nocache]",
        )
        .after_help(
            r#"EXAMPLES:
  bitnames gen flags.json                     # every type, to stdout
  bitnames gen flags.json -t Days,Gap         # selected types
  bitnames gen flags.json --trimprefix Day    # MondayDay -> Monday
  bitnames gen flags.json --shared -o out.rs  # descriptor tables, to file"#,
        )
        .arg(manifest_arg())
        .arg(types_arg())
        .arg(trim_prefix_arg())
        .arg(line_comment_arg())
        .arg(shared_arg())
        .arg(nocache_arg())
        .arg(runtime_arg())
        .arg(value_arg())
        .arg(output_file_arg())
}

/// Show encoded name tables.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show encoded name tables")
        .after_help(
            r#"EXAMPLES:
  bitnames dump flags.json             # every type
  bitnames dump flags.json -t Gap      # one type"#,
        )
        .arg(manifest_arg())
        .arg(types_arg())
        .arg(trim_prefix_arg())
        .arg(line_comment_arg())
        .arg(color_arg())
}

/// Decode masks through a type's table.
pub fn decode_command() -> Command {
    Command::new("decode")
        .about("Decode masks into flag names")
        .after_help(
            r#"EXAMPLES:
  bitnames decode flags.json -t Days 65        # (Monday|Sunday)
  bitnames decode flags.json -t Gap 0x10 0x4   # Gap(0x10), Two"#,
        )
        .arg(manifest_arg())
        .arg(type_arg())
        .arg(trim_prefix_arg())
        .arg(line_comment_arg())
        .arg(masks_arg())
}
