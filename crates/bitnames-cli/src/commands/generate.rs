use std::fs;
use std::path::PathBuf;

use bitnames_compiler::Generator;
use bitnames_compiler::codegen::rust::{Config, Packaging};
use bitnames_table::Strategy;

use super::manifest_loader::{load_flag_types, naming};

pub struct GenArgs {
    pub manifest: PathBuf,
    pub types: Vec<String>,
    pub trim_prefix: Option<String>,
    pub line_comment: bool,
    pub shared: bool,
    pub cached: bool,
    pub runtime: String,
    pub value_expr: String,
    pub output: Option<PathBuf>,
}

pub fn run(args: GenArgs) {
    let naming = naming(args.trim_prefix.as_deref(), args.line_comment);
    let types = match load_flag_types(&args.manifest, &args.types, &naming) {
        Ok(types) => types,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let generated = Generator::new(config(&args)).generate(&types);
    for failure in &generated.failures {
        eprintln!("error: {}: {}", failure.type_name, failure.error);
    }

    match &args.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &generated.source) {
                eprintln!("error: failed to write '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => print!("{}", generated.source),
    }

    if !generated.is_ok() {
        std::process::exit(1);
    }
}

pub(super) fn config(args: &GenArgs) -> Config {
    let packaging = if args.shared {
        Packaging::Descriptor
    } else {
        Packaging::Specialized
    };
    let strategy = if args.cached {
        Strategy::Cached
    } else {
        Strategy::Uncached
    };
    Config::new()
        .packaging(packaging)
        .strategy(strategy)
        .runtime(&args.runtime)
        .value_expr(&args.value_expr)
        .header_args(header_args(args))
}

/// Options echoed in the generated header, in a fixed order.
pub(super) fn header_args(args: &GenArgs) -> String {
    let mut out = String::from(" gen");
    if !args.types.is_empty() {
        out.push_str(&format!(" -t {}", args.types.join(",")));
    }
    if let Some(prefix) = &args.trim_prefix {
        out.push_str(&format!(" --trimprefix {prefix}"));
    }
    if args.line_comment {
        out.push_str(" --linecomment");
    }
    if args.shared {
        out.push_str(" --shared");
    }
    if !args.cached {
        out.push_str(" --nocache");
    }
    out
}
