use std::path::PathBuf;

use bitnames_table::{Colors, dump};

use super::manifest_loader::{load_flag_types, naming};

pub struct DumpArgs {
    pub manifest: PathBuf,
    pub types: Vec<String>,
    pub trim_prefix: Option<String>,
    pub line_comment: bool,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let naming = naming(args.trim_prefix.as_deref(), args.line_comment);
    let types = match load_flag_types(&args.manifest, &args.types, &naming) {
        Ok(types) => types,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let colors = Colors::new(args.color);
    let mut failed = false;
    let mut first = true;
    for ty in &types {
        match ty.compile() {
            Ok(table) => {
                if !first {
                    println!();
                }
                first = false;
                print!("{}", dump(&table, colors));
            }
            Err(e) => {
                eprintln!("error: {}: {}", ty.name, e);
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
}
