use std::path::PathBuf;

use bitnames_table::Stringer;

use super::manifest_loader::{load_flag_types, naming};

pub struct DecodeArgs {
    pub manifest: PathBuf,
    pub type_name: String,
    pub trim_prefix: Option<String>,
    pub line_comment: bool,
    pub masks: Vec<u64>,
}

pub fn run(args: DecodeArgs) {
    let naming = naming(args.trim_prefix.as_deref(), args.line_comment);
    let types = match load_flag_types(&args.manifest, &[args.type_name.clone()], &naming) {
        Ok(types) => types,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    let Some(ty) = types.first() else {
        eprintln!("error: no type named {}", args.type_name);
        std::process::exit(1);
    };

    let table = match ty.compile() {
        Ok(table) => table,
        Err(e) => {
            eprintln!("error: {}: {}", ty.name, e);
            std::process::exit(1);
        }
    };

    let stringer = Stringer::cached(table.view::<u64>());
    for &mask in &args.masks {
        if mask & !ty.repr.mask() != 0 {
            eprintln!("error: mask {:#x} does not fit {}", mask, ty.repr);
            std::process::exit(1);
        }
        println!("{}", stringer.mstring(mask));
    }
}
