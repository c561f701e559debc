//! Output rendering methods.

use bitnames_table::{EncodedTable, Strategy};

use super::Emitter;
use crate::repr::Repr;

impl Emitter {
    pub(super) fn emit_header(&mut self) {
        self.output.push_str(&format!(
            "// Code generated by bitnames{}; DO NOT EDIT.\n\n",
            self.config.header_args
        ));
    }

    pub(super) fn emit_specialized(&mut self, prefix: &str, table: &EncodedTable, repr: Repr) {
        let rt = self.config.runtime.clone();

        self.output.push_str(&format!(
            "const {prefix}_NAME: &str = {:?};\n",
            table.names
        ));
        self.output.push_str(&format!(
            "const {prefix}_OFFSET: [u8; {}] = [{}];\n",
            table.offsets.len(),
            join(&table.offsets)
        ));
        if !table.is_contiguous() {
            self.output.push_str(&format!(
                "const {prefix}_SKIPS: [u8; {}] = [{}];\n",
                table.skips.len(),
                join(&table.skips)
            ));
        }
        self.output.push('\n');

        let skips = if table.is_contiguous() {
            String::new()
        } else {
            format!("        &{prefix}_SKIPS,\n")
        };
        self.emit_stringer(
            prefix,
            &format!("{rt}::Stringer<'static, {}>", repr.bits_name()),
            &format!("{rt}::Stringer"),
            table,
            &format!("        {prefix}_NAME,\n        &{prefix}_OFFSET,\n{skips}"),
        );

        let value = format!("{rt}::FlagRepr::to_bits({})", self.config.value_expr);
        self.emit_display(&table.type_name, &format!("{prefix}_STRINGER.mstring({value})"));
    }

    pub(super) fn emit_descriptor(&mut self, prefix: &str, table: &EncodedTable) {
        let rt = self.config.runtime.clone();

        let skips = if table.is_contiguous() {
            String::new()
        } else {
            format!("        &[{}],\n", join(&table.skips))
        };
        self.emit_stringer(
            prefix,
            &format!("{rt}::Descriptor"),
            &format!("{rt}::Descriptor"),
            table,
            &format!(
                "        {:?},\n        &[{}],\n{skips}",
                table.names,
                join(&table.offsets)
            ),
        );

        let call = format!(
            "{prefix}_STRINGER.mstring_widened({})",
            self.config.value_expr
        );
        self.emit_display(&table.type_name, &call);
    }

    /// Emit `static {prefix}_STRINGER` built from `data` (the table arguments
    /// between the zero name and the first bit).
    fn emit_stringer(
        &mut self,
        prefix: &str,
        ty: &str,
        ctor_path: &str,
        table: &EncodedTable,
        data: &str,
    ) {
        let rt = &self.config.runtime;
        let ctor = match self.config.strategy {
            Strategy::Cached => "cached",
            Strategy::Uncached => "uncached",
        };
        let table_ctor = if table.is_contiguous() {
            "contiguous"
        } else {
            "new"
        };

        self.output.push_str(&format!(
            "static {prefix}_STRINGER: {ty} =\n    {ctor_path}::{ctor}({rt}::Table::{table_ctor}(\n"
        ));
        self.output.push_str(&format!(
            "        {:?},\n        {:?},\n{data}        {:#x},\n    ));\n\n",
            table.type_name, table.zero_name, table.first_bit
        ));
    }

    fn emit_display(&mut self, type_name: &str, call: &str) {
        self.output.push_str(&format!(
            "impl ::std::fmt::Display for {type_name} {{\n"
        ));
        self.output.push_str(
            "    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {\n",
        );
        self.output
            .push_str(&format!("        f.write_str(&{call})\n"));
        self.output.push_str("    }\n}\n\n");
    }
}

/// `1, 2, 3`
fn join(values: &[u8]) -> String {
    values
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
