use bitnames_table::{EncodedTable, Strategy};
use indoc::indoc;

use super::{Config, Emitter, Packaging};
use crate::{FlagType, Repr};

pub(super) fn days() -> FlagType {
    ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
        .iter()
        .enumerate()
        .fold(FlagType::new("Days", Repr::I32), |ty, (i, name)| {
            ty.constant(*name, 1 << i)
        })
}

pub(super) fn gap() -> FlagType {
    FlagType::new("Gap", Repr::U32)
        .constant("Zero", 0)
        .constant("Two", 1 << 2)
        .constant("Three", 1 << 3)
        .constant("Five", 1 << 5)
        .constant("Six", 1 << 6)
        .constant("Seven", 1 << 7)
        .constant("Eight", 1 << 8)
        .constant("Nine", 1 << 9)
        .constant("Eleven", 1 << 11)
}

fn emit(config: Config, types: &[FlagType]) -> String {
    let mut emitter = Emitter::new(config);
    for ty in types {
        let table: EncodedTable = ty.compile().unwrap();
        emitter.emit_type(&table, ty.repr);
    }
    emitter.finish()
}

#[test]
fn specialized_contiguous() {
    let out = emit(Config::new().header_args(" gen -t Days"), &[days()]);

    assert_eq!(
        out,
        indoc! {r#"
            // Code generated by bitnames gen -t Days; DO NOT EDIT.

            const _DAYS_NAME: &str = "MondayTuesdayWednesdayThursdayFridaySaturdaySunday";
            const _DAYS_OFFSET: [u8; 7] = [6, 7, 9, 8, 6, 8, 6];

            static _DAYS_STRINGER: ::bitnames_table::Stringer<'static, u32> =
                ::bitnames_table::Stringer::cached(::bitnames_table::Table::contiguous(
                    "Days",
                    "Days(0)",
                    _DAYS_NAME,
                    &_DAYS_OFFSET,
                    0x1,
                ));

            impl ::std::fmt::Display for Days {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    f.write_str(&_DAYS_STRINGER.mstring(::bitnames_table::FlagRepr::to_bits(self.0)))
                }
            }
        "#}
    );
}

#[test]
fn specialized_with_gaps() {
    let out = emit(Config::new().strategy(Strategy::Uncached), &[gap()]);

    assert_eq!(
        out,
        indoc! {r#"
            // Code generated by bitnames; DO NOT EDIT.

            const _GAP_NAME: &str = "TwoThreeFiveSixSevenEightNineEleven";
            const _GAP_OFFSET: [u8; 10] = [3, 5, 0, 4, 3, 5, 5, 4, 0, 6];
            const _GAP_SKIPS: [u8; 2] = [1, 1];

            static _GAP_STRINGER: ::bitnames_table::Stringer<'static, u32> =
                ::bitnames_table::Stringer::uncached(::bitnames_table::Table::new(
                    "Gap",
                    "Zero",
                    _GAP_NAME,
                    &_GAP_OFFSET,
                    &_GAP_SKIPS,
                    0x4,
                ));

            impl ::std::fmt::Display for Gap {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    f.write_str(&_GAP_STRINGER.mstring(::bitnames_table::FlagRepr::to_bits(self.0)))
                }
            }
        "#}
    );
}

#[test]
fn descriptor_packaging() {
    let config = Config::new()
        .packaging(Packaging::Descriptor)
        .runtime("crate::rt")
        .value_expr("self.bits");
    let out = emit(config, &[gap()]);

    assert_eq!(
        out,
        indoc! {r#"
            // Code generated by bitnames; DO NOT EDIT.

            static _GAP_STRINGER: crate::rt::Descriptor =
                crate::rt::Descriptor::cached(crate::rt::Table::new(
                    "Gap",
                    "Zero",
                    "TwoThreeFiveSixSevenEightNineEleven",
                    &[3, 5, 0, 4, 3, 5, 5, 4, 0, 6],
                    &[1, 1],
                    0x4,
                ));

            impl ::std::fmt::Display for Gap {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    f.write_str(&_GAP_STRINGER.mstring_widened(self.bits))
                }
            }
        "#}
    );
}

#[test]
fn descriptor_contiguous_omits_skips() {
    let out = emit(Config::new().packaging(Packaging::Descriptor), &[days()]);

    assert!(out.contains("::bitnames_table::Table::contiguous(\n"));
    assert!(out.contains("        &[6, 7, 9, 8, 6, 8, 6],\n        0x1,\n"));
}

#[test]
fn specialized_uses_unsigned_width() {
    let ty = FlagType::new("Big", Repr::I64).constant("Top", 1 << 63);
    let out = emit(Config::new(), &[ty]);

    assert!(out.contains("::bitnames_table::Stringer<'static, u64>"));
    assert!(out.contains("        0x8000000000000000,\n"));
}

#[test]
fn names_are_escaped() {
    let ty = FlagType::new("Q", Repr::U8).constant("say \"hi\"", 1);
    let out = emit(Config::new(), &[ty]);

    assert!(out.contains(r#"const _Q_NAME: &str = "say \"hi\"";"#));
}

#[test]
fn several_types_one_trailing_newline() {
    let out = emit(Config::new(), &[days(), gap()]);

    assert!(out.contains("impl ::std::fmt::Display for Days {"));
    assert!(out.contains("impl ::std::fmt::Display for Gap {"));
    assert!(out.ends_with("}\n"));
    assert!(!out.ends_with("\n\n"));
}

#[test]
fn colliding_prefixes_get_suffix() {
    let a = FlagType::new("Mode", Repr::U8).constant("A", 1);
    let b = FlagType::new("MODE", Repr::U8).constant("B", 1);
    let out = emit(Config::new(), &[a, b]);

    assert!(out.contains("static _MODE_STRINGER:"));
    assert!(out.contains("static _MODE_2_STRINGER:"));
}

#[test]
fn header_only_when_empty() {
    let out = emit(Config::new(), &[]);

    assert_eq!(out, "// Code generated by bitnames; DO NOT EDIT.\n");
}
