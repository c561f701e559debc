use bitnames_table::Strategy;

use crate::codegen::rust::{Config, Packaging};
use crate::{EmitError, FlagType, Generator, Repr};

fn flags(name: &str) -> FlagType {
    FlagType::new(name, Repr::U16)
        .constant("A", 1)
        .constant("B", 2)
}

#[test]
fn generates_all_types() {
    let generated = Generator::default().generate(&[flags("One"), flags("Two")]);

    assert!(generated.is_ok());
    assert_eq!(generated.tables.len(), 2);
    assert!(generated.source.contains("for One {"));
    assert!(generated.source.contains("for Two {"));
}

#[test]
fn failing_type_does_not_stop_others() {
    let empty = FlagType::new("Empty", Repr::U8).constant("None", 0);
    let long = FlagType::new("Long", Repr::U8).constant("L".repeat(300), 1);
    let generated = Generator::default().generate(&[empty, flags("Ok"), long]);

    assert!(!generated.is_ok());
    assert_eq!(generated.tables.len(), 1);
    assert!(generated.source.contains("for Ok {"));
    assert!(!generated.source.contains("Empty"));

    let failed: Vec<&str> = generated
        .failures
        .iter()
        .map(|f| f.type_name.as_str())
        .collect();
    assert_eq!(failed, vec!["Empty", "Long"]);
    assert!(matches!(
        generated.failures[1].error,
        EmitError::EncodingTooLarge { len: 300, .. }
    ));
}

#[test]
fn empty_flag_name_fails_only_its_type() {
    let blank = FlagType::new("Blank", Repr::U32)
        .constant("", 1)
        .constant("B", 2)
        .constant("C", 1 << 4);
    let generated = Generator::default().generate(&[blank, flags("Ok")]);

    assert_eq!(generated.tables.len(), 1);
    assert_eq!(generated.tables[0].check(), Ok(()));
    assert!(generated.source.contains("for Ok {"));
    assert!(!generated.source.contains("Blank"));
    assert_eq!(generated.failures.len(), 1);
    assert_eq!(generated.failures[0].type_name, "Blank");
    assert_eq!(generated.failures[0].error, EmitError::EmptyName { bit: 0 });
}

#[test]
fn config_reaches_emitter() {
    let config = Config::new()
        .packaging(Packaging::Descriptor)
        .strategy(Strategy::Uncached);
    let generated = Generator::new(config).generate(&[flags("Mode")]);

    assert!(generated.source.contains("::bitnames_table::Descriptor::uncached("));
    assert!(generated.source.contains("mstring_widened(self.0)"));
}
