use crate::partition::{FlagEntry, partition};

fn entries(items: &[(&str, u64)]) -> Vec<FlagEntry> {
    items
        .iter()
        .enumerate()
        .map(|(i, &(name, value))| FlagEntry::new(name, value, i))
        .collect()
}

fn run_names(items: &[(&str, u64)]) -> Vec<Vec<String>> {
    partition(entries(items))
        .runs
        .iter()
        .map(|run| run.entries().iter().map(|e| e.name.clone()).collect())
        .collect()
}

#[test]
fn bit_of_single_bit_value() {
    assert_eq!(FlagEntry::new("A", 1, 0).bit(), Some(0));
    assert_eq!(FlagEntry::new("A", 1 << 63, 0).bit(), Some(63));
    assert_eq!(FlagEntry::new("A", 0, 0).bit(), None);
    assert_eq!(FlagEntry::new("A", 0b110, 0).bit(), None);
}

#[test]
fn contiguous_flags_form_one_run() {
    let p = partition(entries(&[("A", 1), ("B", 2), ("C", 4)]));

    assert_eq!(p.runs.len(), 1);
    assert_eq!(p.runs[0].first_bit(), 0);
    assert_eq!(p.runs[0].last_bit(), 2);
    assert_eq!(p.flag_count(), 3);
    assert_eq!(p.gap_count(), 0);
    assert_eq!(p.zero, None);
}

#[test]
fn gap_splits_runs() {
    let names = run_names(&[
        ("Zero", 0),
        ("Two", 1 << 2),
        ("Three", 1 << 3),
        ("Five", 1 << 5),
        ("Six", 1 << 6),
        ("Seven", 1 << 7),
        ("Eight", 1 << 8),
        ("Nine", 1 << 9),
        ("Eleven", 1 << 11),
    ]);

    assert_eq!(
        names,
        vec![
            vec!["Two", "Three"],
            vec!["Five", "Six", "Seven", "Eight", "Nine"],
            vec!["Eleven"],
        ]
    );
}

#[test]
fn sorted_by_bit_not_declaration() {
    let names = run_names(&[("C", 4), ("A", 1), ("B", 2)]);

    assert_eq!(names, vec![vec!["A", "B", "C"]]);
}

#[test]
fn first_declared_zero_wins() {
    let p = partition(entries(&[("A", 1), ("None", 0), ("Empty", 0)]));

    assert_eq!(p.zero.map(|z| z.name), Some("None".to_string()));
}

#[test]
fn zero_candidate_prefers_lower_decl_order() {
    let p = partition(vec![
        FlagEntry::new("Later", 0, 5),
        FlagEntry::new("Earlier", 0, 1),
        FlagEntry::new("A", 1, 0),
    ]);

    assert_eq!(p.zero.map(|z| z.name), Some("Earlier".to_string()));
}

#[test]
fn multi_bit_constants_dropped() {
    let names = run_names(&[("A", 1), ("AB", 3), ("B", 2), ("All", u64::MAX)]);

    assert_eq!(names, vec![vec!["A", "B"]]);
}

#[test]
fn duplicate_bit_keeps_first_declared() {
    let names = run_names(&[("Read", 1), ("Write", 2), ("R", 1), ("W", 2)]);

    assert_eq!(names, vec![vec!["Read", "Write"]]);
}

#[test]
fn duplicate_bit_uses_decl_order_not_input_order() {
    let p = partition(vec![
        FlagEntry::new("Alias", 1, 3),
        FlagEntry::new("Primary", 1, 0),
    ]);

    assert_eq!(p.runs[0].entries()[0].name, "Primary");
    assert_eq!(p.flag_count(), 1);
}

#[test]
fn only_zero_and_multi_bit_leaves_no_runs() {
    let p = partition(entries(&[("None", 0), ("Both", 3)]));

    assert!(p.runs.is_empty());
    assert!(p.zero.is_some());
}

#[test]
fn large_gaps() {
    let p = partition(entries(&[
        ("Seven", 1 << 7),
        ("ThirtyOne", 1 << 31),
        ("SixtyThree", 1 << 63),
    ]));

    let bits: Vec<(u32, u32)> = p
        .runs
        .iter()
        .map(|run| (run.first_bit(), run.last_bit()))
        .collect();
    assert_eq!(bits, vec![(7, 7), (31, 31), (63, 63)]);
    assert_eq!(p.gap_count(), 2);
}
