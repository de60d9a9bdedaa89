//! Sequence behavior of built choice sets

use std::thread;

use choices_types::{ChoiceSet, LookupError, choices};

fn value_choices() -> ChoiceSet<i32> {
    choices!(A = 1, B = 2).unwrap()
}

fn tuple_choices() -> ChoiceSet<i32> {
    choices!(A = 1 => "A", B = 2 => "B").unwrap()
}

#[test]
fn bare_and_labeled_declarations_build_the_same_pairs() {
    assert_eq!(value_choices(), tuple_choices());
}

#[test]
fn items_are_value_label_pairs() {
    for set in [value_choices(), tuple_choices()] {
        assert_eq!(set.at(0), Ok(&(1, "A".to_string())));
        assert_eq!(set.at(1), Ok(&(2, "B".to_string())));
        assert_eq!(set[0], (1, "A".to_string()));
    }
}

#[test]
fn length_counts_declared_entries() {
    assert_eq!(value_choices().len(), 2);
    assert_eq!(tuple_choices().len(), 2);
    assert!(!value_choices().is_empty());
}

#[test]
fn iteration_is_lazy_and_restartable() {
    let set = value_choices();
    let mut iter = set.iter();
    assert_eq!(iter.next(), Some(&(1, "A".to_string())));
    assert_eq!(iter.len(), 1);

    let again: Vec<&(i32, String)> = (&set).into_iter().collect();
    assert_eq!(again.len(), 2);
    assert_eq!(again[0].1, "A");
}

#[test]
fn out_of_range_index_is_an_error() {
    let set = value_choices();
    assert_eq!(
        set.at(2),
        Err(LookupError::IndexOutOfRange { index: 2, len: 2 })
    );
    assert_eq!(
        set.at(usize::MAX),
        Err(LookupError::IndexOutOfRange {
            index: usize::MAX,
            len: 2
        })
    );
}

#[test]
fn named_access_returns_values() {
    let set = choices!(X = 1 => "X", Y = 2 => "Y", Z = 3).unwrap();
    assert_eq!(set.get("X"), Ok(&1));
    assert_eq!(set.get("Y"), Ok(&2));
    assert_eq!(set.get("Z"), Ok(&3));
    assert!(matches!(
        set.get("W"),
        Err(LookupError::UnknownName { ref name }) if name == "W"
    ));
}

#[test]
fn equals_plain_ordered_sequence() {
    assert_eq!(value_choices(), [(1, "A"), (2, "B")]);
    assert_eq!(value_choices(), vec![(1, "A"), (2, "B")]);
    assert_ne!(value_choices(), [(2, "B"), (1, "A")]);
}

#[test]
fn reads_are_stable_after_failed_lookups() {
    let set = value_choices();
    let before = set.clone();
    assert!(set.at(10).is_err());
    assert!(set.get("new_attribute").is_err());
    assert_eq!(set, before);
    assert_eq!(set.fields(), ["A", "B"]);
    assert_eq!(set.get("A"), Ok(&1));
}

#[test]
fn shared_between_threads_without_locking() {
    let set = value_choices();
    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(set.get("B"), Ok(&2));
                assert_eq!(set.iter().count(), 2);
            });
        }
    });
}

#[test]
fn serializes_like_a_sequence_of_pairs() {
    let json = serde_json::to_string(&tuple_choices()).unwrap();
    assert_eq!(json, r#"[[1,"A"],[2,"B"]]"#);
}
