//! Declaration validation, labels and ordering

use choices_types::{ChoiceSet, Declaration, DeclarationError, RawChoice, choices};

#[test]
fn custom_labels_are_kept() {
    let set = choices!(A = 1 => "Label A", B = 2 => "Label B").unwrap();
    assert_eq!(set, [(1, "Label A"), (2, "Label B")]);
}

#[test]
fn missing_labels_default_to_names() {
    let set = choices!(NONE = 0 => "ALL", A = 1, B = 2).unwrap();
    assert_eq!(set, [(0, "ALL"), (1, "A"), (2, "B")]);
}

#[test]
fn declaration_order_is_preserved() {
    let set = choices! {
        Z = 4,
        A = 2,
        C = 3,
        B = 1,
        L = 0,
    }
    .unwrap();
    assert_eq!(set, [(4, "Z"), (2, "A"), (3, "C"), (1, "B"), (0, "L")]);
}

#[test]
fn duplicates_are_rejected_before_building() {
    let result: Result<ChoiceSet<i32>, _> = choices!(A = 1, A = 2);
    assert_eq!(
        result.unwrap_err(),
        DeclarationError::DuplicateName {
            name: "A".to_string()
        }
    );
}

#[test]
fn reserved_names_are_rejected() {
    let err = Result::<ChoiceSet<i32>, _>::unwrap_err(choices!(__dict__ = 1));
    assert!(matches!(err, DeclarationError::NameConflict { .. }));
    assert_eq!(err.name(), "__dict__");

    let err = Result::<ChoiceSet<i32>, _>::unwrap_err(choices!(_fields = 1));
    assert!(matches!(err, DeclarationError::NameConflict { .. }));

    let err = Result::<ChoiceSet<i32>, _>::unwrap_err(choices!(fields = 1));
    assert!(matches!(err, DeclarationError::NameConflict { .. }));
}

#[test]
fn error_messages_name_the_offender() {
    let err = Result::<ChoiceSet<i32>, _>::unwrap_err(choices!(A = 1, A = 2));
    assert_eq!(err.to_string(), r#"duplicated choice name "A""#);

    let err = Result::<ChoiceSet<i32>, _>::unwrap_err(choices!(_fields = 1));
    assert_eq!(
        err.to_string(),
        r#"illegal choice name "_fields": conflicts with a reserved name"#
    );
}

#[test]
fn redeclaring_under_the_same_binding_builds_a_new_set() {
    let redefined: ChoiceSet<i32> = choices!(A = 10, B = 20).unwrap();
    assert_eq!(redefined.len(), 2);
    let redefined = choices!(C = 30, D = 40).unwrap();
    assert_eq!(redefined, [(30, "C"), (40, "D")]);
}

#[test]
fn builder_and_macro_agree() {
    let built = Declaration::<i32>::new()
        .entry("X", RawChoice::Value(1).with_label("X"))
        .entry("Y", RawChoice::Labeled(2, "Y".to_string()))
        .entry("Z", 3)
        .build()
        .unwrap();
    let declared = choices!(X = 1 => "X", Y = 2 => "Y", Z = 3).unwrap();
    assert_eq!(built, declared);
    assert_eq!(built.fields(), declared.fields());
}

#[test]
fn collected_from_ordered_pairs() {
    let declaration: Declaration<u8> = vec![("LOW", 1), ("HIGH", 9), ("MID", 5)]
        .into_iter()
        .collect();
    let set = declaration.build().unwrap();
    assert_eq!(set.fields(), ["LOW", "HIGH", "MID"]);
    assert_eq!(set.label_of(&5), Some("MID"));
}

#[test]
fn invalid_names_are_rejected() {
    let declaration: Declaration<i32> = [("", 1)].into_iter().collect();
    assert!(matches!(
        declaration.build(),
        Err(DeclarationError::InvalidName { .. })
    ));
}
