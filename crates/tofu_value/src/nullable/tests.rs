#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use crate::errors::TofuErrorKind;

#[test]
fn reads_tolerate_absence() {
    assert_eq!(get_value(None), None);
    assert!(!is_mutable(None));
    assert!(get_attribute(None).is_none());

    let v = TaggedValue::new("i32", "5");
    assert_eq!(get_value(Some(&v)), Some("5"));
    assert!(is_mutable(Some(&v)));
}

#[test]
fn mutations_reject_absence() {
    let err = set_mutable(None, false).unwrap_err();
    assert_eq!(
        err.kind,
        TofuErrorKind::NullValue {
            operation: "set_mutable"
        }
    );
    assert!(set_value(None, Some("x")).is_err());
    assert!(set_attribute(None, "n", "d", "i").is_err());
}

#[test]
fn absent_text_normalizes_to_empty() {
    let mut v = TaggedValue::new("cstr", "full");
    set_value(Some(&mut v), None).unwrap();
    assert_eq!(v.value(), "");
}

#[test]
fn set_value_still_checks_mutability() {
    let mut v = TaggedValue::new("cstr", "keep");
    set_mutable(Some(&mut v), false).unwrap();
    let err = set_value(Some(&mut v), Some("lose")).unwrap_err();
    assert_eq!(err.kind, TofuErrorKind::ImmutableValue);
    assert_eq!(get_value(Some(&v)), Some("keep"));
}

#[test]
fn equals_is_false_with_absent_side() {
    let v = TaggedValue::new("bool", "true");
    assert!(equals(Some(&v), Some(&v.clone())));
    assert!(!equals(Some(&v), None));
    assert!(!equals(None, Some(&v)));
    assert!(!equals(None, None));
}

#[test]
fn compare_puts_absent_first() {
    let v = TaggedValue::new("bool", "true");
    assert_eq!(compare(None, None), Ordering::Equal);
    assert_eq!(compare(None, Some(&v)), Ordering::Less);
    assert_eq!(compare(Some(&v), None), Ordering::Greater);
}

#[test]
fn copy_requires_both_sides() {
    let src = TaggedValue::new("u8", "1");
    let mut dest = TaggedValue::default();
    assert!(copy(None, Some(&src)).is_err());
    assert!(copy(Some(&mut dest), None).is_err());
    copy(Some(&mut dest), Some(&src)).unwrap();
    assert!(dest.equals(&src));
}

#[test]
fn take_and_destroy() {
    let mut v = TaggedValue::new("u8", "1");
    let moved = take(Some(&mut v)).unwrap();
    assert_eq!(moved.value(), "1");
    assert!(v.is_neutral());
    assert!(take(None).is_none());

    destroy(None);
    destroy(Some(&mut v));
    assert!(v.is_neutral());
    display(None);
}
