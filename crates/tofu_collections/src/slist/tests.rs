#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use tofu_value::TofuErrorKind;

use super::*;

fn list(texts: &[&str]) -> SList {
    let mut l = SList::new("cstr");
    for t in texts {
        l.insert(t).unwrap();
    }
    l
}

fn texts(l: &SList) -> Vec<&str> {
    l.iter().map(TaggedValue::value).collect()
}

#[test]
fn insert_appends_in_order() {
    let l = list(&["a", "b", "c"]);
    assert_eq!(texts(&l), vec!["a", "b", "c"]);
    assert_eq!(l.len(), 3);
    assert_eq!(l.iter().len(), 3);
    assert!(l.not_empty());
    assert_eq!(l.front().unwrap().tag(), TypeTag::CStr);
}

#[test]
fn insert_front_prepends() {
    let mut l = list(&["b"]);
    l.insert_front("a");
    assert_eq!(texts(&l), vec!["a", "b"]);
}

#[test]
fn unknown_type_becomes_any() {
    let l = SList::new("nope");
    assert_eq!(l.element_type(), TypeTag::Any);
}

#[test]
fn insert_value_checks_type() {
    let mut l = SList::new("i32");
    l.insert_value(TaggedValue::new("i32", "1")).unwrap();
    let err = l.insert_value(TaggedValue::new("cstr", "x")).unwrap_err();
    assert_eq!(
        err.kind,
        TofuErrorKind::TypeMismatch {
            expected: TypeTag::I32,
            got: TypeTag::CStr
        }
    );
    assert_eq!(l.len(), 1);

    let mut any = SList::new("any");
    any.insert_value(TaggedValue::new("cstr", "x")).unwrap();
}

#[test]
fn remove_first_match() {
    let mut l = list(&["a", "b", "a"]);
    let removed = l.remove(&TaggedValue::new("cstr", "a")).unwrap();
    assert_eq!(removed.value(), "a");
    assert_eq!(texts(&l), vec!["b", "a"]);

    let err = l.remove(&TaggedValue::new("cstr", "zz")).unwrap_err();
    assert_eq!(err.kind, TofuErrorKind::NotFound);
}

#[test]
fn remove_at_bounds() {
    let mut l = list(&["a", "b", "c"]);
    assert_eq!(l.remove_at(2).unwrap().value(), "c");
    assert_eq!(texts(&l), vec!["a", "b"]);
    let err = l.remove_at(2).unwrap_err();
    assert_eq!(err.kind, TofuErrorKind::IndexOutOfBounds { index: 2, len: 2 });
}

#[test]
fn search_and_get() {
    let l = list(&["x", "y"]);
    assert!(l.search(&TaggedValue::new("cstr", "y")).is_some());
    assert!(!l.contains(&TaggedValue::new("wstr", "y")));
    assert_eq!(l.get(1).unwrap().value(), "y");
    assert!(l.get(2).is_none());
    assert_eq!(l.back().unwrap().value(), "y");
}

#[test]
fn set_respects_bounds_and_mutability() {
    let mut l = list(&["a", "b"]);
    l.set(1, "B").unwrap();
    l.set_front("A").unwrap();
    assert_eq!(texts(&l), vec!["A", "B"]);
    l.set_back("Z").unwrap();
    assert_eq!(l.back().unwrap().value(), "Z");
    assert!(l.set(5, "x").is_err());

    let mut frozen = TaggedValue::new("cstr", "ice");
    frozen.set_mutable(false);
    l.insert_value(frozen).unwrap();
    let err = l.set(2, "water").unwrap_err();
    assert_eq!(err.kind, TofuErrorKind::ImmutableValue);
}

#[test]
fn set_front_on_empty() {
    let mut l = SList::new("cstr");
    let err = l.set_front("x").unwrap_err();
    assert_eq!(err.kind, TofuErrorKind::EmptyContainer { container: "slist" });
    assert!(l.set_back("x").is_err());
}

#[test]
fn reverse_relinks() {
    let mut l = list(&["1", "2", "3"]);
    l.reverse();
    assert_eq!(texts(&l), vec!["3", "2", "1"]);
    l.insert("0").unwrap();
    assert_eq!(texts(&l), vec!["3", "2", "1", "0"]);
}

#[test]
fn clone_is_deep_and_ordered() {
    let original = list(&["a", "b", "c"]);
    let mut copy = original.clone();
    copy.set(0, "changed").unwrap();
    assert_eq!(texts(&original), vec!["a", "b", "c"]);
    assert_eq!(texts(&copy), vec!["changed", "b", "c"]);
    assert_eq!(copy.element_type(), TypeTag::CStr);
}

#[test]
fn take_leaves_empty_list_of_same_type() {
    let mut l = list(&["a"]);
    let moved = l.take();
    assert_eq!(moved.len(), 1);
    assert!(l.is_empty());
    assert_eq!(l.element_type(), TypeTag::CStr);
}

#[test]
fn clear_and_long_drop() {
    let mut l = SList::new("size");
    for i in 0..100_000 {
        l.insert_front(&i.to_string());
    }
    assert_eq!(l.len(), 100_000);
    l.clear();
    assert!(l.is_empty());

    let mut long = SList::new("size");
    for i in 0..100_000 {
        long.insert_front(&i.to_string());
    }
    drop(long);
}
