#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use tofu_value::TofuErrorKind;

use super::*;

#[test]
fn lifo_order() {
    let mut s = Stack::new("bool");
    s.push("true").unwrap();
    s.push("false").unwrap();
    assert_eq!(s.top().unwrap().value(), "false");
    assert_eq!(s.pop().unwrap().value(), "false");
    assert_eq!(s.pop().unwrap().value(), "true");
    assert_eq!(
        s.pop().unwrap_err().kind,
        TofuErrorKind::EmptyContainer { container: "stack" }
    );
    assert!(s.top().is_none());
}

#[test]
fn index_counts_from_top() {
    let mut s = Stack::new("u32");
    for t in ["1", "2", "3"] {
        s.push(t).unwrap();
    }
    assert_eq!(s.get(0).unwrap().value(), "3");
    assert_eq!(s.get(2).unwrap().value(), "1");
    assert!(s.get(3).is_none());

    s.set(2, "100").unwrap();
    let order: Vec<_> = s.iter().map(TaggedValue::value).collect();
    assert_eq!(order, vec!["3", "2", "100"]);
    assert!(s.set(3, "x").is_err());
}

#[test]
fn search_and_typed_push() {
    let mut s = Stack::new("u32");
    s.push_value(TaggedValue::new("u32", "7")).unwrap();
    assert!(s.push_value(TaggedValue::new("i32", "7")).is_err());
    assert!(s.search(&TaggedValue::new("u32", "7")).is_some());

    let moved = s.take();
    assert!(s.is_empty());
    assert!(moved.not_empty());
}
