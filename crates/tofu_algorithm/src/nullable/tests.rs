#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use tofu_value::{TofuError, TofuErrorKind};

use super::*;

fn cstrs(texts: &[&str]) -> Vec<TaggedValue> {
    texts.iter().map(|t| TaggedValue::new("cstr", *t)).collect()
}

#[test]
fn absent_with_zero_length_is_noop() {
    sort(None, 0, true).unwrap();
    reverse(None, 0).unwrap();
    assert!(filter(None, 0, |_| true).unwrap().is_empty());
    transform(None, 0, |_| Ok::<(), TofuError>(())).unwrap();
}

#[test]
fn absent_with_claimed_length_fails() {
    let err = sort(None, 3, true).unwrap_err();
    assert_eq!(err.kind, TofuErrorKind::NullValue { operation: "sort" });
    let err = reverse(None, 1).unwrap_err();
    assert_eq!(err.kind, TofuErrorKind::NullValue { operation: "reverse" });
    assert!(filter(None, 2, |_| true).is_err());
}

#[test]
fn claim_past_end_fails() {
    let mut seq = cstrs(&["a"]);
    let err = sort(Some(&mut seq), 2, true).unwrap_err();
    assert_eq!(err.kind, TofuErrorKind::IndexOutOfBounds { index: 2, len: 1 });
}

#[test]
fn claim_limits_the_pass() {
    let mut seq = cstrs(&["c", "b", "a"]);
    sort(Some(&mut seq), 2, true).unwrap();
    let texts: Vec<_> = seq.iter().map(TaggedValue::value).collect();
    assert_eq!(texts, vec!["b", "c", "a"]);

    reverse(Some(&mut seq), 3).unwrap();
    let texts: Vec<_> = seq.iter().map(TaggedValue::value).collect();
    assert_eq!(texts, vec!["a", "c", "b"]);
}

#[test]
fn queries_default_on_absence() {
    let seq = cstrs(&["x", "y"]);
    let target = TaggedValue::new("cstr", "y");
    assert_eq!(search(Some(&seq), 2, Some(&target)), Some(1));
    assert_eq!(search(Some(&seq), 1, Some(&target)), None);
    assert_eq!(search(None, 0, Some(&target)), None);
    assert_eq!(search(Some(&seq), 2, None), None);

    assert!(min(None, 0).is_none());
    assert!(max(None, 4).is_none());
    assert_eq!(max(Some(&seq), 2).map(TaggedValue::value), Some("y"));
}
