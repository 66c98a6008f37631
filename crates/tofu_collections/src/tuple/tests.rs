#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use tofu_value::TofuErrorKind;

use super::*;

#[test]
fn add_get_remove() {
    let mut t = Tuple::new("float");
    t.add("1.5").unwrap();
    t.add("2.5").unwrap();
    t.add("3.5").unwrap();
    assert_eq!(t.len(), 3);
    assert_eq!(t.get(1).unwrap().value(), "2.5");
    assert_eq!(t.remove(1).unwrap().value(), "2.5");
    assert_eq!(t.back().unwrap().value(), "3.5");
    assert_eq!(
        t.remove(5).unwrap_err().kind,
        TofuErrorKind::IndexOutOfBounds { index: 5, len: 2 }
    );
}

#[test]
fn stays_inline_when_small() {
    let mut t = Tuple::new("float");
    for _ in 0..INLINE {
        t.add("0").unwrap();
    }
    assert!(!t.items.spilled());
    t.add("0").unwrap();
    assert!(t.items.spilled());
}

#[test]
fn front_and_back_updates() {
    let mut t = Tuple::new("float");
    assert!(t.set_front("1").is_err());
    assert!(t.front().is_none());
    t.add("1").unwrap();
    t.add("2").unwrap();
    t.set_front("10").unwrap();
    t.set_back("20").unwrap();
    t.set(0, "100").unwrap();
    let values: Vec<_> = t.iter().map(TaggedValue::value).collect();
    assert_eq!(values, vec!["100", "20"]);
}

#[test]
fn with_config_capacity() {
    let t = Tuple::with_config("float", &CollectionConfig::default()).unwrap();
    assert!(t.capacity() >= 10);
    assert!(Tuple::with_config("real", &CollectionConfig::strict()).is_err());
}

#[test]
fn typed_add() {
    let mut t = Tuple::new("float");
    assert!(t.add_value(TaggedValue::new("double", "1.0")).is_err());
    t.add_value(TaggedValue::new("float", "1.0")).unwrap();
    assert_eq!(t.as_slice().len(), 1);
    let moved = t.take();
    assert!(t.is_empty());
    assert_eq!(moved.element_type(), TypeTag::Float);
}

#[test]
fn with_config_reports_oversized_capacity() {
    let huge = CollectionConfig::default().with_capacity(usize::MAX);
    let err = Tuple::with_config("cstr", &huge).unwrap_err();
    assert!(err.is(&TofuErrorKind::AllocationFailure {
        requested: usize::MAX
    }));
}
