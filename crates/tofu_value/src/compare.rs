//! Ordering and equality over tagged values.
//!
//! The primary key is the tag ordinal, so heterogeneous slices still have a
//! total order. Within a tag, payloads compare byte by byte: numbers are
//! ordered by their text, so `"10" < "9"`.

use std::cmp::Ordering;

use crate::value::TaggedValue;

/// Comparator signature accepted by `min_by`/`max_by` and container sorts.
pub type CompareFn = fn(&TaggedValue, &TaggedValue) -> Ordering;

/// Total order over tagged values: tag ordinal, then payload bytes.
///
/// Returns `Equal` exactly when [`TaggedValue::equals`] holds.
pub fn compare(a: &TaggedValue, b: &TaggedValue) -> Ordering {
    a.tag()
        .ordinal()
        .cmp(&b.tag().ordinal())
        .then_with(|| a.value().as_bytes().cmp(b.value().as_bytes()))
}

/// Reverse of [`compare`], for descending passes.
pub fn compare_descending(a: &TaggedValue, b: &TaggedValue) -> Ordering {
    compare(b, a)
}

/// Compare two slices lexicographically under [`compare`].
///
/// The first differing element decides; a strict prefix is less.
pub fn compare_slices(a: &[TaggedValue], b: &[TaggedValue]) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        let ord = compare(x, y);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    a.len().cmp(&b.len())
}

/// Element-wise [`TaggedValue::equals`] over two slices.
pub fn slices_equal(a: &[TaggedValue], b: &[TaggedValue]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.equals(y))
}
