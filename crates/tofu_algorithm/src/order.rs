//! Search, sort, reverse, and extremes.

use std::cmp::Ordering;

use tofu_value::{compare, compare_descending, TaggedValue};

/// Index of the first element equal to `target`.
pub fn search(seq: &[TaggedValue], target: &TaggedValue) -> Option<usize> {
    seq.iter().position(|item| item.equals(target))
}

/// Stable in-place sort under [`compare`].
pub fn sort(seq: &mut [TaggedValue], ascending: bool) {
    tracing::trace!(len = seq.len(), ascending, "sort");
    if ascending {
        seq.sort_by(compare);
    } else {
        seq.sort_by(compare_descending);
    }
}

/// Stable in-place sort under a caller-supplied order.
pub fn sort_by<F>(seq: &mut [TaggedValue], cmp: F)
where
    F: FnMut(&TaggedValue, &TaggedValue) -> Ordering,
{
    tracing::trace!(len = seq.len(), "sort_by");
    seq.sort_by(cmp);
}

/// Reverse in place by swapping endpoints.
pub fn reverse(seq: &mut [TaggedValue]) {
    tracing::trace!(len = seq.len(), "reverse");
    seq.reverse();
}

/// Smallest element under [`compare`]; the first one on ties.
pub fn min(seq: &[TaggedValue]) -> Option<&TaggedValue> {
    min_by(seq, compare)
}

/// Largest element under [`compare`]; the first one on ties.
pub fn max(seq: &[TaggedValue]) -> Option<&TaggedValue> {
    max_by(seq, compare)
}

pub fn min_by<F>(seq: &[TaggedValue], cmp: F) -> Option<&TaggedValue>
where
    F: FnMut(&TaggedValue, &TaggedValue) -> Ordering,
{
    extreme_by(seq, cmp, Ordering::Less)
}

pub fn max_by<F>(seq: &[TaggedValue], cmp: F) -> Option<&TaggedValue>
where
    F: FnMut(&TaggedValue, &TaggedValue) -> Ordering,
{
    extreme_by(seq, cmp, Ordering::Greater)
}

// Only a strict win replaces the running extreme: ties keep the earliest.
fn extreme_by<F>(seq: &[TaggedValue], mut cmp: F, wins: Ordering) -> Option<&TaggedValue>
where
    F: FnMut(&TaggedValue, &TaggedValue) -> Ordering,
{
    let (first, rest) = seq.split_first()?;
    let mut best = first;
    for item in rest {
        if cmp(item, best) == wins {
            best = item;
        }
    }
    Some(best)
}

#[cfg(test)]
mod tests;
