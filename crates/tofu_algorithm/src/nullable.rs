//! Algorithms over possibly-absent sequences.
//!
//! A sequence is an optional slice plus the number of leading elements the
//! caller claims to operate on. An absent sequence with a zero claim is an
//! empty no-op; with a non-zero claim it fails with `NullValue`. A claim
//! longer than the slice fails with `IndexOutOfBounds`.

use std::fmt;

use tofu_value::{index_out_of_bounds, null_value, TaggedValue, TofuResult};

fn prefix<'a>(
    seq: Option<&'a [TaggedValue]>,
    len: usize,
    operation: &'static str,
) -> TofuResult<&'a [TaggedValue]> {
    match seq {
        None if len == 0 => Ok(&[]),
        None => Err(null_value(operation)),
        Some(seq) => seq.get(..len).ok_or_else(|| index_out_of_bounds(len, seq.len())),
    }
}

fn prefix_mut<'a>(
    seq: Option<&'a mut [TaggedValue]>,
    len: usize,
    operation: &'static str,
) -> TofuResult<&'a mut [TaggedValue]> {
    match seq {
        None if len == 0 => Ok(&mut []),
        None => Err(null_value(operation)),
        Some(seq) => {
            let available = seq.len();
            seq.get_mut(..len)
                .ok_or_else(|| index_out_of_bounds(len, available))
        }
    }
}

/// `None` for an absent sequence, an absent target, or no match.
pub fn search(
    seq: Option<&[TaggedValue]>,
    len: usize,
    target: Option<&TaggedValue>,
) -> Option<usize> {
    let seq = prefix(seq, len, "search").ok()?;
    crate::search(seq, target?)
}

pub fn sort(seq: Option<&mut [TaggedValue]>, len: usize, ascending: bool) -> TofuResult<()> {
    crate::sort(prefix_mut(seq, len, "sort")?, ascending);
    Ok(())
}

pub fn reverse(seq: Option<&mut [TaggedValue]>, len: usize) -> TofuResult<()> {
    crate::reverse(prefix_mut(seq, len, "reverse")?);
    Ok(())
}

/// `None` for an absent or empty sequence.
pub fn min(seq: Option<&[TaggedValue]>, len: usize) -> Option<&TaggedValue> {
    crate::min(prefix(seq, len, "min").ok()?)
}

/// `None` for an absent or empty sequence.
pub fn max(seq: Option<&[TaggedValue]>, len: usize) -> Option<&TaggedValue> {
    crate::max(prefix(seq, len, "max").ok()?)
}

pub fn filter<P>(seq: Option<&[TaggedValue]>, len: usize, pred: P) -> TofuResult<Vec<TaggedValue>>
where
    P: Fn(&TaggedValue) -> bool,
{
    crate::filter(prefix(seq, len, "filter")?, pred)
}

pub fn transform<F, E>(seq: Option<&mut [TaggedValue]>, len: usize, f: F) -> TofuResult<()>
where
    F: FnMut(&mut TaggedValue) -> Result<(), E>,
    E: fmt::Display,
{
    crate::transform(prefix_mut(seq, len, "transform")?, f)
}

#[cfg(test)]
mod tests;
