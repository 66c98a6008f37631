//! Filter, transform, and folds.

use std::fmt;

use tofu_value::{allocation_failure_from, callback_failed, TaggedValue, TofuResult};

/// Deep copies of the elements matching `pred`, in their original order.
///
/// Counts matches first and reserves exactly that many slots, so `pred` is
/// evaluated twice per element and must be pure. An allocation failure is
/// returned as `AllocationFailure`. No matches yields an empty vector.
pub fn filter<P>(seq: &[TaggedValue], pred: P) -> TofuResult<Vec<TaggedValue>>
where
    P: Fn(&TaggedValue) -> bool,
{
    let matches = seq.iter().filter(|&item| pred(item)).count();
    tracing::trace!(len = seq.len(), matches, "filter");

    let mut out = Vec::new();
    out.try_reserve_exact(matches)
        .map_err(|e| allocation_failure_from(matches, &e))?;
    out.extend(seq.iter().filter(|&item| pred(item)).cloned());
    Ok(out)
}

/// Apply `f` to every element in place, stopping at the first failure.
///
/// Elements before the failing index keep their new state; later ones are
/// untouched. The failure is reported as `CallbackFailed` with its index.
pub fn transform<F, E>(seq: &mut [TaggedValue], mut f: F) -> TofuResult<()>
where
    F: FnMut(&mut TaggedValue) -> Result<(), E>,
    E: fmt::Display,
{
    tracing::trace!(len = seq.len(), "transform");
    for (index, item) in seq.iter_mut().enumerate() {
        if let Err(e) = f(item) {
            tracing::debug!(index, error = %e, "transform aborted");
            return Err(callback_failed(index, e.to_string()));
        }
    }
    Ok(())
}

/// Strict left fold over the whole slice.
pub fn accumulate<A, F>(seq: &[TaggedValue], initial: A, f: F) -> A
where
    F: FnMut(A, &TaggedValue) -> A,
{
    seq.iter().fold(initial, f)
}

/// Map every element and add the results.
pub fn sum<T, F>(seq: &[TaggedValue], f: F) -> T
where
    T: std::iter::Sum<T>,
    F: FnMut(&TaggedValue) -> T,
{
    seq.iter().map(f).sum()
}
