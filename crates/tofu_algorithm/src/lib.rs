//! Algorithms over slices of tagged values.
//!
//! Every operation is a single pass (or a fixed number of passes) over a
//! `[TaggedValue]` slice. Ordering comes from [`tofu_value::compare`] and
//! membership from [`TaggedValue::equals`](tofu_value::TaggedValue::equals).
//! Containers that expose a slice (e.g. `Vector::as_slice`) can be passed
//! in directly.

mod fold;
pub mod nullable;
mod order;

pub use fold::{accumulate, filter, sum, transform};
pub use order::{max, max_by, min, min_by, reverse, search, sort, sort_by};
