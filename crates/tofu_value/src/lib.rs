//! Tagged values for tofu.
//!
//! A [`TaggedValue`] carries a runtime [`TypeTag`], a canonical textual
//! payload, a mutable flag, and an [`Attribute`] triple. This crate also
//! owns the error taxonomy shared by the algorithm and collection crates,
//! and the comparison rules every sort, search, and uniqueness check
//! relies on.

mod compare;
mod errors;
pub mod nullable;
mod value;

pub use compare::{compare, compare_descending, compare_slices, slices_equal, CompareFn};
pub use errors::{
    allocation_failure, allocation_failure_from, callback_failed, duplicate, empty_container,
    immutable_value, index_out_of_bounds, not_found, null_value, parse_error, type_mismatch,
    unrecognized_type, TofuError, TofuErrorKind, TofuResult,
};
pub use value::{Attribute, TaggedValue, TypedValue};

pub use tofu_types::{TypePolicy, TypeTag};
