//! Type registry for tofu.
//!
//! A fixed, compile-time table mapping canonical type identifiers
//! (`"i8"`, `"cstr"`, `"bool"`, ...) to [`TypeTag`], with a display name and
//! description per tag. Everything else in the workspace depends on this
//! crate; it has no runtime state.

mod registry;
mod tag;

pub use registry::{
    description_of, lookup, name_of, resolve, tag_for, TypePolicy, UnrecognizedType,
};
pub use tag::{
    description_of_ordinal, name_of_ordinal, TypeTag, TAG_COUNT, UNKNOWN_INFO, UNKNOWN_NAME,
};
