//! Containers of tagged values.
//!
//! Every container is homogeneous: it resolves an element [`TypeTag`] when
//! it is built and stores only values of that tag (or anything, for `any`).
//! Text-taking inserts build the element with the container's tag;
//! `*_value` inserts take a ready [`TaggedValue`] and reject a mismatched
//! tag with `TypeMismatch`.
//!
//! Membership, search, and uniqueness use [`TaggedValue::equals`]. Read-only
//! peeks return `Option<&TaggedValue>`; removals that need an element return
//! `TofuResult` and fail with `EmptyContainer`, `NotFound`, or
//! `IndexOutOfBounds`.
//!
//! | Container | Storage |
//! |-----------|---------|
//! | [`SList`] | owned boxed nodes |
//! | [`DList`] | arena of nodes linked by index |
//! | [`Queue`], [`DQueue`] | `VecDeque` |
//! | [`PQueue`] | `VecDeque` kept in priority order |
//! | [`Stack`] | `Vec` |
//! | [`SetOf`] | `Vec` + `FxHashSet` index |
//! | [`MapOf`] | `Vec` + `FxHashMap` index |
//! | [`Tuple`] | `SmallVec` |
//! | [`Vector`] | `Vec` |

mod config;
mod dlist;
mod dqueue;
mod element;
mod map;
mod pqueue;
mod queue;
mod set;
mod slist;
mod stack;
mod tuple;
mod vector;

pub use config::{CollectionConfig, INITIAL_CAPACITY};
pub use dlist::DList;
pub use dqueue::DQueue;
pub use map::MapOf;
pub use pqueue::PQueue;
pub use queue::Queue;
pub use set::SetOf;
pub use slist::SList;
pub use stack::Stack;
pub use tuple::Tuple;
pub use vector::Vector;

pub use tofu_types::TypeTag;
pub use tofu_value::TaggedValue;
