//! Dynamically tagged values for Rust.
//!
//! A [`TaggedValue`] pairs a runtime [`TypeTag`] with the value's canonical
//! text. On top of it sit an ordering ([`compare`]), slice algorithms
//! ([`algorithm`]), and homogeneous containers ([`collections`]).
//!
//! ```
//! use tofu::{algorithm, TaggedValue};
//!
//! let mut names: Vec<_> = ["gamma", "alpha", "beta"]
//!     .into_iter()
//!     .map(|n| TaggedValue::new("cstr", n))
//!     .collect();
//! algorithm::sort(&mut names, true);
//! assert_eq!(names[0].value(), "alpha");
//! ```

use std::sync::Once;

pub use tofu_algorithm as algorithm;
pub use tofu_collections as collections;
pub use tofu_types as types;

pub use tofu_collections::{
    CollectionConfig, DList, DQueue, MapOf, PQueue, Queue, SetOf, SList, Stack, Tuple, Vector,
};
pub use tofu_types::{lookup, tag_for, TypePolicy, TypeTag};
pub use tofu_value::{
    compare, compare_descending, nullable, Attribute, CompareFn, TaggedValue, TofuError,
    TofuErrorKind, TofuResult, TypedValue,
};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber for debug output.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call multiple times.
/// Enable with `RUST_LOG=tofu_value=debug` or `RUST_LOG=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
