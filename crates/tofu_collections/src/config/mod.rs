//! Construction settings for array-backed containers.

use tofu_types::TypePolicy;

/// Slots reserved up front by array-backed containers.
pub const INITIAL_CAPACITY: usize = 10;

/// Settings accepted by `with_config` constructors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CollectionConfig {
    /// Elements to reserve at construction.
    pub initial_capacity: usize,
    /// How the element type identifier is resolved.
    pub type_policy: TypePolicy,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        CollectionConfig {
            initial_capacity: INITIAL_CAPACITY,
            type_policy: TypePolicy::Permissive,
        }
    }
}

impl CollectionConfig {
    /// Default capacity, rejecting unknown element types.
    pub fn strict() -> Self {
        CollectionConfig {
            type_policy: TypePolicy::Strict,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_capacity(self, initial_capacity: usize) -> Self {
        CollectionConfig {
            initial_capacity,
            ..self
        }
    }
}
