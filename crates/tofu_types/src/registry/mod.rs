//! Identifier lookup for type tags.
//!
//! Resolution is case-sensitive exact matching against the canonical
//! identifier table. Two policies are offered:
//!
//! - [`TypePolicy::Permissive`]: unknown or absent identifiers become `any`.
//!   This is what value construction uses.
//! - [`TypePolicy::Strict`]: unknown identifiers are reported as
//!   [`UnrecognizedType`] so callers can catch typos.

use std::fmt;

use crate::tag::TypeTag;

/// How to treat identifiers that name no known tag.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum TypePolicy {
    /// Fall back to `TypeTag::Any`.
    #[default]
    Permissive,
    /// Reject with `UnrecognizedType`.
    Strict,
}

/// An identifier that matched no canonical type identifier.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnrecognizedType {
    /// The identifier as given (empty when the input was absent).
    pub identifier: String,
}

impl fmt::Display for UnrecognizedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized type identifier: {:?}", self.identifier)
    }
}

impl std::error::Error for UnrecognizedType {}

/// Exact lookup without fallback.
pub fn lookup(identifier: &str) -> Option<TypeTag> {
    TypeTag::ALL.iter().copied().find(|tag| tag.id() == identifier)
}

/// Resolve an identifier, falling back to `any` when it is unknown or absent.
///
/// Never fails.
pub fn tag_for(identifier: Option<&str>) -> TypeTag {
    match identifier.and_then(lookup) {
        Some(tag) => tag,
        None => {
            tracing::debug!(
                identifier = identifier.unwrap_or("<absent>"),
                "unrecognized type identifier, using `any`"
            );
            TypeTag::Any
        }
    }
}

/// Resolve an identifier under the given policy.
pub fn resolve(identifier: Option<&str>, policy: TypePolicy) -> Result<TypeTag, UnrecognizedType> {
    match policy {
        TypePolicy::Permissive => Ok(tag_for(identifier)),
        TypePolicy::Strict => identifier.and_then(lookup).ok_or_else(|| UnrecognizedType {
            identifier: identifier.unwrap_or_default().to_string(),
        }),
    }
}

/// Display name of a tag.
#[inline]
pub fn name_of(tag: TypeTag) -> &'static str {
    tag.name()
}

/// Description of a tag.
#[inline]
pub fn description_of(tag: TypeTag) -> &'static str {
    tag.description()
}
