//! Element typing and growth helpers shared by every container.

use std::collections::VecDeque;

use tofu_types::{resolve, tag_for, TypePolicy, TypeTag};
use tofu_value::{allocation_failure_from, type_mismatch, TaggedValue, TofuResult};

/// Element tag for a container, permissive.
pub(crate) fn element_tag(type_id: &str) -> TypeTag {
    tag_for(Some(type_id))
}

/// Element tag for a container under `policy`.
pub(crate) fn resolve_element_tag(type_id: &str, policy: TypePolicy) -> TofuResult<TypeTag> {
    Ok(resolve(Some(type_id), policy)?)
}

/// Build an element of the container's type from text.
#[inline]
pub(crate) fn make(tag: TypeTag, text: &str) -> TaggedValue {
    TaggedValue::with_tag(tag, text)
}

/// Accept `value` into a container of `expected` elements.
pub(crate) fn admit(expected: TypeTag, value: TaggedValue) -> TofuResult<TaggedValue> {
    if expected == TypeTag::Any || value.tag() == expected {
        Ok(value)
    } else {
        tracing::debug!(%expected, got = %value.tag(), "rejected element of wrong type");
        Err(type_mismatch(expected, value.tag()))
    }
}

/// Reserve room for `additional` more elements.
pub(crate) fn reserve<T>(items: &mut Vec<T>, additional: usize) -> TofuResult<()> {
    items
        .try_reserve(additional)
        .map_err(|e| allocation_failure_from(additional, &e))
}

/// Reserve room for `additional` more elements.
pub(crate) fn reserve_deque<T>(items: &mut VecDeque<T>, additional: usize) -> TofuResult<()> {
    items
        .try_reserve(additional)
        .map_err(|e| allocation_failure_from(additional, &e))
}

/// A `Vec` with `capacity` slots reserved.
pub(crate) fn vec_with_capacity<T>(capacity: usize) -> TofuResult<Vec<T>> {
    let mut items = Vec::new();
    reserve(&mut items, capacity)?;
    Ok(items)
}
