//! Operations over possibly-absent values.
//!
//! Every function takes `Option` handles. Read-only queries return a safe
//! default for `None`; mutating operations fail with `NullValue` naming the
//! operation; teardown and display are no-ops.

use std::cmp::Ordering;

use crate::errors::{null_value, TofuResult};
use crate::value::{Attribute, TaggedValue};

/// Payload of `value`, or `None` when absent.
pub fn get_value(value: Option<&TaggedValue>) -> Option<&str> {
    value.map(TaggedValue::value)
}

/// Replace the payload. An absent `text` stores the empty string.
pub fn set_value(value: Option<&mut TaggedValue>, text: Option<&str>) -> TofuResult<()> {
    let value = value.ok_or_else(|| null_value("set_value"))?;
    value.set_value(text.unwrap_or_default())
}

/// `false` for an absent value.
pub fn is_mutable(value: Option<&TaggedValue>) -> bool {
    value.is_some_and(TaggedValue::is_mutable)
}

pub fn set_mutable(value: Option<&mut TaggedValue>, mutable: bool) -> TofuResult<()> {
    let value = value.ok_or_else(|| null_value("set_mutable"))?;
    value.set_mutable(mutable);
    Ok(())
}

pub fn get_attribute(value: Option<&TaggedValue>) -> Option<&Attribute> {
    value.map(TaggedValue::attribute)
}

pub fn set_attribute(
    value: Option<&mut TaggedValue>,
    name: &str,
    description: &str,
    id: &str,
) -> TofuResult<()> {
    let value = value.ok_or_else(|| null_value("set_attribute"))?;
    value.set_attribute(name, description, id);
    Ok(())
}

/// `false` when either side is absent.
pub fn equals(a: Option<&TaggedValue>, b: Option<&TaggedValue>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.equals(b),
        _ => false,
    }
}

/// Absent sorts before present; two absent values are equal.
pub fn compare(a: Option<&TaggedValue>, b: Option<&TaggedValue>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => crate::compare::compare(a, b),
    }
}

/// Deep-copy `src` into `dest`.
pub fn copy(dest: Option<&mut TaggedValue>, src: Option<&TaggedValue>) -> TofuResult<()> {
    match (dest, src) {
        (Some(dest), Some(src)) => {
            dest.copy_from(src);
            Ok(())
        }
        _ => Err(null_value("copy")),
    }
}

/// Move out of `value`, leaving it neutral.
pub fn take(value: Option<&mut TaggedValue>) -> Option<TaggedValue> {
    value.map(TaggedValue::take)
}

pub fn destroy(value: Option<&mut TaggedValue>) {
    if let Some(value) = value {
        value.destroy();
    }
}

pub fn display(value: Option<&TaggedValue>) {
    if let Some(value) = value {
        value.display();
    }
}

#[cfg(test)]
mod tests;
