//! The tagged value ("tofu").
//!
//! A `TaggedValue` is a runtime type tag plus the value's canonical text.
//! The text is the single source of truth: numbers are stored as decimal
//! (or hex/octal) strings and only parsed on demand through [`TypedValue`].
//!
//! # Ownership
//!
//! A value exclusively owns its payload and attribute strings. `Clone` is a
//! deep copy; [`TaggedValue::take`] moves the contents out and leaves the
//! source in the neutral state (tag `any`, empty strings), which is always
//! safe to drop or destroy again.
//!
//! # Equality
//!
//! Two values are equal iff their tags match and their payloads are equal
//! byte for byte. `"042"` and `"42"` are different `i32` values. Attributes
//! and the mutable flag never take part in equality, hashing, or ordering.

mod typed;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use tofu_types::{resolve, tag_for, TypePolicy, TypeTag};

use crate::compare::compare;
use crate::errors::{immutable_value, TofuResult};

pub use typed::TypedValue;

/// Descriptive metadata carried by a value.
///
/// Defaults to the tag's display name, description, and identifier, but can
/// be overridden independently of the tag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name.
    pub name: String,
    /// Attribute description.
    pub description: String,
    /// Attribute identifier.
    pub id: String,
}

impl Attribute {
    /// Create an attribute from its three fields.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Attribute {
            name: name.into(),
            description: description.into(),
            id: id.into(),
        }
    }

    /// The default attribute for a tag.
    pub fn for_tag(tag: TypeTag) -> Self {
        Attribute::new(tag.name(), tag.description(), tag.id())
    }
}

/// A dynamically typed value: tag, textual payload, mutability, metadata.
#[derive(Clone, Debug)]
pub struct TaggedValue {
    tag: TypeTag,
    payload: String,
    mutable: bool,
    attribute: Attribute,
}

impl Default for TaggedValue {
    /// The neutral value: `any`, empty payload, mutable, empty attribute.
    fn default() -> Self {
        TaggedValue {
            tag: TypeTag::Any,
            payload: String::new(),
            mutable: true,
            attribute: Attribute::default(),
        }
    }
}

// Construction

impl TaggedValue {
    /// Create a value from a type identifier and text, tolerating absence.
    ///
    /// Unknown or absent identifiers become `any`; an absent value becomes
    /// the empty string. Never fails.
    pub fn create(type_id: Option<&str>, value: Option<&str>) -> Self {
        Self::with_tag(tag_for(type_id), value.unwrap_or_default())
    }

    /// Create a value from a type identifier and text.
    ///
    /// Unknown identifiers become `any`.
    pub fn new(type_id: &str, value: impl Into<String>) -> Self {
        Self::with_tag(tag_for(Some(type_id)), value)
    }

    /// Create a value, rejecting unknown type identifiers.
    pub fn try_new(type_id: &str, value: impl Into<String>) -> TofuResult<Self> {
        let tag = resolve(Some(type_id), TypePolicy::Strict)?;
        Ok(Self::with_tag(tag, value))
    }

    /// Create a value from a resolved tag.
    pub fn with_tag(tag: TypeTag, value: impl Into<String>) -> Self {
        TaggedValue {
            tag,
            payload: value.into(),
            mutable: true,
            attribute: Attribute::for_tag(tag),
        }
    }

    /// Render a typed value into its canonical text form.
    pub fn from_typed(typed: &TypedValue) -> Self {
        Self::with_tag(typed.tag(), typed.to_canonical())
    }
}

// Accessors

impl TaggedValue {
    /// The runtime type tag.
    #[inline]
    pub fn tag(&self) -> TypeTag {
        self.tag
    }

    /// Canonical identifier of the tag (e.g. `"i32"`).
    #[inline]
    pub fn type_id(&self) -> &'static str {
        self.tag.id()
    }

    /// Display name of the tag.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.tag.name()
    }

    /// Description of the tag.
    #[inline]
    pub fn type_info(&self) -> &'static str {
        self.tag.description()
    }

    /// The textual payload.
    #[inline]
    pub fn value(&self) -> &str {
        &self.payload
    }

    #[inline]
    pub fn is_mutable(&self) -> bool {
        self.mutable
    }

    #[inline]
    pub fn attribute(&self) -> &Attribute {
        &self.attribute
    }

    /// Parse the payload according to the tag.
    pub fn typed(&self) -> TofuResult<TypedValue> {
        TypedValue::parse(self.tag, &self.payload)
    }

    /// Check whether this value is in the neutral (moved-from) state.
    pub fn is_neutral(&self) -> bool {
        self.tag == TypeTag::Any
            && self.payload.is_empty()
            && self.attribute == Attribute::default()
    }
}

// Mutation

impl TaggedValue {
    /// Replace the payload.
    ///
    /// Fails with `ImmutableValue` when the mutable flag is off; the payload
    /// is left untouched in that case.
    pub fn set_value(&mut self, value: impl Into<String>) -> TofuResult<()> {
        if !self.mutable {
            tracing::debug!(tag = %self.tag, "rejected set_value on immutable value");
            return Err(immutable_value());
        }
        self.payload = value.into();
        Ok(())
    }

    pub fn set_mutable(&mut self, mutable: bool) {
        self.mutable = mutable;
    }

    /// Change the tag, keeping payload and attribute.
    pub fn retag(&mut self, tag: TypeTag) -> TofuResult<()> {
        if !self.mutable {
            tracing::debug!(from = %self.tag, to = %tag, "rejected retag on immutable value");
            return Err(immutable_value());
        }
        self.tag = tag;
        Ok(())
    }

    /// Replace all three attribute fields.
    pub fn set_attribute(&mut self, name: &str, description: &str, id: &str) {
        self.attribute = Attribute::new(name, description, id);
    }

    /// Deep-copy tag, payload, mutable flag, and attribute from `src`.
    pub fn copy_from(&mut self, src: &TaggedValue) {
        self.clone_from(src);
    }

    /// Move the contents out, leaving `self` neutral.
    pub fn take(&mut self) -> TaggedValue {
        std::mem::take(self)
    }

    /// Release payload and attribute storage and return to the neutral state.
    ///
    /// Idempotent.
    pub fn destroy(&mut self) {
        *self = TaggedValue::default();
    }
}

// Comparison

impl TaggedValue {
    /// Structural equality: same tag and byte-identical payload.
    #[inline]
    pub fn equals(&self, other: &TaggedValue) -> bool {
        self.tag == other.tag && self.payload == other.payload
    }
}

impl PartialEq for TaggedValue {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for TaggedValue {}

impl Hash for TaggedValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tag.hash(state);
        self.payload.hash(state);
    }
}

impl PartialOrd for TaggedValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TaggedValue {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

// Display

impl TaggedValue {
    /// Multi-line diagnostic dump.
    ///
    /// Field order is fixed: `Type`, `Value`, `Attribute Name`,
    /// `Description`, `ID`.
    pub fn render(&self) -> String {
        format!(
            "Type: {}\nValue: {}\nAttribute Name: {}\nDescription: {}\nID: {}\n",
            self.type_name(),
            self.payload,
            self.attribute.name,
            self.attribute.description,
            self.attribute.id,
        )
    }

    /// Print [`render`](Self::render) to standard output.
    pub fn display(&self) {
        print!("{}", self.render());
    }
}

impl fmt::Display for TaggedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.payload)
    }
}
