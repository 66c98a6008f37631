//! Runtime type tag for tagged values.
//!
//! Every tagged value carries a `TypeTag` identifying the semantic kind of
//! its textual payload. The tag indexes three static tables that must stay
//! aligned with the enum discriminants:
//!
//! - `TYPE_IDS`: canonical lowercase identifier (`"i32"`, `"cstr"`, ...)
//! - `TYPE_NAMES`: human-readable display name
//! - `TYPE_INFO`: one-line description
//!
//! # Tag Order
//!
//! Discriminant order is observable: values of different tags compare by
//! tag ordinal, so reordering variants changes sort results.
//! - 0-7: fixed-width integers (signed, then unsigned)
//! - 8-9: radix-encoded integers (hex, octal)
//! - 10-11: floating point
//! - 12-15: strings and characters
//! - 16-17: bool and size
//! - 18: catch-all `any`

use std::fmt;

/// Number of type tags (length of every lookup table).
pub const TAG_COUNT: usize = 19;

/// Canonical identifier per tag, index-aligned with `TypeTag`.
const TYPE_IDS: [&str; TAG_COUNT] = [
    "i8", "i16", "i32", "i64", "u8", "u16", "u32", "u64", "hex", "octal", "float", "double",
    "wstr", "cstr", "cchar", "wchar", "bool", "size", "any",
];

/// Display name per tag, index-aligned with `TypeTag`.
const TYPE_NAMES: [&str; TAG_COUNT] = [
    "Signed 8-bit Integer",
    "Signed 16-bit Integer",
    "Signed 32-bit Integer",
    "Signed 64-bit Integer",
    "Unsigned 8-bit Integer",
    "Unsigned 16-bit Integer",
    "Unsigned 32-bit Integer",
    "Unsigned 64-bit Integer",
    "Hexadecimal",
    "Octal",
    "Float",
    "Double",
    "Wide String",
    "C String",
    "Char",
    "Wide Char",
    "Boolean",
    "Size",
    "Any",
];

/// Description per tag, index-aligned with `TypeTag`.
const TYPE_INFO: [&str; TAG_COUNT] = [
    "An 8-bit signed integer value",
    "A 16-bit signed integer value",
    "A 32-bit signed integer value",
    "A 64-bit signed integer value",
    "An 8-bit unsigned integer value",
    "A 16-bit unsigned integer value",
    "A 32-bit unsigned integer value",
    "A 64-bit unsigned integer value",
    "A hexadecimal value",
    "An octal value",
    "A single-precision floating point value",
    "A double-precision floating point value",
    "A wide string value",
    "A C string value",
    "A character value",
    "A wide character value",
    "A boolean value",
    "A size value",
    "A generic value",
];

/// Returned by [`name_of_ordinal`] for an ordinal outside the table.
pub const UNKNOWN_NAME: &str = "Unknown Type";

/// Returned by [`description_of_ordinal`] for an ordinal outside the table.
pub const UNKNOWN_INFO: &str = "No type info available.";

/// Semantic kind of a tagged value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Default)]
#[repr(u8)]
pub enum TypeTag {
    // === Fixed-width integers (0-7) ===
    /// Signed 8-bit integer.
    I8 = 0,
    /// Signed 16-bit integer.
    I16 = 1,
    /// Signed 32-bit integer.
    I32 = 2,
    /// Signed 64-bit integer.
    I64 = 3,
    /// Unsigned 8-bit integer.
    U8 = 4,
    /// Unsigned 16-bit integer.
    U16 = 5,
    /// Unsigned 32-bit integer.
    U32 = 6,
    /// Unsigned 64-bit integer.
    U64 = 7,

    // === Radix-encoded integers (8-9) ===
    /// Hexadecimal integer text.
    Hex = 8,
    /// Octal integer text.
    Octal = 9,

    // === Floating point (10-11) ===
    /// Single-precision float.
    Float = 10,
    /// Double-precision float.
    Double = 11,

    // === Text (12-15) ===
    /// Wide (Unicode) string.
    WStr = 12,
    /// Narrow (byte) string.
    CStr = 13,
    /// Narrow (single byte) character.
    CChar = 14,
    /// Wide (Unicode scalar) character.
    WChar = 15,

    // === Misc (16-18) ===
    /// Boolean.
    Bool = 16,
    /// Platform size.
    Size = 17,
    /// Catch-all; also the fallback for unrecognized identifiers.
    #[default]
    Any = 18,
}

impl TypeTag {
    /// All tags in discriminant order.
    pub const ALL: [TypeTag; TAG_COUNT] = [
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::Hex,
        Self::Octal,
        Self::Float,
        Self::Double,
        Self::WStr,
        Self::CStr,
        Self::CChar,
        Self::WChar,
        Self::Bool,
        Self::Size,
        Self::Any,
    ];

    /// Position of this tag in the lookup tables.
    #[inline]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Tag for a table position, if in range.
    #[inline]
    pub const fn from_ordinal(ordinal: usize) -> Option<Self> {
        if ordinal < TAG_COUNT {
            Some(Self::ALL[ordinal])
        } else {
            None
        }
    }

    /// Canonical lowercase identifier (e.g. `"i32"`).
    #[inline]
    pub const fn id(self) -> &'static str {
        TYPE_IDS[self as usize]
    }

    /// Human-readable display name (e.g. `"Signed 32-bit Integer"`).
    #[inline]
    pub const fn name(self) -> &'static str {
        TYPE_NAMES[self as usize]
    }

    /// One-line description.
    #[inline]
    pub const fn description(self) -> &'static str {
        TYPE_INFO[self as usize]
    }

    /// Check if this tag is a fixed-width signed integer.
    #[inline]
    pub const fn is_signed_int(self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64)
    }

    /// Check if this tag is a fixed-width unsigned integer.
    #[inline]
    pub const fn is_unsigned_int(self) -> bool {
        matches!(self, Self::U8 | Self::U16 | Self::U32 | Self::U64)
    }

    /// Check if this tag holds an integer in any encoding.
    #[inline]
    pub const fn is_integer(self) -> bool {
        (self as u8) <= (Self::Octal as u8) || matches!(self, Self::Size)
    }

    /// Check if this tag holds a floating point number.
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float | Self::Double)
    }

    /// Check if this tag holds text (string or character).
    #[inline]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::WStr | Self::CStr | Self::CChar | Self::WChar)
    }
}

/// Display name for a raw ordinal, tolerating out-of-range input.
pub fn name_of_ordinal(ordinal: usize) -> &'static str {
    TypeTag::from_ordinal(ordinal).map_or(UNKNOWN_NAME, TypeTag::name)
}

/// Description for a raw ordinal, tolerating out-of-range input.
pub fn description_of_ordinal(ordinal: usize) -> &'static str {
    TypeTag::from_ordinal(ordinal).map_or(UNKNOWN_INFO, TypeTag::description)
}

impl fmt::Debug for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeTag::{}", self.id())
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// Compile-time size assertion: TypeTag must be exactly 1 byte
const _: () = assert!(std::mem::size_of::<TypeTag>() == 1);
