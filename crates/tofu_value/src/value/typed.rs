//! Strongly typed view of a tagged value's payload.
//!
//! The textual payload stays authoritative; `TypedValue` is produced on
//! demand by parsing it according to the tag, and can be rendered back into
//! canonical text.
//!
//! # Accepted Text
//!
//! - Fixed-width integers, floats, size: Rust `FromStr` syntax for the width.
//! - `hex`: optional `0x`/`0X` prefix, then hex digits. Renders as `0x..`.
//! - `octal`: optional `0o`/`0O` prefix, then octal digits (a C-style
//!   leading `0` is just a digit). Renders with a leading `0`.
//! - `cstr`: any text without an interior NUL.
//! - `cchar`: exactly one ASCII character. `wchar`: exactly one `char`.
//! - `bool`: `true`/`false`/`1`/`0`.

use tofu_types::TypeTag;

use crate::errors::{parse_error, TofuResult};

/// A payload parsed into its tag's native Rust type.
#[derive(Clone, Debug, PartialEq)]
pub enum TypedValue {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Hex(u64),
    Octal(u64),
    Float(f32),
    Double(f64),
    WStr(String),
    CStr(String),
    CChar(u8),
    WChar(char),
    Bool(bool),
    Size(usize),
    Any(String),
}

impl TypedValue {
    /// Parse `payload` as the typed form of `tag`.
    pub fn parse(tag: TypeTag, payload: &str) -> TofuResult<Self> {
        let err = || parse_error(tag, payload);
        let typed = match tag {
            TypeTag::I8 => TypedValue::I8(payload.parse().map_err(|_| err())?),
            TypeTag::I16 => TypedValue::I16(payload.parse().map_err(|_| err())?),
            TypeTag::I32 => TypedValue::I32(payload.parse().map_err(|_| err())?),
            TypeTag::I64 => TypedValue::I64(payload.parse().map_err(|_| err())?),
            TypeTag::U8 => TypedValue::U8(payload.parse().map_err(|_| err())?),
            TypeTag::U16 => TypedValue::U16(payload.parse().map_err(|_| err())?),
            TypeTag::U32 => TypedValue::U32(payload.parse().map_err(|_| err())?),
            TypeTag::U64 => TypedValue::U64(payload.parse().map_err(|_| err())?),
            TypeTag::Hex => {
                let digits = strip_radix_prefix(payload, "0x", "0X");
                TypedValue::Hex(parse_radix(digits, 16).ok_or_else(err)?)
            }
            TypeTag::Octal => {
                let digits = strip_radix_prefix(payload, "0o", "0O");
                TypedValue::Octal(parse_radix(digits, 8).ok_or_else(err)?)
            }
            TypeTag::Float => TypedValue::Float(payload.parse().map_err(|_| err())?),
            TypeTag::Double => TypedValue::Double(payload.parse().map_err(|_| err())?),
            TypeTag::WStr => TypedValue::WStr(payload.to_string()),
            TypeTag::CStr => {
                if payload.contains('\0') {
                    return Err(err());
                }
                TypedValue::CStr(payload.to_string())
            }
            TypeTag::CChar => match payload.as_bytes() {
                [b] if b.is_ascii() => TypedValue::CChar(*b),
                _ => return Err(err()),
            },
            TypeTag::WChar => {
                let mut chars = payload.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => TypedValue::WChar(c),
                    _ => return Err(err()),
                }
            }
            TypeTag::Bool => match payload {
                "true" | "1" => TypedValue::Bool(true),
                "false" | "0" => TypedValue::Bool(false),
                _ => return Err(err()),
            },
            TypeTag::Size => TypedValue::Size(payload.parse().map_err(|_| err())?),
            TypeTag::Any => TypedValue::Any(payload.to_string()),
        };
        Ok(typed)
    }

    /// The tag this variant belongs to.
    pub fn tag(&self) -> TypeTag {
        match self {
            TypedValue::I8(_) => TypeTag::I8,
            TypedValue::I16(_) => TypeTag::I16,
            TypedValue::I32(_) => TypeTag::I32,
            TypedValue::I64(_) => TypeTag::I64,
            TypedValue::U8(_) => TypeTag::U8,
            TypedValue::U16(_) => TypeTag::U16,
            TypedValue::U32(_) => TypeTag::U32,
            TypedValue::U64(_) => TypeTag::U64,
            TypedValue::Hex(_) => TypeTag::Hex,
            TypedValue::Octal(_) => TypeTag::Octal,
            TypedValue::Float(_) => TypeTag::Float,
            TypedValue::Double(_) => TypeTag::Double,
            TypedValue::WStr(_) => TypeTag::WStr,
            TypedValue::CStr(_) => TypeTag::CStr,
            TypedValue::CChar(_) => TypeTag::CChar,
            TypedValue::WChar(_) => TypeTag::WChar,
            TypedValue::Bool(_) => TypeTag::Bool,
            TypedValue::Size(_) => TypeTag::Size,
            TypedValue::Any(_) => TypeTag::Any,
        }
    }

    /// Canonical text form, as stored in a payload.
    pub fn to_canonical(&self) -> String {
        match self {
            TypedValue::I8(n) => n.to_string(),
            TypedValue::I16(n) => n.to_string(),
            TypedValue::I32(n) => n.to_string(),
            TypedValue::I64(n) => n.to_string(),
            TypedValue::U8(n) => n.to_string(),
            TypedValue::U16(n) => n.to_string(),
            TypedValue::U32(n) => n.to_string(),
            TypedValue::U64(n) => n.to_string(),
            TypedValue::Hex(n) => format!("0x{n:x}"),
            TypedValue::Octal(0) => "0".to_string(),
            TypedValue::Octal(n) => format!("0{n:o}"),
            TypedValue::Float(x) => x.to_string(),
            TypedValue::Double(x) => x.to_string(),
            TypedValue::WStr(s) | TypedValue::CStr(s) | TypedValue::Any(s) => s.clone(),
            TypedValue::CChar(b) => char::from(*b).to_string(),
            TypedValue::WChar(c) => c.to_string(),
            TypedValue::Bool(b) => b.to_string(),
            TypedValue::Size(n) => n.to_string(),
        }
    }

    /// Integer content widened to `i128`, for any integer-like variant.
    pub fn as_i128(&self) -> Option<i128> {
        match *self {
            TypedValue::I8(n) => Some(i128::from(n)),
            TypedValue::I16(n) => Some(i128::from(n)),
            TypedValue::I32(n) => Some(i128::from(n)),
            TypedValue::I64(n) => Some(i128::from(n)),
            TypedValue::U8(n) => Some(i128::from(n)),
            TypedValue::U16(n) => Some(i128::from(n)),
            TypedValue::U32(n) => Some(i128::from(n)),
            TypedValue::U64(n) | TypedValue::Hex(n) | TypedValue::Octal(n) => Some(i128::from(n)),
            TypedValue::Size(n) => i128::try_from(n).ok(),
            _ => None,
        }
    }

    /// Floating point content, for `float`/`double`.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            TypedValue::Float(x) => Some(f64::from(x)),
            TypedValue::Double(x) => Some(x),
            _ => None,
        }
    }

    /// Text content, for string-like variants.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TypedValue::WStr(s) | TypedValue::CStr(s) | TypedValue::Any(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Boolean content, for `bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            TypedValue::Bool(b) => Some(b),
            _ => None,
        }
    }
}

fn strip_radix_prefix<'a>(text: &'a str, lower: &str, upper: &str) -> &'a str {
    text.strip_prefix(lower)
        .or_else(|| text.strip_prefix(upper))
        .unwrap_or(text)
}

fn parse_radix(digits: &str, radix: u32) -> Option<u64> {
    // from_str_radix accepts a leading '+', which canonical text never has.
    if digits.is_empty() || digits.starts_with('+') {
        return None;
    }
    u64::from_str_radix(digits, radix).ok()
}

#[cfg(test)]
mod tests;
