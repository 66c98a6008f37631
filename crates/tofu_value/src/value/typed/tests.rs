#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use crate::errors::TofuErrorKind;

#[test]
fn parses_fixed_width_integers() {
    assert_eq!(TypedValue::parse(TypeTag::I8, "-128").unwrap(), TypedValue::I8(-128));
    assert_eq!(TypedValue::parse(TypeTag::U16, "65535").unwrap(), TypedValue::U16(65535));
    assert_eq!(
        TypedValue::parse(TypeTag::I64, "-9000000000").unwrap(),
        TypedValue::I64(-9_000_000_000)
    );
}

#[test]
fn integer_overflow_is_a_parse_error() {
    let err = TypedValue::parse(TypeTag::I8, "300").unwrap_err();
    assert_eq!(
        err.kind,
        TofuErrorKind::ParseError {
            type_id: "i8",
            payload: "300".to_string()
        }
    );
    assert!(TypedValue::parse(TypeTag::U8, "-1").is_err());
}

#[test]
fn hex_accepts_optional_prefix() {
    assert_eq!(TypedValue::parse(TypeTag::Hex, "0xff").unwrap(), TypedValue::Hex(255));
    assert_eq!(TypedValue::parse(TypeTag::Hex, "0XFF").unwrap(), TypedValue::Hex(255));
    assert_eq!(TypedValue::parse(TypeTag::Hex, "1a").unwrap(), TypedValue::Hex(26));
    assert!(TypedValue::parse(TypeTag::Hex, "0x").is_err());
    assert!(TypedValue::parse(TypeTag::Hex, "+1").is_err());
    assert!(TypedValue::parse(TypeTag::Hex, "zz").is_err());
}

#[test]
fn octal_accepts_c_and_rust_prefixes() {
    assert_eq!(TypedValue::parse(TypeTag::Octal, "0755").unwrap(), TypedValue::Octal(493));
    assert_eq!(TypedValue::parse(TypeTag::Octal, "0o17").unwrap(), TypedValue::Octal(15));
    assert!(TypedValue::parse(TypeTag::Octal, "8").is_err());
}

#[test]
fn floats() {
    assert_eq!(TypedValue::parse(TypeTag::Float, "1.5").unwrap(), TypedValue::Float(1.5));
    assert_eq!(
        TypedValue::parse(TypeTag::Double, "-2.25").unwrap(),
        TypedValue::Double(-2.25)
    );
    assert!(TypedValue::parse(TypeTag::Double, "one").is_err());
}

#[test]
fn characters() {
    assert_eq!(TypedValue::parse(TypeTag::CChar, "a").unwrap(), TypedValue::CChar(b'a'));
    assert!(TypedValue::parse(TypeTag::CChar, "ab").is_err());
    assert!(TypedValue::parse(TypeTag::CChar, "é").is_err());
    assert_eq!(TypedValue::parse(TypeTag::WChar, "é").unwrap(), TypedValue::WChar('é'));
    assert!(TypedValue::parse(TypeTag::WChar, "").is_err());
}

#[test]
fn strings() {
    assert_eq!(
        TypedValue::parse(TypeTag::WStr, "héllo").unwrap(),
        TypedValue::WStr("héllo".to_string())
    );
    assert!(TypedValue::parse(TypeTag::CStr, "a\0b").is_err());
    assert_eq!(
        TypedValue::parse(TypeTag::Any, "anything").unwrap(),
        TypedValue::Any("anything".to_string())
    );
}

#[test]
fn booleans() {
    assert_eq!(TypedValue::parse(TypeTag::Bool, "true").unwrap(), TypedValue::Bool(true));
    assert_eq!(TypedValue::parse(TypeTag::Bool, "0").unwrap(), TypedValue::Bool(false));
    assert!(TypedValue::parse(TypeTag::Bool, "yes").is_err());
}

#[test]
fn canonical_text() {
    assert_eq!(TypedValue::Hex(255).to_canonical(), "0xff");
    assert_eq!(TypedValue::Octal(493).to_canonical(), "0755");
    assert_eq!(TypedValue::Octal(0).to_canonical(), "0");
    assert_eq!(TypedValue::CChar(b'z').to_canonical(), "z");
    assert_eq!(TypedValue::Bool(false).to_canonical(), "false");
    assert_eq!(TypedValue::I32(-7).to_canonical(), "-7");
}

#[test]
fn canonical_text_parses_back() {
    let samples = [
        TypedValue::I16(-300),
        TypedValue::U64(u64::MAX),
        TypedValue::Hex(0xdead_beef),
        TypedValue::Octal(8),
        TypedValue::Double(0.1),
        TypedValue::WChar('ß'),
        TypedValue::Size(4096),
    ];
    for typed in samples {
        let text = typed.to_canonical();
        assert_eq!(TypedValue::parse(typed.tag(), &text).unwrap(), typed);
    }
}

#[test]
fn widening_accessors() {
    assert_eq!(TypedValue::U64(u64::MAX).as_i128(), Some(i128::from(u64::MAX)));
    assert_eq!(TypedValue::Hex(16).as_i128(), Some(16));
    assert_eq!(TypedValue::Float(0.5).as_f64(), Some(0.5));
    assert_eq!(TypedValue::CStr("x".into()).as_str(), Some("x"));
    assert_eq!(TypedValue::Bool(true).as_bool(), Some(true));
    assert_eq!(TypedValue::Bool(true).as_i128(), None);
}
