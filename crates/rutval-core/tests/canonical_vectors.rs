//! End-to-end vectors exercising the public API the way form validators
//! and importers consume it: raw entry in, result or typed identifier out.

use rutval_core::{clean, format, validate, Rut, ValidationError};

/// (raw input, expected canonical rendering, expected validity)
const VECTORS: &[(&str, &str, bool)] = &[
    ("12345678-5", "12345678-5", true),
    ("12.345.678-5", "12345678-5", true),
    ("  123456785 ", "12345678-5", true),
    ("11.111.111-1", "11111111-1", true),
    ("1234567-4", "1234567-4", true),
    ("01234567-4", "01234567-4", true),
    ("20347878-k", "20347878-K", true),
    ("7654324-0", "7654324-0", true),
    ("12345678-9", "12345678-9", false),
    ("20347878-1", "20347878-1", false),
];

#[test]
fn vectors_validate_and_canonicalize() {
    for (raw, formatted, valid) in VECTORS {
        let result = validate(raw);
        assert_eq!(result.valid, *valid, "validity of {raw:?}");
        assert_eq!(&result.formatted, formatted, "rendering of {raw:?}");
        assert_eq!(result.error.is_none(), *valid, "error presence for {raw:?}");
    }
}

#[test]
fn strict_and_lenient_paths_agree() {
    for (raw, formatted, valid) in VECTORS {
        match Rut::parse(raw) {
            Ok(rut) => {
                assert!(*valid, "parse accepted {raw:?} but validate rejects it");
                assert_eq!(&rut.canonical(), formatted);
            }
            Err(err) => {
                assert!(!*valid, "parse rejected {raw:?} with {err}");
                assert_eq!(validate(raw).error, Some(err));
            }
        }
    }
}

#[test]
fn format_never_verifies() {
    // Both the consistent and the inconsistent verifier render the same way.
    assert_eq!(format("12.345.678-5"), "12345678-5");
    assert_eq!(format("12.345.678-9"), "12345678-9");
}

#[test]
fn clean_then_format_matches_direct_format() {
    for (raw, _, _) in VECTORS {
        assert_eq!(format(&clean(raw)), format(raw));
    }
}

#[test]
fn result_json_lines_shape() {
    let ok = serde_json::to_value(validate("12.345.678-5")).unwrap();
    assert_eq!(
        ok,
        serde_json::json!({"valid": true, "formatted": "12345678-5"})
    );

    let bad = serde_json::to_value(validate("12345678-9")).unwrap();
    assert_eq!(bad["valid"], serde_json::json!(false));
    assert!(bad["error"].as_str().unwrap().contains("debería ser 5"));
}

#[test]
fn rut_deserialization_guards_stored_data() {
    // A row imported earlier keeps its guarantee when read back.
    let rut: Rut = serde_json::from_str("\"20347878-K\"").unwrap();
    assert_eq!(rut.body(), "20347878");
    assert_eq!(rut.check_char(), 'K');

    let corrupted: Result<Rut, _> = serde_json::from_str("\"20347878-3\"");
    assert!(corrupted.is_err());
}

#[test]
fn mismatch_error_surfaces_expected_char() {
    let err = Rut::parse("11111111-9").unwrap_err();
    match err {
        ValidationError::CheckDigitMismatch { expected, found } => {
            assert_eq!(expected, '1');
            assert_eq!(found, '9');
        }
        other => panic!("expected mismatch, got {other:?}"),
    }
}
