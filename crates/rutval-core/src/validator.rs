//! # Form-Facing Validation Operations
//!
//! The never-failing entry points consumed by field validators and bulk
//! importers: [`clean()`], [`format()`] and [`validate()`].
//!
//! ## Failure Semantics
//!
//! [`validate()`] reports every malformed input through the returned
//! [`ValidationResult`] — it has no panic or `Err` path. The `formatted`
//! field is always populated: with the canonical `body-verifier` rendering
//! once a split point exists, and with the untouched input before that, so
//! a form can always echo back what was parsed.

use serde::Serialize;

use crate::error::ValidationError;
use crate::identifier::Rut;

/// Outcome of validating one raw identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Whether the verification character is consistent with the body.
    pub valid: bool,
    /// Best-effort canonical rendering; the original input when no
    /// reliable split point exists.
    pub formatted: String,
    /// The rejection reason, absent on success. Serializes as the
    /// human-readable message string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ValidationError>,
}

impl ValidationResult {
    /// A passing result with its canonical rendering.
    pub fn accepted(formatted: impl Into<String>) -> Self {
        Self {
            valid: true,
            formatted: formatted.into(),
            error: None,
        }
    }

    /// A failing result carrying the rejection reason.
    pub fn rejected(formatted: impl Into<String>, error: ValidationError) -> Self {
        Self {
            valid: false,
            formatted: formatted.into(),
            error: Some(error),
        }
    }
}

/// Strip thousands separators, hyphens and whitespace, uppercasing letters.
///
/// Pure string transform with no failure modes; the result of cleaning
/// `"12.345.678-k"` is `"123456785K"`-style raw material for splitting.
pub fn clean(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '.' && *c != '-' && !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Reassemble a raw identifier into `body-verifier` form without verifying
/// the checksum.
///
/// Display-only convenience: the split happens even when the body is
/// non-numeric or the length is out of range. Input whose cleaned form is
/// shorter than 2 characters is returned unchanged — there is no split
/// point.
pub fn format(raw: &str) -> String {
    let cleaned = clean(raw);
    let mut chars = cleaned.chars();
    let Some(check) = chars.next_back() else {
        return raw.to_string();
    };
    let body: String = chars.collect();
    if body.is_empty() {
        return raw.to_string();
    }
    format!("{body}-{check}")
}

/// Validate a raw, user-entered identifier.
///
/// Cleans the input, splits off the verification character, checks the
/// body shape and verifier alphabet, then compares the verifier against
/// the weighted modulo-11 computation over the body. All failure modes
/// come back as data; this function never panics.
///
/// `formatted` falls back to the original input for length, body-shape and
/// alphabet failures. From the moment a plausible split exists — checksum
/// mismatch included — it is the canonical `body-verifier` rendering.
pub fn validate(raw: &str) -> ValidationResult {
    match Rut::parse(raw) {
        Ok(rut) => ValidationResult::accepted(rut.canonical()),
        Err(error @ ValidationError::CheckDigitMismatch { .. }) => {
            ValidationResult::rejected(format(raw), error)
        }
        Err(error) => ValidationResult::rejected(raw, error),
    }
}
