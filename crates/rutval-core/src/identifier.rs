//! # RUT Value Object
//!
//! A validated Chilean RUT: digit body plus verification character,
//! immutable after construction. Holding a [`Rut`] proves the checksum was
//! verified — the constructor is the only path in.
//!
//! ## Serde
//!
//! Serializes as the canonical `body-verifier` string and deserializes
//! through [`Rut::parse()`], so any `Rut` read from JSON carries the same
//! guarantee as one parsed from user input.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::checksum::verification_char;
use crate::error::ValidationError;
use crate::validator::clean;

/// A checksum-verified RUT.
///
/// The body is 7 or 8 ASCII digits (leading zeros preserved, no numeric
/// normalization) and the verification character is one of `0-9` or `K`,
/// consistent with the weighted modulo-11 sum over the body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rut {
    body: String,
    check: char,
}

impl Rut {
    /// Parse a raw, user-entered identifier into a verified `Rut`.
    ///
    /// Accepts any mix of thousands separators, hyphens, surrounding
    /// whitespace and lowercase `k` — `"12.345.678-5"`, `" 123456785 "`
    /// and `"12345678-5"` all parse to the same value.
    ///
    /// # Errors
    ///
    /// Returns the specific [`ValidationError`] for the first failed check:
    /// cleaned length outside [8, 9], non-digit body, verification
    /// character outside `{0-9, K}`, or checksum mismatch.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let cleaned = clean(raw);
        let length = cleaned.chars().count();
        if !(8..=9).contains(&length) {
            return Err(ValidationError::InvalidLength { length });
        }

        let mut chars = cleaned.chars();
        let Some(check) = chars.next_back() else {
            return Err(ValidationError::InvalidLength { length });
        };
        let body: String = chars.collect();

        if !body.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::BodyNotNumeric);
        }
        if !check.is_ascii_digit() && check != 'K' {
            return Err(ValidationError::InvalidCheckChar { found: check });
        }

        let expected = verification_char(&body).ok_or(ValidationError::BodyNotNumeric)?;
        if check != expected {
            return Err(ValidationError::CheckDigitMismatch {
                expected,
                found: check,
            });
        }

        Ok(Self { body, check })
    }

    /// Build a `Rut` from a bare digit body, computing its verification
    /// character.
    ///
    /// This is the constructor bulk importers use when the source system
    /// stores bodies without verification characters.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::BodyNotNumeric`] when the cleaned body is
    /// empty or contains a non-digit, and [`ValidationError::InvalidLength`]
    /// when it is not 7 or 8 digits. The reported length counts the
    /// verification character the identifier would carry.
    pub fn from_body(body: &str) -> Result<Self, ValidationError> {
        let cleaned = clean(body);
        if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::BodyNotNumeric);
        }
        let digits = cleaned.chars().count();
        if !(7..=8).contains(&digits) {
            return Err(ValidationError::InvalidLength { length: digits + 1 });
        }
        let check = verification_char(&cleaned).ok_or(ValidationError::BodyNotNumeric)?;
        Ok(Self {
            body: cleaned,
            check,
        })
    }

    /// The digit body, leading zeros preserved.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The verification character: a digit or `'K'`.
    pub fn check_char(&self) -> char {
        self.check
    }

    /// Render the canonical `body-verifier` form, e.g. `"12345678-5"`.
    pub fn canonical(&self) -> String {
        format!("{}-{}", self.body, self.check)
    }
}

impl std::fmt::Display for Rut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.body, self.check)
    }
}

impl std::str::FromStr for Rut {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Rut {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rut {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
