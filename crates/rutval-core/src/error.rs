//! # Validation Errors
//!
//! Failure taxonomy for RUT validation, built with `thiserror`. Every
//! failure is a value carried in a result — nothing in this crate panics
//! or escalates past its own return value.
//!
//! Messages are the user-visible Spanish strings rendered by entry forms
//! and import flows; each variant carries the diagnostic context a caller
//! needs to act on the rejection without re-parsing the message.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Reasons a raw identifier fails validation.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// Cleaned input length outside the accepted [8, 9] range.
    #[error("el RUT debe tener entre 8 y 9 caracteres, se recibieron {length}")]
    InvalidLength {
        /// Character count after separators and whitespace are stripped.
        length: usize,
    },

    /// The digit body contains a non-digit character.
    #[error("el cuerpo del RUT debe contener solo dígitos")]
    BodyNotNumeric,

    /// The trailing character is not a digit or the letter K.
    #[error("el dígito verificador debe ser un número del 0 al 9 o la letra K, se recibió '{found}'")]
    InvalidCheckChar {
        /// The character found in the verification position.
        found: char,
    },

    /// The supplied verification character does not match the one computed
    /// from the body. The expected character is surfaced to the user.
    #[error("dígito verificador incorrecto, debería ser {expected}")]
    CheckDigitMismatch {
        /// Verification character computed from the body.
        expected: char,
        /// Verification character supplied in the input.
        found: char,
    },
}

impl Serialize for ValidationError {
    /// Serializes as the rendered message string, so JSON consumers see
    /// `"error": "<human-readable reason>"` rather than a tagged enum.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
