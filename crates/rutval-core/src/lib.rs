//! # rutval-core — RUT Validation and Canonicalization
//!
//! This crate validates and canonicalizes the Chilean RUT (Rol Único
//! Tributario), the checksummed identifier citizens and companies type into
//! every form of the product. It is the single source of truth for the
//! verification-character algorithm and the canonical `body-verifier`
//! rendering.
//!
//! ## Key Design Principles
//!
//! 1. **Failures are data, not control flow.** [`validate()`] never panics
//!    and never returns `Err` — every malformed input yields a
//!    [`ValidationResult`] whose `error` field explains the rejection.
//!    Field-level form validators and bulk importers need the reason as a
//!    value they can render, not an exception to catch.
//!
//! 2. **Newtype for the canonical identifier.** [`Rut`] can only be
//!    constructed through checksum-verified parsing. Code holding a `Rut`
//!    holds a proven-consistent identifier; no bare strings.
//!
//! 3. **One checksum path.** The verification character is computed in
//!    exactly one place, [`checksum::verification_char()`], used by both
//!    the strict and the form-facing entry points.
//!
//! ## Crate Policy
//!
//! - No dependencies on other workspace crates (this is the leaf).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All operations are pure: no I/O, no shared state, safe to call from
//!   any number of threads without coordination.

pub mod checksum;
pub mod error;
pub mod identifier;
pub mod validator;

// Re-export primary types for ergonomic imports.
pub use checksum::verification_char;
pub use error::ValidationError;
pub use identifier::Rut;
pub use validator::{clean, format, validate, ValidationResult};
