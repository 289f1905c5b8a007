//! # Verification Character — Weighted Modulo-11 Checksum
//!
//! Computes the trailing verification character of a RUT from its digit
//! body, using the módulo 11 scheme of the Chilean civil registry.
//!
//! ## Invariant
//!
//! The computation is a total function over non-empty ASCII-digit bodies:
//! it always yields exactly one character from `{0-9, K}`. Leading zeros
//! participate in the weighted sum like any other digit.

/// Compute the expected verification character for a digit body.
///
/// Traverses `body` from the rightmost digit to the leftmost. Each digit is
/// weighted by a multiplier that starts at 2 and cycles 2, 3, 4, 5, 6, 7,
/// 2, 3, … The weighted sum is reduced modulo 11 and `11 - remainder`
/// selects the character: 11 maps to `'0'`, 10 maps to `'K'`, any other
/// value is its own decimal digit.
///
/// Returns `None` when `body` is empty or contains a non-digit character.
/// Callers check the body shape before asking for a verification character;
/// the `None` arm exists so this function never panics on arbitrary input.
pub fn verification_char(body: &str) -> Option<char> {
    if body.is_empty() {
        return None;
    }

    let mut sum: u32 = 0;
    let mut multiplier: u32 = 2;
    for c in body.chars().rev() {
        sum += c.to_digit(10)? * multiplier;
        multiplier = if multiplier == 7 { 2 } else { multiplier + 1 };
    }

    match 11 - (sum % 11) {
        11 => Some('0'),
        10 => Some('K'),
        diff => char::from_digit(diff, 10),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The mapping is total: every non-empty digit body yields exactly
        /// one character from the `{0-9, K}` alphabet.
        #[test]
        fn verification_char_total_over_digit_bodies(body in "[0-9]{1,12}") {
            let c = verification_char(&body);
            prop_assert!(c.is_some(), "no verification character for {body:?}");
            let c = c.unwrap();
            prop_assert!(c.is_ascii_digit() || c == 'K', "out of alphabet: {c:?}");
        }

        /// Same body, same character — the computation reads nothing but
        /// its input.
        #[test]
        fn verification_char_deterministic(body in "[0-9]{7,8}") {
            prop_assert_eq!(verification_char(&body), verification_char(&body));
        }

        /// Anything that is not a pure digit string is refused rather than
        /// silently skipped.
        #[test]
        fn verification_char_rejects_non_digits(
            body in "[0-9]{0,4}[a-zA-Z.\\- ][0-9]{0,4}"
        ) {
            prop_assert_eq!(verification_char(&body), None);
        }
    }
}
