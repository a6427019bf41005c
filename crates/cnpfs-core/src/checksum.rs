//! # Check Digit
//!
//! The 13th CNP digit is a weighted sum of the first twelve, reduced mod 11.
//! A remainder of 10 is encoded as 1.

/// Per-position weights applied to the first twelve digits.
pub const WEIGHTS: [u8; 12] = [2, 7, 9, 1, 4, 6, 3, 5, 8, 2, 7, 9];

/// Compute the check digit for a 12-digit body given as digit values (0-9).
pub fn check_digit(body: &[u8; 12]) -> u8 {
    let sum: u32 = body
        .iter()
        .zip(WEIGHTS.iter())
        .map(|(d, w)| u32::from(*d) * u32::from(*w))
        .sum();
    match (sum % 11) as u8 {
        10 => 1,
        r => r,
    }
}

/// Compute the check digit for a 12-character numeric string.
///
/// Returns `None` unless `body` is exactly 12 ASCII digits.
pub fn check_digit_str(body: &str) -> Option<u8> {
    let bytes = body.as_bytes();
    if bytes.len() != 12 || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let mut digits = [0u8; 12];
    for (slot, b) in digits.iter_mut().zip(bytes) {
        *slot = b - b'0';
    }
    Some(check_digit(&digits))
}

/// Append the check digit to a 12-digit body, producing a 13-digit code.
pub fn complete(body: &str) -> Option<String> {
    check_digit_str(body).map(|c| format!("{body}{c}"))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The check digit is always a single decimal digit other than 10.
        #[test]
        fn check_digit_in_range(body in prop::array::uniform12(0u8..10)) {
            prop_assert!(check_digit(&body) <= 9);
        }

        /// String and digit-array entry points agree.
        #[test]
        fn string_and_array_agree(body in "[0-9]{12}") {
            let mut digits = [0u8; 12];
            for (slot, b) in digits.iter_mut().zip(body.bytes()) {
                *slot = b - b'0';
            }
            prop_assert_eq!(check_digit_str(&body), Some(check_digit(&digits)));
        }
    }
}
