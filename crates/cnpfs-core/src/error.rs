//! # Error Hierarchy
//!
//! Structured error types for the CNP model, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Parsing a CNP never fails; these errors only surface when a caller asks
//! *why* a code is invalid ([`ValidationError`]) or requests an alteration
//! outside a field's domain ([`AlterationError`]).

use thiserror::Error;

use crate::alter::CnpField;

/// Top-level error type for the CNP model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CnpError {
    /// The code violates a validity rule.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// An alteration could not be applied.
    #[error("alteration error: {0}")]
    Alteration(#[from] AlterationError),
}

/// The first validity rule a CNP violates.
///
/// Rules are checked in a fixed order (length, digits, check digit, then the
/// semantic fields left to right), so a given string always reports the same
/// variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The code is not exactly 13 characters long.
    #[error("invalid CNP length: {0} (expected 13 digits)")]
    WrongLength(usize),

    /// The code contains a character that is not an ASCII digit.
    #[error("invalid CNP character {character:?} at position {position}")]
    NonDigit {
        /// Zero-based character position.
        position: usize,
        /// The offending character.
        character: char,
    },

    /// The 13th digit does not match the weighted checksum.
    #[error("check digit mismatch: expected {expected}, found {found}")]
    ChecksumMismatch {
        /// Check digit computed over the first 12 digits.
        expected: u8,
        /// Check digit present in the code.
        found: u8,
    },

    /// The sex/century digit is 0.
    #[error("invalid sex digit: {0} (expected 1-9)")]
    InvalidSexDigit(u8),

    /// The month is outside 01-12.
    #[error("invalid month: {0:02} (expected 01-12)")]
    InvalidMonth(u8),

    /// The day does not exist in the encoded month and year.
    #[error("invalid day: {day:02} (month has {days_in_month} days)")]
    InvalidDay {
        /// Encoded day.
        day: u8,
        /// Number of days in the encoded month.
        days_in_month: u8,
    },

    /// The county code is not in the county table.
    #[error("invalid county code: {0:02} (expected 01-46, 51 or 52)")]
    InvalidCounty(u8),
}

/// Errors producing a sibling CNP.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlterationError {
    /// The receiver is not a 13-digit string, so it has no fields to alter.
    #[error("cannot alter malformed CNP \"{0}\" (expected 13 digits)")]
    Malformed(String),

    /// The requested value is not in the field's enumerated domain.
    #[error("invalid alteration target for {field}: \"{value}\"")]
    InvalidAlterationTarget {
        /// The field being altered.
        field: CnpField,
        /// The rejected value, as given.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_wrong_length_display() {
        let err = ValidationError::WrongLength(12);
        let msg = format!("{err}");
        assert!(msg.contains("12"));
        assert!(msg.contains("13 digits"));
    }

    #[test]
    fn validation_error_checksum_display() {
        let err = ValidationError::ChecksumMismatch {
            expected: 0,
            found: 6,
        };
        assert_eq!(
            format!("{err}"),
            "check digit mismatch: expected 0, found 6"
        );
    }

    #[test]
    fn validation_error_pads_two_digit_fields() {
        let month = ValidationError::InvalidMonth(0).to_string();
        assert!(month.contains("00"));
        let county = ValidationError::InvalidCounty(47).to_string();
        assert!(county.contains("47"));
        let err = ValidationError::InvalidDay {
            day: 30,
            days_in_month: 28,
        };
        assert!(format!("{err}").contains("28 days"));
    }

    #[test]
    fn alteration_error_names_field() {
        let err = AlterationError::InvalidAlterationTarget {
            field: CnpField::Sex,
            value: "Altul".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("sex"));
        assert!(msg.contains("Altul"));
    }

    #[test]
    fn cnp_error_wraps_both_kinds() {
        let v: CnpError = ValidationError::InvalidSexDigit(0).into();
        assert!(format!("{v}").starts_with("validation error"));
        let a: CnpError = AlterationError::Malformed("12".to_string()).into();
        assert!(format!("{a}").starts_with("alteration error"));
    }
}
