//! # CNP Value Type
//!
//! [`Cnp`] wraps the raw string of a Romanian personal numeric code.
//! Construction never fails: any string is a CNP, and [`Cnp::is_valid()`]
//! reports whether it is a *well-formed, checksum-correct* one.
//!
//! ## Layout
//!
//! ```text
//!  S  AA  LL  ZZ  JJ  NNN  C
//!  1  80  01  01  12  345  0
//! ```
//!
//! - `S`: sex, century and residency ([`crate::status`])
//! - `AA` `LL` `ZZ`: year-of-century, month, day
//! - `JJ`: county code ([`crate::county`])
//! - `NNN`: sequence number
//! - `C`: check digit ([`crate::checksum`])
//!
//! ## Graceful Degradation
//!
//! Derived-fact accessors return `Option` and never panic. A code that is
//! not 13 digits yields `None` everywhere; a 13-digit code with an
//! out-of-range field yields `None` for the facts that depend on it.

use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::checksum;
use crate::county::County;
use crate::error::ValidationError;
use crate::status::{century_base, Nationality, Sex};

/// A Romanian personal numeric code, valid or not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cnp(String);

/// The numeric fields of a 13-digit CNP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CnpFields {
    /// Sex/century digit.
    pub s: u8,
    /// Year of century.
    pub aa: u8,
    /// Month.
    pub ll: u8,
    /// Day.
    pub zz: u8,
    /// County code.
    pub jj: u8,
    /// Sequence number.
    pub nnn: u16,
    /// Check digit as written.
    pub c: u8,
}

impl CnpFields {
    fn from_digits(d: &[u8; 13]) -> Self {
        Self {
            s: d[0],
            aa: d[1] * 10 + d[2],
            ll: d[3] * 10 + d[4],
            zz: d[5] * 10 + d[6],
            jj: d[7] * 10 + d[8],
            nnn: u16::from(d[9]) * 100 + u16::from(d[10]) * 10 + u16::from(d[11]),
            c: d[12],
        }
    }

    /// Fields with a zero check digit. Call [`CnpFields::compose()`] to get a
    /// code with the correct one.
    pub fn new(s: u8, aa: u8, ll: u8, zz: u8, jj: u8, nnn: u16) -> Self {
        Self {
            s,
            aa,
            ll,
            zz,
            jj,
            nnn,
            c: 0,
        }
    }

    /// The first twelve digits, rendered with each field at its fixed width.
    pub fn body(&self) -> String {
        format!(
            "{}{:02}{:02}{:02}{:02}{:03}",
            self.s, self.aa, self.ll, self.zz, self.jj, self.nnn
        )
    }

    /// Build a CNP from these fields, discarding `c` and appending the
    /// computed check digit.
    pub fn compose(&self) -> Cnp {
        let body = self.body();
        match checksum::check_digit_str(&body) {
            Some(c) => Cnp(format!("{body}{c}")),
            // A field exceeded its width; keep the body so the result is
            // visibly malformed rather than silently truncated.
            None => Cnp(body),
        }
    }
}

impl Cnp {
    /// Wrap any string as a CNP.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the string is exactly 13 ASCII digits.
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == 13 && self.0.bytes().all(|b| b.is_ascii_digit())
    }

    /// The thirteen digit values, or `None` unless the string is well formed.
    fn digits(&self) -> Option<[u8; 13]> {
        if !self.is_well_formed() {
            return None;
        }
        let bytes = self.0.as_bytes();
        Some(std::array::from_fn(|i| bytes[i] - b'0'))
    }

    /// Parse the numeric fields. `None` unless the string is well formed.
    pub fn fields(&self) -> Option<CnpFields> {
        self.digits().map(|d| CnpFields::from_digits(&d))
    }

    /// The check digit the first twelve digits call for.
    pub fn expected_check_digit(&self) -> Option<u8> {
        self.digits().map(|d| expected_for(&d))
    }

    /// Check every validity rule, reporting the first one violated.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] for the first failing rule, in the
    /// order length, digits, check digit, sex digit, month, day, county.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let len = self.0.chars().count();
        if len != 13 {
            return Err(ValidationError::WrongLength(len));
        }
        let mut digits = [0u8; 13];
        for (position, character) in self.0.chars().enumerate() {
            match character.to_digit(10) {
                Some(d) => digits[position] = d as u8,
                None => {
                    return Err(ValidationError::NonDigit {
                        position,
                        character,
                    })
                }
            }
        }
        let f = CnpFields::from_digits(&digits);

        let expected = expected_for(&digits);
        if f.c != expected {
            return Err(ValidationError::ChecksumMismatch {
                expected,
                found: f.c,
            });
        }
        if f.s == 0 {
            return Err(ValidationError::InvalidSexDigit(f.s));
        }
        let days_in_month = calendar::days_in_month(f.ll, f.aa, f.s)
            .ok_or(ValidationError::InvalidMonth(f.ll))?;
        if f.zz == 0 || f.zz > days_in_month {
            return Err(ValidationError::InvalidDay {
                day: f.zz,
                days_in_month,
            });
        }
        if County::from_code(f.jj).is_none() {
            return Err(ValidationError::InvalidCounty(f.jj));
        }
        Ok(())
    }

    /// Whether the code satisfies every validity rule.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Residency status.
    pub fn nationality(&self) -> Option<Nationality> {
        self.fields().and_then(|f| Nationality::from_sex_digit(f.s))
    }

    /// Sex.
    pub fn sex(&self) -> Option<Sex> {
        self.fields().and_then(|f| Sex::from_sex_digit(f.s))
    }

    /// Full birth year, combining the century from `S` with `AA`.
    pub fn birth_year(&self) -> Option<u16> {
        let f = self.fields()?;
        century_base(f.s).map(|base| base + u16::from(f.aa))
    }

    /// Birth month (1-12).
    pub fn month(&self) -> Option<u8> {
        self.fields()
            .map(|f| f.ll)
            .filter(|ll| (1..=12).contains(ll))
    }

    /// Romanian name of the birth month.
    pub fn month_name(&self) -> Option<&'static str> {
        self.month().and_then(calendar::month_name)
    }

    /// Birth day as encoded.
    pub fn day(&self) -> Option<u8> {
        self.fields().map(|f| f.zz)
    }

    /// Number of days in the encoded birth month.
    pub fn days_in_month(&self) -> Option<u8> {
        let f = self.fields()?;
        calendar::days_in_month(f.ll, f.aa, f.s)
    }

    /// County of registration.
    pub fn county(&self) -> Option<County> {
        self.fields().and_then(|f| County::from_code(f.jj))
    }

    /// Numeric county code as encoded.
    pub fn county_code(&self) -> Option<u8> {
        self.fields().map(|f| f.jj)
    }

    /// Sequence number.
    pub fn sequence(&self) -> Option<u16> {
        self.fields().map(|f| f.nnn)
    }
}

impl std::fmt::Display for Cnp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Cnp {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Cnp {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Check digit for the body of a 13-digit array.
fn expected_for(digits: &[u8; 13]) -> u8 {
    let body: [u8; 12] = std::array::from_fn(|i| digits[i]);
    checksum::check_digit(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "1800101123450";

    #[test]
    fn parses_fields() {
        let f = Cnp::new(VALID).fields().unwrap();
        assert_eq!(f, CnpFields {
            s: 1,
            aa: 80,
            ll: 1,
            zz: 1,
            jj: 12,
            nnn: 345,
            c: 0,
        });
    }

    #[test]
    fn known_valid_code() {
        let cnp = Cnp::new(VALID);
        assert!(cnp.is_valid());
        assert_eq!(cnp.nationality(), Some(Nationality::Romana));
        assert_eq!(cnp.sex(), Some(Sex::Masculin));
        assert_eq!(cnp.birth_year(), Some(1980));
        assert_eq!(cnp.month(), Some(1));
        assert_eq!(cnp.month_name(), Some("Ianuarie"));
        assert_eq!(cnp.day(), Some(1));
        assert_eq!(cnp.county().map(|c| c.name()), Some("Cluj"));
        assert_eq!(cnp.county_code(), Some(12));
        assert_eq!(cnp.sequence(), Some(345));
    }

    #[test]
    fn wrong_check_digit_is_invalid() {
        let cnp = Cnp::new("1800101123456");
        assert!(!cnp.is_valid());
        assert_eq!(
            cnp.validate(),
            Err(ValidationError::ChecksumMismatch {
                expected: 0,
                found: 6
            })
        );
        assert_eq!(cnp.expected_check_digit(), Some(0));
    }

    #[test]
    fn every_wrong_check_digit_reports_the_computed_one() {
        for found in 1..=9u8 {
            let cnp = Cnp::new(format!("180010112345{found}"));
            assert_eq!(
                cnp.validate(),
                Err(ValidationError::ChecksumMismatch { expected: 0, found }),
                "found={found}"
            );
        }
        assert_eq!(
            Cnp::new("1800101123400").validate(),
            Err(ValidationError::ChecksumMismatch {
                expected: 1,
                found: 0
            })
        );
    }

    #[test]
    fn remainder_ten_code_is_valid() {
        assert!(Cnp::new("1800101123401").is_valid());
    }

    #[test]
    fn century_digits() {
        assert_eq!(Cnp::new("2800101123452").birth_year(), Some(1980));
        assert_eq!(
            CnpFields::new(3, 50, 1, 1, 12, 1).compose().birth_year(),
            Some(1850)
        );
        assert_eq!(
            CnpFields::new(6, 5, 1, 1, 12, 1).compose().birth_year(),
            Some(2005)
        );
        assert_eq!(
            CnpFields::new(9, 80, 1, 1, 12, 1).compose().birth_year(),
            Some(1980)
        );
    }

    #[test]
    fn malformed_strings_degrade_to_none() {
        for raw in ["", "123", "18001011234567", "18001011234a0", "ăăăăăăăăăăăăă"] {
            let cnp = Cnp::new(raw);
            assert!(!cnp.is_valid(), "{raw:?}");
            assert!(cnp.fields().is_none());
            assert!(cnp.nationality().is_none());
            assert!(cnp.birth_year().is_none());
            assert!(cnp.county().is_none());
            assert!(cnp.sequence().is_none());
        }
    }

    #[test]
    fn validation_order() {
        assert_eq!(
            Cnp::new("123").validate(),
            Err(ValidationError::WrongLength(3))
        );
        assert_eq!(
            Cnp::new("18001011234x0").validate(),
            Err(ValidationError::NonDigit {
                position: 11,
                character: 'x'
            })
        );
        let zero_s = CnpFields::new(0, 80, 1, 1, 12, 345).compose();
        assert_eq!(zero_s.validate(), Err(ValidationError::InvalidSexDigit(0)));
        let month13 = CnpFields::new(1, 80, 13, 1, 12, 345).compose();
        assert_eq!(month13.validate(), Err(ValidationError::InvalidMonth(13)));
        let feb30 = CnpFields::new(1, 80, 2, 30, 12, 345).compose();
        assert_eq!(
            feb30.validate(),
            Err(ValidationError::InvalidDay {
                day: 30,
                days_in_month: 29
            })
        );
        let day0 = CnpFields::new(1, 80, 1, 0, 12, 345).compose();
        assert!(matches!(
            day0.validate(),
            Err(ValidationError::InvalidDay { day: 0, .. })
        ));
        let county47 = CnpFields::new(1, 80, 1, 1, 47, 345).compose();
        assert_eq!(county47.validate(), Err(ValidationError::InvalidCounty(47)));
    }

    #[test]
    fn leap_day_depends_on_century_digit() {
        assert!(CnpFields::new(5, 0, 2, 29, 12, 1).compose().is_valid());
        assert!(!CnpFields::new(1, 0, 2, 29, 12, 1).compose().is_valid());
        assert!(!CnpFields::new(3, 0, 2, 29, 12, 1).compose().is_valid());
        assert!(CnpFields::new(1, 4, 2, 29, 12, 1).compose().is_valid());
    }

    #[test]
    fn out_of_range_month_hides_name() {
        let cnp = CnpFields::new(1, 80, 13, 1, 12, 345).compose();
        assert_eq!(cnp.month(), None);
        assert_eq!(cnp.month_name(), None);
        assert_eq!(cnp.days_in_month(), None);
    }

    #[test]
    fn compose_pads_fields() {
        let cnp = CnpFields::new(5, 1, 1, 1, 12, 1).compose();
        assert_eq!(cnp.as_str(), "5010101120011");
        assert!(cnp.is_valid());
        assert_eq!(cnp.sequence(), Some(1));
    }

    #[test]
    fn display_is_raw_string() {
        assert_eq!(Cnp::new(VALID).to_string(), VALID);
        assert_eq!(Cnp::from("abc").to_string(), "abc");
    }

    #[test]
    fn serde_is_transparent() {
        let cnp = Cnp::new(VALID);
        let json = serde_json::to_string(&cnp).unwrap();
        assert_eq!(json, format!("\"{VALID}\""));
        let back: Cnp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cnp);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Appending the computed check digit always satisfies the checksum rule.
        #[test]
        fn checksum_roundtrip(body in "[0-9]{12}") {
            let code = checksum::complete(&body).unwrap();
            let cnp = Cnp::new(code);
            let f = cnp.fields().unwrap();
            prop_assert_eq!(cnp.expected_check_digit(), Some(f.c));
            let mismatch = matches!(cnp.validate(), Err(ValidationError::ChecksumMismatch { .. }));
            prop_assert!(!mismatch);
        }

        /// Arbitrary strings never panic any accessor.
        #[test]
        fn accessors_never_panic(raw in ".{0,20}") {
            let cnp = Cnp::new(raw);
            let _ = cnp.validate();
            let _ = cnp.nationality();
            let _ = cnp.sex();
            let _ = cnp.birth_year();
            let _ = cnp.month_name();
            let _ = cnp.days_in_month();
            let _ = cnp.county();
        }

        /// `compose` is the inverse of `fields` up to the check digit.
        #[test]
        fn compose_inverts_fields(
            s in 0u8..10, aa in 0u8..100, ll in 0u8..100,
            zz in 0u8..100, jj in 0u8..100, nnn in 0u16..1000,
        ) {
            let f = CnpFields::new(s, aa, ll, zz, jj, nnn);
            let parsed = f.compose().fields().unwrap();
            prop_assert_eq!(CnpFields { c: 0, ..parsed }, f);
        }
    }
}
