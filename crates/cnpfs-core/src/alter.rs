//! # Single-Field Alterations
//!
//! Every alteration returns a *new* [`Cnp`] that differs from the receiver in
//! exactly one semantic field, with the check digit recomputed. The receiver
//! is never modified.
//!
//! Each field has an enumerated domain of values it may become, which
//! depends on the current sex digit (and, for days, on the current month and
//! year). Targets outside that domain are rejected with
//! [`AlterationError::InvalidAlterationTarget`]; there is no silent fallback.
//!
//! ## Sex Digit Remapping
//!
//! Nationality, sex and year share the `S` digit, so altering one of them
//! picks the digit that keeps the other two where possible:
//!
//! | Target      | Current S → new S                            |
//! |-------------|----------------------------------------------|
//! | Romana      | 1-6 kept, 7/9 → 1, 8 → 2                     |
//! | Rezidenta   | 7/8 kept, 1/9 → 7, 2 → 8, others → 7         |
//! | Straina     | → 9                                          |
//! | Masculin    | odd kept, 2 → 1, 4 → 3, 6 → 5, 8 → 7         |
//! | Feminin     | even kept, 1 → 2, 3 → 4, 5 → 6, 7 → 8        |
//! | Necunoscut  | → 9                                          |
//! | year 18xx   | 1/3/5 → 3, 2/4/6 → 4                         |
//! | year 19xx   | 1/3/5 → 1, 2/4/6 → 2                         |
//! | year 20xx   | 1/3/5 → 5, 2/4/6 → 6                         |

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::cnp::{Cnp, CnpFields};
use crate::county::County;
use crate::error::AlterationError;
use crate::status::{Nationality, Sex};

/// A semantic field that can be altered.
///
/// The string form is the Romanian directory name used under `schimba/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CnpField {
    /// Residency status (`S` digit).
    Nationality,
    /// Sex (`S` digit).
    Sex,
    /// Birth year (`S` digit and `AA`).
    Year,
    /// Birth month (`LL`).
    Month,
    /// Birth day (`ZZ`).
    Day,
    /// County of registration (`JJ`).
    County,
    /// Sequence number (`NNN`).
    Sequence,
}

impl CnpField {
    /// All alterable fields in listing order.
    pub fn all() -> &'static [CnpField] {
        &[
            Self::Nationality,
            Self::Sex,
            Self::Year,
            Self::Month,
            Self::Day,
            Self::County,
            Self::Sequence,
        ]
    }

    /// Directory name of this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nationality => "nationalitate",
            Self::Sex => "sex",
            Self::Year => "an",
            Self::Month => "luna",
            Self::Day => "zi",
            Self::County => "judet",
            Self::Sequence => "nnn",
        }
    }

    /// Inverse of [`CnpField::as_str()`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.as_str() == name)
    }
}

impl std::fmt::Display for CnpField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A requested new value for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alteration {
    /// New residency status.
    Nationality(Nationality),
    /// New sex.
    Sex(Sex),
    /// New full birth year.
    Year(u16),
    /// New month (1-12).
    Month(u8),
    /// New day.
    Day(u8),
    /// New county.
    County(County),
    /// New sequence number (0-999).
    Sequence(u16),
}

impl Alteration {
    /// The field this alteration changes.
    pub fn field(&self) -> CnpField {
        match self {
            Self::Nationality(_) => CnpField::Nationality,
            Self::Sex(_) => CnpField::Sex,
            Self::Year(_) => CnpField::Year,
            Self::Month(_) => CnpField::Month,
            Self::Day(_) => CnpField::Day,
            Self::County(_) => CnpField::County,
            Self::Sequence(_) => CnpField::Sequence,
        }
    }

    /// Parse a choice as it appears in a field listing.
    ///
    /// Only the exact listing form is accepted: plain integers without
    /// leading zeros or sign, the 3-digit zero-padded sequence, and
    /// case-sensitive labels. County choices may be a code or a name.
    ///
    /// # Errors
    ///
    /// Returns [`AlterationError::InvalidAlterationTarget`] for any other
    /// text. Domain membership is checked later, by the alteration itself.
    pub fn parse(field: CnpField, value: &str) -> Result<Self, AlterationError> {
        let invalid = || AlterationError::InvalidAlterationTarget {
            field,
            value: value.to_string(),
        };
        match field {
            CnpField::Nationality => value.parse().map(Self::Nationality),
            CnpField::Sex => value.parse().map(Self::Sex),
            CnpField::Year => parse_canonical(value).map(Self::Year).ok_or_else(invalid),
            CnpField::Month => parse_canonical(value).map(Self::Month).ok_or_else(invalid),
            CnpField::Day => parse_canonical(value).map(Self::Day).ok_or_else(invalid),
            CnpField::County => parse_canonical(value)
                .and_then(County::from_code)
                .or_else(|| County::from_name(value))
                .map(Self::County)
                .ok_or_else(invalid),
            CnpField::Sequence => {
                if value.len() == 3 && value.bytes().all(|b| b.is_ascii_digit()) {
                    value.parse().map(Self::Sequence).map_err(|_| invalid())
                } else {
                    Err(invalid())
                }
            }
        }
    }

    fn target_text(&self) -> String {
        match self {
            Self::Nationality(n) => n.to_string(),
            Self::Sex(s) => s.to_string(),
            Self::Year(y) => y.to_string(),
            Self::Month(m) => m.to_string(),
            Self::Day(d) => d.to_string(),
            Self::County(c) => c.code().to_string(),
            Self::Sequence(n) => format!("{n:03}"),
        }
    }
}

/// Parse an integer whose decimal rendering is exactly `value`.
fn parse_canonical<T>(value: &str) -> Option<T>
where
    T: FromStr + ToString,
{
    value.parse::<T>().ok().filter(|v| v.to_string() == value)
}

/// Sex digit for `s` moved to century `century` (18, 19 or 20).
fn remap_century(s: u8, century: u16) -> u8 {
    match (s, century) {
        (1 | 3 | 5, 18) => 3,
        (1 | 3 | 5, 19) => 1,
        (1 | 3 | 5, 20) => 5,
        (2 | 4 | 6, 18) => 4,
        (2 | 4 | 6, 19) => 2,
        (2 | 4 | 6, 20) => 6,
        _ => s,
    }
}

impl Cnp {
    // ── Domains ──────────────────────────────────────────────────────

    /// Nationalities this code may be switched to.
    pub fn valid_nationalities(&self) -> Vec<Nationality> {
        match self.fields().map(|f| f.s) {
            Some(1 | 2 | 7 | 8 | 9) => Nationality::all().to_vec(),
            _ => vec![Nationality::Romana],
        }
    }

    /// Sexes this code may be switched to.
    pub fn valid_sexes(&self) -> Vec<Sex> {
        match self.fields().map(|f| f.s) {
            Some(9) => vec![Sex::Necunoscut],
            _ => vec![Sex::Masculin, Sex::Feminin],
        }
    }

    /// Birth years this code may be switched to.
    #[allow(clippy::reversed_empty_ranges)]
    pub fn valid_years(&self) -> RangeInclusive<u16> {
        match self.fields().map(|f| f.s) {
            Some(1..=6) => 1800..=2099,
            Some(7..=9) => 1900..=1999,
            _ => 1..=0,
        }
    }

    /// Months this code may be switched to.
    pub fn valid_months(&self) -> RangeInclusive<u8> {
        1..=12
    }

    /// Days that exist in the current birth month and year.
    #[allow(clippy::reversed_empty_ranges)]
    pub fn valid_days(&self) -> RangeInclusive<u8> {
        match self.days_in_month() {
            Some(days) => 1..=days,
            None => 1..=0,
        }
    }

    /// Counties this code may be switched to.
    pub fn valid_counties(&self) -> impl Iterator<Item = County> {
        County::all()
    }

    /// Sequence numbers this code may be switched to.
    pub fn valid_sequences(&self) -> RangeInclusive<u16> {
        0..=999
    }

    /// The domain of `field`, rendered the way [`Alteration::parse()`] reads it.
    ///
    /// County choices list every code first, then every name.
    pub fn choices(&self, field: CnpField) -> Vec<String> {
        match field {
            CnpField::Nationality => self
                .valid_nationalities()
                .iter()
                .map(ToString::to_string)
                .collect(),
            CnpField::Sex => self.valid_sexes().iter().map(ToString::to_string).collect(),
            CnpField::Year => self.valid_years().map(|y| y.to_string()).collect(),
            CnpField::Month => self.valid_months().map(|m| m.to_string()).collect(),
            CnpField::Day => self.valid_days().map(|d| d.to_string()).collect(),
            CnpField::County => self
                .valid_counties()
                .map(|c| c.code().to_string())
                .chain(self.valid_counties().map(|c| c.name().to_string()))
                .collect(),
            CnpField::Sequence => self.valid_sequences().map(|n| format!("{n:03}")).collect(),
        }
    }

    // ── Alterations ──────────────────────────────────────────────────

    /// Apply any alteration.
    ///
    /// # Errors
    ///
    /// [`AlterationError::Malformed`] if this code is not 13 digits;
    /// [`AlterationError::InvalidAlterationTarget`] if the target is outside
    /// the field's current domain.
    pub fn alter(&self, alteration: &Alteration) -> Result<Cnp, AlterationError> {
        let f = self
            .fields()
            .ok_or_else(|| AlterationError::Malformed(self.as_str().to_string()))?;
        let in_domain = match alteration {
            Alteration::Nationality(n) => self.valid_nationalities().contains(n),
            Alteration::Sex(s) => self.valid_sexes().contains(s),
            Alteration::Year(y) => self.valid_years().contains(y),
            Alteration::Month(m) => self.valid_months().contains(m),
            Alteration::Day(d) => self.valid_days().contains(d),
            Alteration::County(c) => County::from_code(c.code()) == Some(*c),
            Alteration::Sequence(n) => self.valid_sequences().contains(n),
        };
        if !in_domain {
            return Err(AlterationError::InvalidAlterationTarget {
                field: alteration.field(),
                value: alteration.target_text(),
            });
        }

        let altered = match *alteration {
            Alteration::Nationality(target) => CnpFields {
                s: nationality_digit(f.s, target),
                ..f
            },
            Alteration::Sex(target) => CnpFields {
                s: sex_digit(f.s, target),
                ..f
            },
            Alteration::Year(target) => {
                let s = if self.birth_year().map(|y| y / 100) == Some(target / 100) {
                    f.s
                } else {
                    remap_century(f.s, target / 100)
                };
                CnpFields {
                    s,
                    aa: (target % 100) as u8,
                    ..f
                }
            }
            Alteration::Month(ll) => CnpFields { ll, ..f },
            Alteration::Day(zz) => CnpFields { zz, ..f },
            Alteration::County(county) => CnpFields {
                jj: county.code(),
                ..f
            },
            Alteration::Sequence(nnn) => CnpFields { nnn, ..f },
        };
        Ok(altered.compose())
    }

    /// Parse a listing entry for `field` and apply it.
    ///
    /// # Errors
    ///
    /// As [`Alteration::parse()`] and [`Cnp::alter()`].
    pub fn alter_choice(&self, field: CnpField, value: &str) -> Result<Cnp, AlterationError> {
        let alteration = Alteration::parse(field, value)?;
        self.alter(&alteration)
    }

    /// Switch residency status.
    pub fn alter_nationality(&self, target: Nationality) -> Result<Cnp, AlterationError> {
        self.alter(&Alteration::Nationality(target))
    }

    /// Switch sex.
    pub fn alter_sex(&self, target: Sex) -> Result<Cnp, AlterationError> {
        self.alter(&Alteration::Sex(target))
    }

    /// Switch birth year, moving the sex digit to a new century if needed.
    pub fn alter_year(&self, target: u16) -> Result<Cnp, AlterationError> {
        self.alter(&Alteration::Year(target))
    }

    /// Switch birth month. The day is kept even if the new month is shorter.
    pub fn alter_month(&self, target: u8) -> Result<Cnp, AlterationError> {
        self.alter(&Alteration::Month(target))
    }

    /// Switch birth day.
    pub fn alter_day(&self, target: u8) -> Result<Cnp, AlterationError> {
        self.alter(&Alteration::Day(target))
    }

    /// Switch county of registration.
    pub fn alter_county(&self, target: County) -> Result<Cnp, AlterationError> {
        self.alter(&Alteration::County(target))
    }

    /// Switch sequence number.
    pub fn alter_sequence(&self, target: u16) -> Result<Cnp, AlterationError> {
        self.alter(&Alteration::Sequence(target))
    }
}

fn nationality_digit(s: u8, target: Nationality) -> u8 {
    match target {
        Nationality::Romana => match s {
            1..=6 => s,
            8 => 2,
            _ => 1,
        },
        Nationality::Rezidenta => match s {
            7 | 8 => s,
            2 => 8,
            _ => 7,
        },
        Nationality::Straina => 9,
    }
}

fn sex_digit(s: u8, target: Sex) -> u8 {
    match target {
        Sex::Masculin => match s {
            1 | 3 | 5 | 7 => s,
            2 | 4 | 6 | 8 => s - 1,
            _ => 1,
        },
        Sex::Feminin => match s {
            2 | 4 | 6 | 8 => s,
            1 | 3 | 5 | 7 => s + 1,
            _ => 2,
        },
        Sex::Necunoscut => 9,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Valid CNPs with any sex digit, date up to the 28th, and a real county.
    fn valid_cnp() -> impl Strategy<Value = Cnp> {
        (
            1u8..=9,
            0u8..100,
            1u8..=12,
            1u8..=28,
            prop::sample::select(County::all().map(|c| c.code()).collect::<Vec<_>>()),
            0u16..1000,
        )
            .prop_map(|(s, aa, ll, zz, jj, nnn)| {
                CnpFields::new(s, aa, ll, zz, jj, nnn).compose()
            })
    }

    fn field() -> impl Strategy<Value = CnpField> {
        prop::sample::select(CnpField::all().to_vec())
    }

    proptest! {
        /// Fields other than the altered one are byte-identical afterwards.
        #[test]
        fn alteration_preserves_untouched_fields(
            cnp in valid_cnp(),
            field in field(),
            pick in any::<prop::sample::Index>(),
        ) {
            let choices = cnp.choices(field);
            let choice = pick.get(&choices);
            let altered = cnp.alter_choice(field, choice).unwrap();
            let before = cnp.fields().unwrap();
            let after = altered.fields().unwrap();

            if !matches!(field, CnpField::Nationality | CnpField::Sex | CnpField::Year) {
                prop_assert_eq!(before.s, after.s);
            }
            if field != CnpField::Year {
                prop_assert_eq!(before.aa, after.aa);
            }
            if field != CnpField::Month {
                prop_assert_eq!(before.ll, after.ll);
            }
            if field != CnpField::Day {
                prop_assert_eq!(before.zz, after.zz);
            }
            if field != CnpField::County {
                prop_assert_eq!(before.jj, after.jj);
            }
            if field != CnpField::Sequence {
                prop_assert_eq!(before.nnn, after.nnn);
            }
        }

        /// Every alteration result satisfies the check digit rule.
        #[test]
        fn alteration_is_checksum_consistent(
            cnp in valid_cnp(),
            field in field(),
            pick in any::<prop::sample::Index>(),
        ) {
            let choices = cnp.choices(field);
            let altered = cnp.alter_choice(field, pick.get(&choices).as_str()).unwrap();
            let f = altered.fields().unwrap();
            prop_assert_eq!(altered.expected_check_digit(), Some(f.c));
        }

        /// The altered field reads back as the requested value.
        #[test]
        fn alteration_reaches_target(
            cnp in valid_cnp(),
            field in field(),
            pick in any::<prop::sample::Index>(),
        ) {
            let choices = cnp.choices(field);
            let choice = pick.get(&choices).clone();
            let altered = cnp.alter_choice(field, &choice).unwrap();
            let read_back = match field {
                CnpField::Nationality => altered.nationality().map(|n| n.to_string()),
                CnpField::Sex => altered.sex().map(|s| s.to_string()),
                CnpField::Year => altered.birth_year().map(|y| y.to_string()),
                CnpField::Month => altered.month().map(|m| m.to_string()),
                CnpField::Day => altered.day().map(|d| d.to_string()),
                CnpField::County => altered.county().map(|c| {
                    if choice.bytes().all(|b| b.is_ascii_digit()) {
                        c.code().to_string()
                    } else {
                        c.name().to_string()
                    }
                }),
                CnpField::Sequence => altered.sequence().map(|n| format!("{n:03}")),
            };
            prop_assert_eq!(read_back, Some(choice));
        }
    }
}
