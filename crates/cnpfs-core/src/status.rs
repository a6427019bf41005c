//! # Sex Digit Semantics
//!
//! The first CNP digit `S` packs three facts: sex, birth century, and
//! residency status.
//!
//! | S | Sex        | Century | Nationality |
//! |---|------------|---------|-------------|
//! | 1 | Masculin   | 1900    | Romana      |
//! | 2 | Feminin    | 1900    | Romana      |
//! | 3 | Masculin   | 1800    | Romana      |
//! | 4 | Feminin    | 1800    | Romana      |
//! | 5 | Masculin   | 2000    | Romana      |
//! | 6 | Feminin    | 2000    | Romana      |
//! | 7 | Masculin   | 1900    | Rezidenta   |
//! | 8 | Feminin    | 1900    | Rezidenta   |
//! | 9 | Necunoscut | 1900    | Straina     |
//!
//! Names are the Romanian labels exposed in the namespace.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::alter::CnpField;
use crate::error::AlterationError;

/// Residency status encoded by the sex digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nationality {
    /// Romanian citizen (S = 1-6).
    Romana,
    /// Foreign resident (S = 7-8).
    Rezidenta,
    /// Foreign citizen (S = 9).
    Straina,
}

impl Nationality {
    /// All nationalities in listing order.
    pub fn all() -> &'static [Nationality] {
        &[Self::Romana, Self::Rezidenta, Self::Straina]
    }

    /// Decode from the sex digit. `None` for 0.
    pub fn from_sex_digit(s: u8) -> Option<Self> {
        match s {
            1..=6 => Some(Self::Romana),
            7 | 8 => Some(Self::Rezidenta),
            9 => Some(Self::Straina),
            _ => None,
        }
    }

    /// Romanian label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Romana => "Romana",
            Self::Rezidenta => "Rezidenta",
            Self::Straina => "Straina",
        }
    }
}

impl std::fmt::Display for Nationality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Nationality {
    type Err = AlterationError;

    /// Parse the exact label produced by [`Nationality::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Romana" => Ok(Self::Romana),
            "Rezidenta" => Ok(Self::Rezidenta),
            "Straina" => Ok(Self::Straina),
            other => Err(AlterationError::InvalidAlterationTarget {
                field: CnpField::Nationality,
                value: other.to_string(),
            }),
        }
    }
}

/// Sex encoded by the sex digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    /// Odd digits 1, 3, 5, 7.
    Masculin,
    /// Even digits 2, 4, 6, 8.
    Feminin,
    /// Digit 9 (foreign citizen, sex not recorded).
    Necunoscut,
}

impl Sex {
    /// All sexes in listing order.
    pub fn all() -> &'static [Sex] {
        &[Self::Masculin, Self::Feminin, Self::Necunoscut]
    }

    /// Decode from the sex digit. `None` for 0.
    pub fn from_sex_digit(s: u8) -> Option<Self> {
        match s {
            1 | 3 | 5 | 7 => Some(Self::Masculin),
            2 | 4 | 6 | 8 => Some(Self::Feminin),
            9 => Some(Self::Necunoscut),
            _ => None,
        }
    }

    /// Romanian label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Masculin => "Masculin",
            Self::Feminin => "Feminin",
            Self::Necunoscut => "Necunoscut",
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = AlterationError;

    /// Parse the exact label produced by [`Sex::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Masculin" => Ok(Self::Masculin),
            "Feminin" => Ok(Self::Feminin),
            "Necunoscut" => Ok(Self::Necunoscut),
            other => Err(AlterationError::InvalidAlterationTarget {
                field: CnpField::Sex,
                value: other.to_string(),
            }),
        }
    }
}

/// First year of the century encoded by the sex digit. `None` for 0.
pub fn century_base(s: u8) -> Option<u16> {
    match s {
        1 | 2 | 7 | 8 | 9 => Some(1900),
        3 | 4 => Some(1800),
        5 | 6 => Some(2000),
        _ => None,
    }
}
