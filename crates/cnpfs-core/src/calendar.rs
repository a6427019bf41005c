//! # Calendar Rules
//!
//! Month names and day counts for the birth date fields.
//!
//! The leap-year test works on the two-digit year `AA` plus the sex digit.
//! `AA == 0` counts as a leap year only when `S` selects the 2000s (5 or 6);
//! 1800 and 1900 are therefore common years, and so is any year with
//! `AA == 0` under a 7/8/9 digit.

/// Romanian month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "Ianuarie",
    "Februarie",
    "Martie",
    "Aprilie",
    "Mai",
    "Iunie",
    "Iulie",
    "August",
    "Septembrie",
    "Octombrie",
    "Noiembrie",
    "Decembrie",
];

/// Name of month `ll` (1-12).
pub fn month_name(ll: u8) -> Option<&'static str> {
    match ll {
        1..=12 => Some(MONTH_NAMES[usize::from(ll - 1)]),
        _ => None,
    }
}

/// Leap-year flag for year-of-century `aa` under sex digit `s`.
pub fn is_leap(aa: u8, s: u8) -> bool {
    (aa % 4 == 0 && aa != 0) || (aa == 0 && matches!(s, 5 | 6))
}

/// Number of days in month `ll`. `None` when `ll` is not a month.
pub fn days_in_month(ll: u8, aa: u8, s: u8) -> Option<u8> {
    match ll {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap(aa, s) => Some(29),
        2 => Some(28),
        _ => None,
    }
}
