//! # cnpfs-core: Romanian Personal Numeric Code Model
//!
//! This crate is the leaf of the cnpfs workspace. It models the Romanian
//! CNP (Cod Numeric Personal): a 13-digit string packing sex, century,
//! residency, birth date, county of registration, a sequence number and a
//! check digit.
//!
//! ## Key Design Principles
//!
//! 1. **Parsing never fails.** [`Cnp::new()`] accepts any string. Validity is
//!    a derived predicate ([`Cnp::is_valid()`]), and [`Cnp::validate()`]
//!    names the first rule a code breaks.
//!
//! 2. **Accessors degrade, they do not panic.** Every derived fact returns
//!    `Option`, so garbage input yields `None` instead of an index panic.
//!
//! 3. **Immutable alterations.** "Change field X" returns a new [`Cnp`] with
//!    the check digit recomputed. Targets outside a field's enumerated domain
//!    are an explicit [`AlterationError`], never a silent default.
//!
//! 4. **Single field enum.** [`CnpField`] is the one definition of the
//!    alterable fields; listings, parsing and alteration all match on it
//!    exhaustively.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `cnpfs-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod alter;
pub mod calendar;
pub mod checksum;
pub mod cnp;
pub mod county;
pub mod error;
pub mod status;

// Re-export primary types for ergonomic imports.
pub use alter::{Alteration, CnpField};
pub use checksum::{check_digit, check_digit_str};
pub use cnp::{Cnp, CnpFields};
pub use county::County;
pub use error::{AlterationError, CnpError, ValidationError};
pub use status::{Nationality, Sex};
