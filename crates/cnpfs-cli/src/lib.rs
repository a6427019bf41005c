//! # cnpfs-cli: Command-Line Front End
//!
//! Provides the `cnpfs` binary over the CNP namespace.
//!
//! ## Subcommands
//!
//! - `cnpfs shell`: interactive browser (the default with no subcommand).
//! - `cnpfs ls`, `cnpfs cat`, `cnpfs readlink`: one-shot namespace lookups.
//! - `cnpfs info`: validation report for a single code.
//!
//! ```bash
//! cnpfs
//! cnpfs shell --cwd /1800101123450/schimba
//! cnpfs cat /1800101123450/judet
//! cnpfs info 1800101123450 --json
//! ```

pub mod info;
pub mod namespace;
pub mod shell;
