//! # One-Shot Namespace Commands
//!
//! `cnpfs ls`, `cnpfs cat` and `cnpfs readlink` run a single shell command
//! from the root and exit. Output matches the interactive shell; failures
//! become errors at the process boundary.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use crate::shell::Shell;

/// Arguments for `cnpfs ls`.
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Path to list. Defaults to the root.
    pub path: Option<String>,
}

/// Arguments for `cnpfs cat` and `cnpfs readlink`.
#[derive(Args, Debug)]
pub struct PathArgs {
    /// Path, absolute or relative to the root.
    pub path: String,
}

/// Execute `cnpfs ls`.
pub fn run_ls(args: &LsArgs, out: &mut impl Write) -> Result<u8> {
    for entry in Shell::new().ls(args.path.as_deref())? {
        writeln!(out, "{entry}")?;
    }
    Ok(0)
}

/// Execute `cnpfs cat`.
pub fn run_cat(args: &PathArgs, out: &mut impl Write) -> Result<u8> {
    writeln!(out, "{}", Shell::new().cat(&args.path)?)?;
    Ok(0)
}

/// Execute `cnpfs readlink`.
pub fn run_readlink(args: &PathArgs, out: &mut impl Write) -> Result<u8> {
    writeln!(out, "{}", Shell::new().readlink(&args.path)?)?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(p: &str) -> PathArgs {
        PathArgs {
            path: p.to_string(),
        }
    }

    #[test]
    fn ls_defaults_to_root() {
        let mut out = Vec::new();
        assert_eq!(run_ls(&LsArgs { path: None }, &mut out).unwrap(), 0);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0\n1\n2\n3\n4\n5\n6\n7\n8\n9\n"
        );
    }

    #[test]
    fn cat_reads_leaf() {
        let mut out = Vec::new();
        run_cat(&path("1800101123450/judet"), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Cluj\n");
    }

    #[test]
    fn cat_directory_fails() {
        let err = run_cat(&path("/1"), &mut Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "Error: /1 is not a file");
    }

    #[test]
    fn readlink_prints_target() {
        let mut out = Vec::new();
        run_readlink(&path("/3/4"), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "/34\n");
    }
}
