//! # Info Subcommand
//!
//! Validates one CNP and prints its derived facts, as plain text or JSON.
//!
//! ```bash
//! cnpfs info 1800101123450
//! cnpfs info 1800101123450 --json
//! ```
//!
//! Exit code is 0 for a valid code and 1 otherwise.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use cnpfs_core::{Cnp, County, Nationality, Sex};

/// Arguments for `cnpfs info`.
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// The 13-digit code to inspect.
    pub cnp: String,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Validation outcome and facts for one code. Facts are present only for
/// valid codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CnpReport {
    /// The code as given.
    pub cnp: Cnp,
    /// Whether every validity rule holds.
    pub valid: bool,
    /// The first rule broken, for invalid codes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Residency status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<Nationality>,
    /// Sex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    /// Full birth year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<u16>,
    /// Birth month (1-12).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u8>,
    /// Romanian month name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month_name: Option<&'static str>,
    /// Birth day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<u8>,
    /// County of registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<County>,
    /// Sequence number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<u16>,
}

impl CnpReport {
    /// Build the report for `cnp`.
    pub fn new(cnp: &Cnp) -> Self {
        match cnp.validate() {
            Ok(()) => Self {
                cnp: cnp.clone(),
                valid: true,
                error: None,
                nationality: cnp.nationality(),
                sex: cnp.sex(),
                birth_year: cnp.birth_year(),
                month: cnp.month(),
                month_name: cnp.month_name(),
                day: cnp.day(),
                county: cnp.county(),
                sequence: cnp.sequence(),
            },
            Err(err) => Self {
                cnp: cnp.clone(),
                valid: false,
                error: Some(err.to_string()),
                nationality: None,
                sex: None,
                birth_year: None,
                month: None,
                month_name: None,
                day: None,
                county: None,
                sequence: None,
            },
        }
    }

    /// Plain-text rendering, labelled like the namespace leaves.
    pub fn render_text(&self) -> String {
        let mut lines = vec![
            self.cnp.to_string(),
            format!("valid: {}", if self.valid { "da" } else { "nu" }),
        ];
        if let Some(error) = &self.error {
            lines.push(format!("error: {error}"));
        }
        if let Some(n) = self.nationality {
            lines.push(format!("nationalitate: {n}"));
        }
        if let Some(s) = self.sex {
            lines.push(format!("sex: {s}"));
        }
        if let Some(y) = self.birth_year {
            lines.push(format!("an: {y}"));
        }
        if let (Some(m), Some(name)) = (self.month, self.month_name) {
            lines.push(format!("luna: {m} ({name})"));
        }
        if let Some(d) = self.day {
            lines.push(format!("zi: {d}"));
        }
        if let Some(c) = self.county {
            lines.push(format!("judet: {} ({})", c.name(), c.code()));
        }
        if let Some(n) = self.sequence {
            lines.push(format!("nnn: {n}"));
        }
        lines.join("\n")
    }
}

/// Execute `cnpfs info`.
pub fn run_info(args: &InfoArgs, out: &mut impl Write) -> Result<u8> {
    let report = CnpReport::new(&Cnp::new(args.cnp.trim()));
    tracing::debug!(cnp = %report.cnp, valid = report.valid, "inspected code");
    if args.json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", report.render_text())?;
    }
    Ok(if report.valid { 0 } else { 1 })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(cnp: &str, json: bool) -> (u8, String) {
        let args = InfoArgs {
            cnp: cnp.to_string(),
            json,
        };
        let mut out = Vec::new();
        let code = run_info(&args, &mut out).unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn valid_code_text() {
        let (code, out) = run("1800101123450", false);
        assert_eq!(code, 0);
        assert_eq!(
            out,
            "1800101123450\nvalid: da\nnationalitate: Romana\nsex: Masculin\nan: 1980\n\
             luna: 1 (Ianuarie)\nzi: 1\njudet: Cluj (12)\nnnn: 345\n"
        );
    }

    #[test]
    fn invalid_code_text_names_the_rule() {
        let (code, out) = run("1800101123456", false);
        assert_eq!(code, 1);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "valid: nu");
        assert!(lines[2].starts_with("error: "));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn json_report() {
        let (code, out) = run("2800101123452", true);
        assert_eq!(code, 0);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["cnp"], "2800101123452");
        assert_eq!(value["valid"], true);
        assert_eq!(value["sex"], "Feminin");
        assert_eq!(value["birth_year"], 1980);
        assert_eq!(value["county"]["name"], "Cluj");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn json_report_for_garbage() {
        let (code, out) = run("abc", true);
        assert_eq!(code, 1);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["valid"], false);
        assert!(value["error"].is_string());
        assert!(value.get("sex").is_none());
    }
}
