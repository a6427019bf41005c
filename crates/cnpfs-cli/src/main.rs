//! # cnpfs CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! With no subcommand the interactive shell starts at the root.

use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cnpfs_cli::info::{run_info, InfoArgs};
use cnpfs_cli::namespace::{run_cat, run_ls, run_readlink, LsArgs, PathArgs};
use cnpfs_cli::shell::{run_shell, ShellArgs};

/// Browse Romanian personal numeric codes (CNP) as a virtual file system.
///
/// Every prefix, complete code, derived fact and single-field alteration
/// has a path. Alterations live under `<cnp>/schimba/<field>/<value>`.
#[derive(Parser, Debug)]
#[command(name = "cnpfs", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output on stderr. Repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the interactive shell.
    Shell(ShellArgs),

    /// List a directory.
    Ls(LsArgs),

    /// Print a leaf.
    Cat(PathArgs),

    /// Print a symlink's target.
    Readlink(PathArgs),

    /// Validate a code and print its facts.
    Info(InfoArgs),
}

fn filter_for(verbose: u8) -> EnvFilter {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(filter_for(cli.verbose))
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    tracing::debug!("cnpfs v{} starting", env!("CARGO_PKG_VERSION"));

    let mut stdout = io::stdout();
    let result = match cli.command {
        None => run_shell(&ShellArgs::default()),
        Some(Commands::Shell(args)) => run_shell(&args),
        Some(Commands::Ls(args)) => run_ls(&args, &mut stdout),
        Some(Commands::Cat(args)) => run_cat(&args, &mut stdout),
        Some(Commands::Readlink(args)) => run_readlink(&args, &mut stdout),
        Some(Commands::Info(args)) => run_info(&args, &mut stdout),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
