//! # Interactive Shell
//!
//! A line-oriented browser over the namespace. The shell owns a current
//! [`Location`] and delegates every lookup to the [`Resolver`].
//!
//! ## Commands
//!
//! - `ls [path]`: list a directory; a leaf prints its own path.
//! - `cd <path>`: change the current directory.
//! - `cat <path>`: print a leaf.
//! - `readlink <path>`: print a symlink's raw target.
//! - `pwd`: print the logical path of the current directory.
//! - `exit`, `quit`: leave the loop.
//!
//! Failures print one line and the loop continues.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Args;
use cnpfs_vfs::{Location, NodeKind, Resolver};
use thiserror::Error;

/// Arguments for `cnpfs shell`.
#[derive(Args, Debug)]
pub struct ShellArgs {
    /// Directory to start in.
    #[arg(long, default_value = "/")]
    pub cwd: String,
}

impl Default for ShellArgs {
    fn default() -> Self {
        Self {
            cwd: "/".to_string(),
        }
    }
}

/// Execute `cnpfs shell` on standard input and output.
pub fn run_shell(args: &ShellArgs) -> Result<u8> {
    let mut shell = Shell::with_cwd(&args.cwd)?;
    tracing::info!(cwd = %shell.cwd(), "shell started");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    shell.run(stdin.lock(), &mut stdout)?;
    Ok(0)
}

/// A failed shell command. The display text is what the user sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The path does not resolve.
    #[error("Error: No such file or directory {0}")]
    NoSuchEntry(String),

    /// `cat` on a directory or symlink.
    #[error("Error: {0} is not a file")]
    NotAFile(String),

    /// `readlink` on something other than a symlink.
    #[error("Error: {0} is not a symlink")]
    NotASymlink(String),

    /// `cd` to a leaf or a missing path.
    #[error("Cannot change to directory {0}")]
    CannotChangeDirectory(String),

    /// Unknown command or wrong argument count.
    #[error("Invalid command!")]
    InvalidCommand,
}

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// `ls [path]`.
    List(Option<&'a str>),
    /// `cd <path>`.
    Change(&'a str),
    /// `cat <path>`.
    Cat(&'a str),
    /// `readlink <path>`.
    Readlink(&'a str),
    /// `pwd`.
    Pwd,
    /// `exit` or `quit`.
    Exit,
}

impl<'a> Command<'a> {
    /// Parse a line. `Ok(None)` for blank lines.
    ///
    /// # Errors
    ///
    /// [`CommandError::InvalidCommand`] for unknown commands and for
    /// commands given the wrong number of arguments.
    pub fn parse(line: &'a str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, Some(rest.trim())),
            None => (line, None),
        };
        let command = match (name, arg) {
            ("ls", arg) => Self::List(arg),
            ("cd", Some(path)) => Self::Change(path),
            ("cat", Some(path)) => Self::Cat(path),
            ("readlink", Some(path)) => Self::Readlink(path),
            ("pwd", None) => Self::Pwd,
            ("exit" | "quit", None) => Self::Exit,
            _ => return Err(CommandError::InvalidCommand),
        };
        Ok(Some(command))
    }
}

/// Whether the loop keeps reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop the loop.
    Exit,
}

/// Shell state: a resolver and the current directory.
#[derive(Debug, Clone, Default)]
pub struct Shell {
    resolver: Resolver,
    cwd: Location,
}

impl Shell {
    /// A shell at the namespace root.
    pub fn new() -> Self {
        Self::default()
    }

    /// A shell starting in `path`.
    ///
    /// # Errors
    ///
    /// [`CommandError::CannotChangeDirectory`] if `path` is not a directory.
    pub fn with_cwd(path: &str) -> Result<Self, CommandError> {
        let mut shell = Self::new();
        shell.cd(path)?;
        Ok(shell)
    }

    /// The current directory.
    pub fn cwd(&self) -> &Location {
        &self.cwd
    }

    /// Logical path of the current directory.
    pub fn pwd(&self) -> String {
        self.cwd.path()
    }

    /// Entries of `path`, or of the current directory.
    ///
    /// A leaf lists as its own path. A symlink lists its target directory.
    pub fn ls(&self, path: Option<&str>) -> Result<Vec<String>, CommandError> {
        let Some(path) = path else {
            return self
                .cwd
                .list_children()
                .map_err(|_| CommandError::NoSuchEntry(self.pwd()));
        };
        let missing = || CommandError::NoSuchEntry(path.to_string());
        let node = self
            .resolver
            .resolve_no_follow(&self.cwd, path)
            .map_err(|_| missing())?;
        match node.kind() {
            NodeKind::File => Ok(vec![path.to_string()]),
            NodeKind::Directory | NodeKind::Symlink => self
                .resolver
                .try_resolve(&self.cwd, path)
                .and_then(|loc| loc.list_children())
                .map_err(|_| missing()),
        }
    }

    /// Move to `path` if it resolves to a directory.
    pub fn cd(&mut self, path: &str) -> Result<(), CommandError> {
        match self.resolver.try_resolve(&self.cwd, path) {
            Ok(loc) if loc.node().is_directory() => {
                tracing::debug!(from = %self.cwd, to = %loc, "changed directory");
                self.cwd = loc;
                Ok(())
            }
            Ok(_) => Err(CommandError::CannotChangeDirectory(path.to_string())),
            Err(err) => {
                tracing::debug!(path, %err, "cd failed");
                Err(CommandError::CannotChangeDirectory(path.to_string()))
            }
        }
    }

    /// Text of the leaf at `path`.
    pub fn cat(&self, path: &str) -> Result<String, CommandError> {
        let loc = self
            .resolver
            .try_resolve(&self.cwd, path)
            .map_err(|_| CommandError::NoSuchEntry(path.to_string()))?;
        loc.read_leaf()
            .map(str::to_string)
            .map_err(|_| CommandError::NotAFile(path.to_string()))
    }

    /// Raw target of the symlink at `path`, flagged when it does not resolve.
    pub fn readlink(&self, path: &str) -> Result<String, CommandError> {
        let missing = || CommandError::NoSuchEntry(path.to_string());
        let node = self
            .resolver
            .resolve_no_follow(&self.cwd, path)
            .map_err(|_| missing())?;
        let dir = match path.trim_end_matches('/').rsplit_once('/') {
            Some(("", _)) => "/",
            Some((dir, _)) => dir,
            None => ".",
        };
        let from = self
            .resolver
            .try_resolve(&self.cwd, dir)
            .map_err(|_| missing())?;
        self.resolver
            .symlink_status(&node, &from)
            .map(|status| status.to_string())
            .ok_or_else(|| CommandError::NotASymlink(path.to_string()))
    }

    /// Run one input line, writing its output to `out`.
    pub fn execute(&mut self, line: &str, out: &mut impl Write) -> io::Result<Flow> {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(err) => {
                writeln!(out, "{err}")?;
                return Ok(Flow::Continue);
            }
        };
        tracing::trace!(?command, cwd = %self.cwd, "executing");

        let result = match command {
            Command::List(path) => self.ls(path).map(|entries| entries.join("\n")),
            Command::Change(path) => self.cd(path).map(|()| String::new()),
            Command::Cat(path) => self.cat(path),
            Command::Readlink(path) => self.readlink(path),
            Command::Pwd => Ok(self.pwd()),
            Command::Exit => return Ok(Flow::Exit),
        };
        match result {
            Ok(text) if text.is_empty() => {}
            Ok(text) => writeln!(out, "{text}")?,
            Err(err) => writeln!(out, "{err}")?,
        }
        Ok(Flow::Continue)
    }

    /// Prompt, read and execute until `exit` or end of input.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
        let mut lines = input.lines();
        loop {
            write!(out, "> ")?;
            out.flush()?;
            let Some(line) = lines.next().transpose()? else {
                writeln!(out)?;
                return Ok(());
            };
            if self.execute(&line, out)? == Flow::Exit {
                return Ok(());
            }
        }
    }
}
