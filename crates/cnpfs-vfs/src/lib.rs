//! # cnpfs-vfs: Virtual Namespace over CNPs
//!
//! A read-only, lazily generated directory tree in which every numeric
//! prefix, every 13-digit code, every derived fact and every single-field
//! alteration of a valid code has a path.
//!
//! ## Key Design Principles
//!
//! 1. **Nodes are values.** A [`Node`] carries only the parameters that
//!    identify it. Children are recomputed on every [`Node::entries()`] or
//!    [`Node::get()`], so the tree is never materialized.
//!
//! 2. **Parents live in the walk.** A [`Location`] keeps the chain of
//!    directories walked to reach a node. After following a symlink, `..`
//!    returns to the directory that contained the link.
//!
//! 3. **Symlinks are absolute.** Prefix digits and alteration choices link to
//!    `/<digits>`, which resolves identically from any directory.
//!
//! 4. **Bounded following.** The [`Resolver`] stops after
//!    [`resolve::MAX_SYMLINK_DEPTH`] nested links with
//!    [`ResolveError::SymlinkLoop`].
//!
//! ## Crate Policy
//!
//! - Depends only on `cnpfs-core` among workspace crates.
//! - No I/O. Logging goes through `tracing` at `trace`/`debug` level.
//! - No `unsafe` code.

pub mod directory;
pub mod error;
pub mod node;
pub mod resolve;

pub use directory::{CHANGES_ENTRY, FINAL_ENTRIES, NAME_ENTRY};
pub use error::ResolveError;
pub use node::{Node, NodeKind, Prefix};
pub use resolve::{Location, Resolver, SymlinkStatus, MAX_SYMLINK_DEPTH};
