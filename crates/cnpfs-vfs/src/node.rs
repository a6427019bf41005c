//! # Namespace Nodes
//!
//! The namespace is a closed set of node variants. Every `match` on [`Node`]
//! is exhaustive, so adding a variant forces the resolver and the shell to
//! handle it at compile time.
//!
//! ```text
//! /                                   Root
//! ├── 1/                              Partial("1")
//! │   ├── name                        Leaf("1")
//! │   └── 8 -> /18                    Symlink
//! └── 1800101123450/                  Final(cnp)
//!     ├── valid, sex, an, ...         Leaf
//!     └── schimba/                    Changes(cnp)
//!         └── sex/                    Choices { cnp, field: Sex }
//!             └── Feminin -> /2800101123452
//! ```
//!
//! Nodes are plain values. A node never holds its children; listing and
//! lookup recompute them from the node's parameters (see
//! [`crate::directory`]).

use serde::{Deserialize, Serialize};

use cnpfs_core::{Cnp, CnpField};

/// A numeric prefix of 1-12 digits: an incomplete CNP.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prefix(String);

impl Prefix {
    /// Longest prefix that is still incomplete.
    pub const MAX_LEN: usize = 12;

    /// Accept `value` if it is 1-12 ASCII digits.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let s = value.into();
        let ok = (1..=Self::MAX_LEN).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit());
        ok.then_some(Self(s))
    }

    /// The digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One node of the namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    /// The namespace root.
    Root,
    /// A directory for an incomplete prefix.
    Partial(Prefix),
    /// A directory for a complete 13-digit code, valid or not.
    Final(Cnp),
    /// The `schimba` directory of a valid code.
    Changes(Cnp),
    /// The alternatives for one field of a valid code.
    Choices {
        /// Code being altered.
        cnp: Cnp,
        /// Field being altered.
        field: CnpField,
    },
    /// A readable value.
    Leaf(String),
    /// A redirect to another path, resolved on demand.
    Symlink(String),
}

/// Coarse classification of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Has entries and can be entered.
    Directory,
    /// Has text contents.
    File,
    /// Redirects to a target path.
    Symlink,
}

impl NodeKind {
    /// Label for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Directory => "Directory",
            Self::File => "File",
            Self::Symlink => "Symlink",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Node {
    /// The namespace root, the sole entry point.
    pub fn root() -> Self {
        Self::Root
    }

    /// Classify this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Root
            | Self::Partial(_)
            | Self::Final(_)
            | Self::Changes(_)
            | Self::Choices { .. } => NodeKind::Directory,
            Self::Leaf(_) => NodeKind::File,
            Self::Symlink(_) => NodeKind::Symlink,
        }
    }

    /// Whether this node has entries.
    pub fn is_directory(&self) -> bool {
        self.kind() == NodeKind::Directory
    }

    /// Text of a leaf.
    pub fn leaf_text(&self) -> Option<&str> {
        match self {
            Self::Leaf(text) => Some(text),
            _ => None,
        }
    }

    /// Target path of a symlink.
    pub fn symlink_target(&self) -> Option<&str> {
        match self {
            Self::Symlink(target) => Some(target),
            _ => None,
        }
    }
}

/// Renders the node's natural absolute path; leaves render their text and
/// symlinks their target.
impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Root => f.write_str("/"),
            Self::Partial(prefix) => write!(f, "/{prefix}"),
            Self::Final(cnp) => write!(f, "/{cnp}"),
            Self::Changes(cnp) => write!(f, "/{cnp}/schimba"),
            Self::Choices { cnp, field } => write!(f, "/{cnp}/schimba/{field}"),
            Self::Leaf(text) => f.write_str(text),
            Self::Symlink(target) => write!(f, "[Symlink -> {target}]"),
        }
    }
}
