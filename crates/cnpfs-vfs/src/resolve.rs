//! # Path Resolution
//!
//! A [`Location`] is a node together with the chain of directories walked
//! to reach it. The chain is what makes `..` work: nodes have no parent
//! pointers, and the logical parent after following a symlink is the
//! directory the symlink was found in, not the target's natural parent.
//!
//! ```text
//! /1800101123450/schimba/sex/Feminin        logical path (pwd)
//! /2800101123452                            natural path of the node
//! ```
//!
//! ## Rules
//!
//! - Empty segments and `.` stay put.
//! - `..` pops one frame; at the root it is a no-op.
//! - A leading `/` restarts at the root.
//! - A symlink is resolved from the directory containing it, and the result
//!   is pushed under the symlink's own name.
//! - A leaf ends the walk; anything after it is [`ResolveError::NotADirectory`].
//!
//! Resolution is pure: the same start and path always give structurally
//! equal results, and nothing is cached between calls.

use crate::error::ResolveError;
use crate::node::Node;

/// Symlink nesting limit, matching the common Linux `MAXSYMLINKS`.
pub const MAX_SYMLINK_DEPTH: usize = 40;

/// One step of a walk: a directory and the segment taken out of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Frame {
    node: Node,
    name: String,
}

/// A resolved node and the lineage that led to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    node: Node,
    lineage: Vec<Frame>,
}

impl Location {
    /// The namespace root.
    pub fn root() -> Self {
        Self {
            node: Node::root(),
            lineage: Vec::new(),
        }
    }

    /// The node at this location.
    pub fn node(&self) -> &Node {
        &self.node
    }

    /// Consume the location, keeping only the node.
    pub fn into_node(self) -> Node {
        self.node
    }

    /// Number of segments below the root.
    pub fn depth(&self) -> usize {
        self.lineage.len()
    }

    /// Whether this is the root with no lineage.
    pub fn is_root(&self) -> bool {
        self.lineage.is_empty()
    }

    /// The enclosing directory, or `None` at the root.
    pub fn parent(&self) -> Option<Location> {
        let mut parent = self.clone();
        parent.ascend().then_some(parent)
    }

    /// Logical absolute path, e.g. `/1/2/name`.
    pub fn path(&self) -> String {
        let mut path = String::from("/");
        let names: Vec<&str> = self.lineage.iter().map(|f| f.name.as_str()).collect();
        path.push_str(&names.join("/"));
        path
    }

    /// Children of the node here, in display order.
    ///
    /// # Errors
    ///
    /// [`ResolveError::NotADirectory`] for leaves and symlinks.
    pub fn list_children(&self) -> Result<Vec<String>, ResolveError> {
        if self.node.is_directory() {
            Ok(self.node.entries())
        } else {
            Err(ResolveError::NotADirectory { path: self.path() })
        }
    }

    /// Text of the leaf here.
    ///
    /// # Errors
    ///
    /// [`ResolveError::NotAFile`] for directories and symlinks.
    pub fn read_leaf(&self) -> Result<&str, ResolveError> {
        self.node
            .leaf_text()
            .ok_or_else(|| ResolveError::NotAFile { path: self.path() })
    }

    fn descend(&mut self, name: &str, child: Node) {
        let parent = std::mem::replace(&mut self.node, child);
        self.lineage.push(Frame {
            node: parent,
            name: name.to_string(),
        });
    }

    fn ascend(&mut self) -> bool {
        match self.lineage.pop() {
            Some(frame) => {
                self.node = frame.node;
                true
            }
            None => false,
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

/// Whether a symlink resolves, with its raw target for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymlinkStatus {
    /// Raw target text.
    pub target: String,
    /// Whether the target resolves from the symlink's directory.
    pub found: bool,
}

impl std::fmt::Display for SymlinkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.found {
            write!(f, "{}", self.target)
        } else {
            write!(f, "{} (not found)", self.target)
        }
    }
}

/// Walks paths through the namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolver {
    max_symlink_depth: usize,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    /// A resolver with the default symlink nesting limit.
    pub fn new() -> Self {
        Self {
            max_symlink_depth: MAX_SYMLINK_DEPTH,
        }
    }

    /// A resolver with a custom symlink nesting limit.
    pub fn with_max_symlink_depth(max_symlink_depth: usize) -> Self {
        Self { max_symlink_depth }
    }

    /// Resolve `path` from `start`, following every symlink.
    ///
    /// # Errors
    ///
    /// Any [`ResolveError`] describing the first segment that failed.
    pub fn try_resolve(&self, start: &Location, path: &str) -> Result<Location, ResolveError> {
        self.walk(start, path, 0, true)
    }

    /// Resolve `path` from `start`, or `None` if it does not resolve.
    pub fn resolve(&self, start: &Location, path: &str) -> Option<Location> {
        self.try_resolve(start, path).ok()
    }

    /// Resolve `path` but return its final node as-is, without following
    /// a trailing symlink.
    ///
    /// # Errors
    ///
    /// As [`Resolver::try_resolve()`] for every segment but the last.
    pub fn resolve_no_follow(&self, start: &Location, path: &str) -> Result<Node, ResolveError> {
        self.walk(start, path, 0, false).map(Location::into_node)
    }

    /// Resolve a symlink node from the directory it was found in.
    ///
    /// The result carries the lineage of the target path itself; use
    /// [`Resolver::try_resolve()`] on the symlink's name to get the
    /// reparented location instead.
    ///
    /// # Errors
    ///
    /// [`ResolveError::NotASymlink`] if `link` is not a symlink, otherwise
    /// [`ResolveError::BrokenSymlink`] or [`ResolveError::SymlinkLoop`].
    pub fn follow_symlink(&self, link: &Node, from: &Location) -> Result<Location, ResolveError> {
        match link {
            Node::Symlink(target) => self.follow(from, target, target, 0),
            _ => Err(ResolveError::NotASymlink { path: from.path() }),
        }
    }

    /// Report whether a symlink resolves, without failing on broken links.
    pub fn symlink_status(&self, link: &Node, from: &Location) -> Option<SymlinkStatus> {
        let target = link.symlink_target()?;
        Some(SymlinkStatus {
            target: target.to_string(),
            found: self.follow_symlink(link, from).is_ok(),
        })
    }

    fn walk(
        &self,
        start: &Location,
        path: &str,
        depth: usize,
        follow_last: bool,
    ) -> Result<Location, ResolveError> {
        let mut loc = if path.starts_with('/') {
            Location::root()
        } else {
            start.clone()
        };
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        for (i, segment) in segments.iter().copied().enumerate() {
            if !loc.node.is_directory() {
                return Err(ResolveError::NotADirectory { path: loc.path() });
            }
            match segment {
                "." => continue,
                ".." => {
                    loc.ascend();
                    continue;
                }
                _ => {}
            }

            tracing::trace!(dir = %loc.path(), segment, "resolving segment");
            let child = loc
                .node
                .get(segment)
                .ok_or_else(|| ResolveError::MalformedPathSegment {
                    segment: segment.to_string(),
                    path: loc.path(),
                })?;

            let is_last = i + 1 == segments.len();
            match child {
                Node::Symlink(target) if follow_last || !is_last => {
                    let resolved = self.follow(&loc, segment, &target, depth)?;
                    loc.descend(segment, resolved.into_node());
                }
                other => loc.descend(segment, other),
            }
        }
        Ok(loc)
    }

    fn follow(
        &self,
        from: &Location,
        name: &str,
        target: &str,
        depth: usize,
    ) -> Result<Location, ResolveError> {
        if depth >= self.max_symlink_depth {
            return Err(ResolveError::SymlinkLoop { path: from.path() });
        }
        tracing::debug!(from = %from.path(), name, target, depth, "following symlink");
        self.walk(from, target, depth + 1, true)
            .map_err(|err| match err {
                ResolveError::SymlinkLoop { .. } => err,
                _ => ResolveError::BrokenSymlink {
                    name: name.to_string(),
                    target: target.to_string(),
                },
            })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Paths made only of digit segments, which always resolve.
    fn digit_path() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(
            (0u8..=9).prop_map(|d| d.to_string()),
            0..=13,
        )
    }

    proptest! {
        #[test]
        fn resolution_is_deterministic(path in digit_path()) {
            let path = path.join("/");
            let resolver = Resolver::new();
            let a = resolver.try_resolve(&Location::root(), &path);
            let b = resolver.try_resolve(&Location::root(), &path);
            prop_assert_eq!(a, b);
        }

        /// `..` undoes one descent, symlinks included.
        #[test]
        fn dotdot_inverts_descent(path in digit_path(), last in 0u8..=9) {
            prop_assume!(path.len() < 13);
            let resolver = Resolver::new();
            let here = resolver.try_resolve(&Location::root(), &path.join("/")).unwrap();
            let there = resolver.try_resolve(&here, &last.to_string()).unwrap();
            let back = resolver.try_resolve(&there, "..").unwrap();
            prop_assert_eq!(back, here);
        }

        /// Every listed entry resolves, and listing twice gives the same names.
        #[test]
        fn listing_agrees_with_lookup(path in digit_path()) {
            let resolver = Resolver::new();
            let loc = resolver.try_resolve(&Location::root(), &path.join("/")).unwrap();
            let entries = loc.list_children().unwrap();
            prop_assert_eq!(&entries, &loc.list_children().unwrap());
            for name in entries {
                prop_assert!(loc.node().get(&name).is_some(), "{} missing", name);
            }
        }

        #[test]
        fn path_depth_matches_segments(path in digit_path()) {
            let loc = Resolver::new()
                .try_resolve(&Location::root(), &path.join("/"))
                .unwrap();
            prop_assert_eq!(loc.depth(), path.len());
        }
    }
}
