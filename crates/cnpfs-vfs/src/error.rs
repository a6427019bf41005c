//! # Resolution Errors
//!
//! Every failure in the namespace is local and recoverable. Callers that do
//! not care about the reason use [`crate::Resolver::resolve()`], which folds
//! these into `None`.

use thiserror::Error;

/// Why a path could not be resolved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A segment names no child of the directory it was looked up in.
    #[error("no such file or directory: \"{segment}\" in {path}")]
    MalformedPathSegment {
        /// The segment that failed to match.
        segment: String,
        /// Logical path of the directory searched.
        path: String,
    },

    /// A path continued past a leaf.
    #[error("not a directory: {path}")]
    NotADirectory {
        /// Logical path of the leaf.
        path: String,
    },

    /// Contents were requested from a directory or symlink.
    #[error("not a file: {path}")]
    NotAFile {
        /// Logical path of the node.
        path: String,
    },

    /// A symlink operation was requested on something else.
    #[error("not a symlink: {path}")]
    NotASymlink {
        /// Logical path of the node.
        path: String,
    },

    /// A symlink's target does not resolve.
    #[error("broken symlink {name} -> {target} (not found)")]
    BrokenSymlink {
        /// Name under which the symlink was found.
        name: String,
        /// Raw target text.
        target: String,
    },

    /// Symlinks nested deeper than the resolver allows.
    #[error("too many levels of symbolic links at {path}")]
    SymlinkLoop {
        /// Logical path where the limit was hit.
        path: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broken_symlink_shows_raw_target() {
        let err = ResolveError::BrokenSymlink {
            name: "3".to_string(),
            target: "/nowhere".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/nowhere"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn segment_error_names_directory() {
        let err = ResolveError::MalformedPathSegment {
            segment: "x".to_string(),
            path: "/12".to_string(),
        };
        assert_eq!(err.to_string(), "no such file or directory: \"x\" in /12");
    }
}
