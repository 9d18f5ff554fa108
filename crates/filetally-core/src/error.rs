//! Scan error taxonomy.
//!
//! Only the top-level preconditions of a scan are fatal. Everything
//! encountered mid-traversal (unreadable files, undeterminable content
//! types) is recovered locally and reported on the log channel instead.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors returned by [`crate::scanner::TreeScanner::scan`].
///
/// All variants are invalid-argument conditions: when one is returned, no
/// partial result exists.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The scan root does not exist.
    #[error("root directory does not exist: {0}")]
    RootNotFound(PathBuf),

    /// The scan root exists but is not a directory.
    #[error("root path is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The depth limit is below the minimum of 1.
    #[error("depth limit must be at least 1 (got {0})")]
    InvalidDepth(usize),

    /// The root path could not be resolved to an absolute, normalized form.
    #[error("failed to resolve root path {path}: {source}")]
    RootUnresolvable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
