//! Folder size aggregation — the scanner's second phase.
//!
//! Each listed folder's size is the sum of every non-excluded regular file
//! anywhere in its subtree (unbounded depth), minus what is accounted for
//! elsewhere:
//!
//! - files already reported as standalone entries (the individually-scanned
//!   set) are skipped, and
//! - any other listed folder nested inside is pruned wholesale, because it
//!   carries its own aggregate.
//!
//! Together these give the exact-once accounting invariant: no byte appears
//! in two entries, and an ancestor's total never re-counts a listed
//! descendant's total.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use super::rules::ExclusionRules;

/// Compute the aggregated size of one listed folder.
///
/// Pure function of the folder and the two immutable sets produced by the
/// classification pass, so callers may evaluate folders in any order or in
/// parallel. Unreadable files contribute 0 bytes with a warning rather than
/// aborting the aggregation.
pub(crate) fn folder_size(
    folder: &Path,
    rules: &ExclusionRules,
    scanned_files: &BTreeSet<PathBuf>,
    listed_folders: &BTreeSet<PathBuf>,
) -> u64 {
    let walker = WalkDir::new(folder)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| {
            if rules.is_excluded(&entry.file_name().to_string_lossy()) {
                return false;
            }
            // A nested listed folder carries its own aggregate — prune it.
            !(entry.file_type().is_dir() && listed_folders.contains(entry.path()))
        });

    let mut total: u64 = 0;
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("aggregation skipping unreadable entry under {}: {err}", folder.display());
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if scanned_files.contains(entry.path()) {
            continue;
        }
        match entry.metadata() {
            Ok(meta) => total += meta.len(),
            Err(err) => {
                warn!("could not stat {} (counted as 0 bytes): {err}", entry.path().display());
            }
        }
    }
    total
}
