//! Tree scanner — depth-bounded directory inventory with aggregated
//! folder sizes.
//!
//! A scan runs in two phases over the subtree bounded by `max_depth`:
//!
//! - **Phase A (classification):** every non-excluded file within the depth
//!   limit becomes a standalone [`Entry`]; every non-excluded directory is
//!   recorded as a *listed folder*. Excluded directories are fully opaque:
//!   never listed, never recursed into, never counted.
//! - **Phase B (aggregation):** each listed folder gets one entry whose size
//!   is the sum of its entire subtree (unbounded depth), excluding files
//!   already reported standalone and excluding anything under a nested
//!   listed folder.
//!
//! Phase B is a pure function of the immutable sets from Phase A, computed
//! per folder, so it runs on the rayon pool across listed folders.

mod aggregate;
pub mod rules;

pub use rules::ExclusionRules;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::classify::Classifier;
use crate::error::ScanError;
use crate::model::Entry;

/// Depth-bounded directory scanner.
///
/// Holds the process-wide immutable configuration: the exclusion rule tables
/// and the classifier. Construct once at startup; [`scan`](Self::scan) takes
/// `&self` and keeps no state across invocations.
pub struct TreeScanner {
    rules: ExclusionRules,
    classifier: Classifier,
}

impl Default for TreeScanner {
    fn default() -> Self {
        Self::new(ExclusionRules::default(), Classifier::new())
    }
}

impl TreeScanner {
    pub fn new(rules: ExclusionRules, classifier: Classifier) -> Self {
        Self { rules, classifier }
    }

    /// Inventory the tree under `root` down to `max_depth` path segments.
    ///
    /// Returns entries ordered by name: standalone file entries for every
    /// non-excluded file within the depth limit, and one aggregate entry per
    /// non-excluded directory within the limit. Depth is measured from
    /// `root`, which is itself depth 0 and never an entry.
    ///
    /// Fails only on the invalid-argument preconditions (missing root, root
    /// not a directory, `max_depth < 1`). Unreadable entries encountered
    /// mid-traversal are skipped with a warning.
    pub fn scan(&self, root: &Path, max_depth: usize) -> Result<Vec<Entry>, ScanError> {
        if max_depth < 1 {
            return Err(ScanError::InvalidDepth(max_depth));
        }
        let metadata = std::fs::metadata(root)
            .map_err(|_| ScanError::RootNotFound(root.to_path_buf()))?;
        if !metadata.is_dir() {
            return Err(ScanError::NotADirectory(root.to_path_buf()));
        }
        // Canonicalize once so every path in the result (and in the
        // cross-referencing sets below) shares one normalized form.
        let root = root
            .canonicalize()
            .map_err(|source| ScanError::RootUnresolvable {
                path: root.to_path_buf(),
                source,
            })?;

        let start = Instant::now();

        // Phase A — classification pass.
        let (mut entries, scanned_files, listed_folders) = self.classify_subtree(&root, max_depth);
        debug!(
            "classification pass: {} files, {} folders in {:?}",
            entries.len(),
            listed_folders.len(),
            start.elapsed()
        );

        // Phase B — folder aggregation. Each folder depends only on the
        // immutable sets from Phase A, so the folders are summed in parallel.
        let listed_set: BTreeSet<PathBuf> = listed_folders.iter().cloned().collect();
        let folder_entries: Vec<Entry> = listed_folders
            .par_iter()
            .map(|folder| {
                let size =
                    aggregate::folder_size(folder, &self.rules, &scanned_files, &listed_set);
                Entry::folder(folder.clone(), size)
            })
            .collect();
        entries.extend(folder_entries);

        entries.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.path.cmp(&b.path)));
        debug!(
            "scan of {} complete: {} entries in {:?}",
            root.display(),
            entries.len(),
            start.elapsed()
        );
        Ok(entries)
    }

    /// Phase A: walk depth 1..=`max_depth`, producing the standalone file
    /// entries, the individually-scanned file set, and the listed folders.
    fn classify_subtree(
        &self,
        root: &Path,
        max_depth: usize,
    ) -> (Vec<Entry>, BTreeSet<PathBuf>, Vec<PathBuf>) {
        let mut entries = Vec::new();
        let mut scanned_files = BTreeSet::new();
        let mut listed_folders = Vec::new();

        let walker = WalkDir::new(root)
            .min_depth(1)
            .max_depth(max_depth)
            .sort_by_file_name()
            .into_iter()
            // Pruning here is what makes excluded directories opaque: the
            // walker never descends into a filtered entry.
            .filter_entry(|entry| !self.rules.is_excluded(&entry.file_name().to_string_lossy()));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("skipping unreadable entry: {err}");
                    continue;
                }
            };
            let file_type = entry.file_type();
            if file_type.is_dir() {
                listed_folders.push(entry.into_path());
            } else if file_type.is_file() {
                let size = match entry.metadata() {
                    Ok(meta) => meta.len(),
                    Err(err) => {
                        warn!("skipping unreadable file {}: {err}", entry.path().display());
                        continue;
                    }
                };
                let path = entry.into_path();
                let classification = self.classifier.classify(&path);
                scanned_files.insert(path.clone());
                entries.push(Entry::file(path, classification, size));
            }
            // Anything else (symlinks, sockets, devices) is neither a file
            // nor a folder entry; the walker's default symlink behavior
            // applies, with no extra cycle handling.
        }

        (entries, scanned_files, listed_folders)
    }
}
