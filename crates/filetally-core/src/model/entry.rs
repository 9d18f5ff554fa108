//! One reported row of a scan result — a file or a synthetic folder entry.

use compact_str::CompactString;
use serde::Serialize;
use std::path::PathBuf;

use crate::classify::{Classification, DIRECTORY_CONTENT_TYPE};

/// Coarse content bucket derived from an entry's content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Document,
    Image,
    Video,
    Audio,
    Archive,
    Code,
    Directory,
    Other,
}

impl Category {
    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Document => "Document",
            Self::Image => "Image",
            Self::Video => "Video",
            Self::Audio => "Audio",
            Self::Archive => "Archive",
            Self::Code => "Code",
            Self::Directory => "Directory",
            Self::Other => "Other",
        }
    }
}

/// A single reported row.
///
/// Files carry their on-disk byte length; folders carry the aggregated sum
/// computed by the scanner's second phase. Entries are constructed fresh on
/// every scan and hold no references into the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Absolute, normalized location — unique key within one scan result.
    pub path: PathBuf,

    /// Final path component.
    pub name: CompactString,

    /// Lowercase suffix after the last `.`, empty if none.
    /// Folders always have an empty extension.
    pub extension: CompactString,

    /// Classifier-assigned MIME-like label, or `inode/directory` for folders.
    pub content_type: CompactString,

    /// Coarse bucket derived from `content_type`.
    pub category: Category,

    /// On-disk byte length for files; aggregated subtree sum for folders.
    pub size_bytes: u64,

    /// Discriminator — files and folders are the only two variants.
    pub is_directory: bool,
}

impl Entry {
    /// Build a file entry from a path, its classification, and its byte length.
    pub fn file(path: PathBuf, classification: Classification, size_bytes: u64) -> Self {
        let name = final_component(&path);
        Self {
            path,
            name,
            extension: classification.extension,
            content_type: classification.content_type,
            category: classification.category,
            size_bytes,
            is_directory: false,
        }
    }

    /// Build a synthetic folder entry with an aggregated size.
    pub fn folder(path: PathBuf, size_bytes: u64) -> Self {
        let name = final_component(&path);
        Self {
            path,
            name,
            extension: CompactString::default(),
            content_type: CompactString::const_new(DIRECTORY_CONTENT_TYPE),
            category: Category::Directory,
            size_bytes,
            is_directory: true,
        }
    }
}

fn final_component(path: &std::path::Path) -> CompactString {
    path.file_name()
        .map(|n| CompactString::from(n.to_string_lossy()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Classifier;
    use std::path::Path;

    #[test]
    fn file_entry_carries_classification() {
        let classifier = Classifier::new();
        let path = Path::new("/data/report.pdf");
        let entry = Entry::file(path.to_path_buf(), classifier.classify(path), 42);

        assert_eq!(entry.name, "report.pdf");
        assert_eq!(entry.extension, "pdf");
        assert_eq!(entry.content_type, "application/pdf");
        assert_eq!(entry.category, Category::Document);
        assert_eq!(entry.size_bytes, 42);
        assert!(!entry.is_directory);
    }

    #[test]
    fn folder_entry_uses_directory_marker() {
        let entry = Entry::folder(Path::new("/data/docs").to_path_buf(), 1_000);

        assert_eq!(entry.name, "docs");
        assert_eq!(entry.extension, "");
        assert_eq!(entry.content_type, DIRECTORY_CONTENT_TYPE);
        assert_eq!(entry.category, Category::Directory);
        assert!(entry.is_directory);
    }
}
