//! Content-type classification — pure, stateless mapping from a file name
//! to (extension, content type, category).
//!
//! Resolution order for the content type:
//! 1. the optional host [`ContentProbe`], when one is installed and returns
//!    a non-empty result;
//! 2. the static extension table below;
//! 3. the generic `application/octet-stream` marker.
//!
//! The probe is the only non-deterministic input; everything else is a table
//! lookup, so classification without a probe is fully deterministic.

use compact_str::CompactString;
use std::path::Path;

use crate::model::Category;

/// Content-type label assigned to folder entries.
pub const DIRECTORY_CONTENT_TYPE: &str = "inode/directory";

/// Content-type label for files no table or probe can resolve.
pub const UNKNOWN_BINARY_CONTENT_TYPE: &str = "application/octet-stream";

/// Best-effort host content-type probe.
///
/// Implementations may consult OS-level MIME databases or sniff file
/// contents. Returning `None` (or an empty string) is always acceptable and
/// simply falls back to the static extension table — probe absence is a
/// recovered condition, never an error.
pub trait ContentProbe: Send + Sync {
    fn probe(&self, path: &Path) -> Option<String>;
}

/// Result of classifying a single file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Lowercase extension, empty if the name has none.
    pub extension: CompactString,
    /// MIME-like content-type label.
    pub content_type: CompactString,
    /// Coarse bucket derived from the content type.
    pub category: Category,
}

/// Stateless classifier with an optional host probe.
#[derive(Default)]
pub struct Classifier {
    probe: Option<Box<dyn ContentProbe>>,
}

impl Classifier {
    /// A classifier with no host probe — the static table is authoritative.
    pub fn new() -> Self {
        Self { probe: None }
    }

    /// A classifier that consults `probe` before the static table.
    pub fn with_probe(probe: Box<dyn ContentProbe>) -> Self {
        Self { probe: Some(probe) }
    }

    /// Classify a file by name: extension, content type, and category.
    ///
    /// Deterministic given the same name and probe result. No I/O is
    /// performed here; a probe implementation may do its own.
    pub fn classify(&self, path: &Path) -> Classification {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        let extension = extension_of(&name);

        let content_type = self
            .probe
            .as_ref()
            .and_then(|p| p.probe(path))
            .filter(|t| !t.is_empty())
            .map(CompactString::from)
            .or_else(|| content_type_for_extension(&extension).map(CompactString::const_new))
            .unwrap_or_else(|| CompactString::const_new(UNKNOWN_BINARY_CONTENT_TYPE));

        let category = category_for_content_type(&content_type);

        Classification {
            extension,
            content_type,
            category,
        }
    }
}

/// Extract the lowercase extension from a file name.
///
/// Empty when there is no `.`, when the dot is the first character (hidden
/// files like `.secret` have no extension), or when the name ends in a dot.
pub fn extension_of(name: &str) -> CompactString {
    match name.rfind('.') {
        Some(i) if i > 0 && i < name.len() - 1 => {
            CompactString::from(name[i + 1..].to_ascii_lowercase())
        }
        _ => CompactString::default(),
    }
}

/// Static extension → content-type fallback table.
///
/// Covers the common document, image, video, audio, archive, and source-code
/// extensions. Anything else resolves to the unknown-binary marker.
pub fn content_type_for_extension(extension: &str) -> Option<&'static str> {
    let content_type = match extension {
        // Documents
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "ppt" => "application/vnd.ms-powerpoint",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "txt" => "text/plain",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "xml" => "application/xml",
        "json" => "application/json",
        // Images
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        // Video
        "mp4" => "video/mp4",
        "avi" => "video/x-msvideo",
        "mov" => "video/quicktime",
        "wmv" => "video/x-ms-wmv",
        "flv" => "video/x-flv",
        "mkv" => "video/x-matroska",
        // Audio
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        "flac" => "audio/flac",
        "aac" => "audio/aac",
        // Archives
        "zip" => "application/zip",
        "rar" => "application/x-rar-compressed",
        "7z" => "application/x-7z-compressed",
        "tar" => "application/x-tar",
        "gz" => "application/gzip",
        // Code
        "java" => "text/x-java-source",
        "py" => "text/x-python",
        "js" => "text/javascript",
        "cpp" => "text/x-c++src",
        "c" => "text/x-csrc",
        "cs" => "text/x-csharp",
        "php" => "text/x-php",
        "rb" => "text/x-ruby",
        "go" => "text/x-go",
        "rs" => "text/x-rust",
        "swift" => "text/x-swift",
        _ => return None,
    };
    Some(content_type)
}

/// Markers that promote a `text/*` content type from Document to Code.
const LANGUAGE_MARKERS: &[&str] = &[
    "java",
    "python",
    "javascript",
    "c++",
    "csharp",
    "php",
    "ruby",
    "go",
    "rust",
    "swift",
];

/// Markers that classify a content type as an archive format.
const ARCHIVE_MARKERS: &[&str] = &["zip", "rar", "7z", "tar", "gzip"];

/// Derive the coarse category for a content type.
///
/// Compound office-document types get an exact match first; everything else
/// goes through prefix/substring rules.
pub fn category_for_content_type(content_type: &str) -> Category {
    match content_type {
        "application/pdf"
        | "application/msword"
        | "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        | "application/vnd.ms-excel"
        | "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        | "application/vnd.ms-powerpoint"
        | "application/vnd.openxmlformats-officedocument.presentationml.presentation" => {
            return Category::Document
        }
        DIRECTORY_CONTENT_TYPE => return Category::Directory,
        _ => {}
    }

    if content_type.starts_with("text/") {
        if LANGUAGE_MARKERS.iter().any(|m| content_type.contains(m)) {
            Category::Code
        } else {
            Category::Document
        }
    } else if content_type.starts_with("image/") {
        Category::Image
    } else if content_type.starts_with("video/") {
        Category::Video
    } else if content_type.starts_with("audio/") {
        Category::Audio
    } else if ARCHIVE_MARKERS.iter().any(|m| content_type.contains(m)) {
        Category::Archive
    } else {
        Category::Other
    }
}
