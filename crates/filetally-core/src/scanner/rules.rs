//! Exclusion rules — which names never become entries and never count
//! toward an aggregate.
//!
//! The rule set is an immutable value built once at startup and passed by
//! reference into the scanner. The same test applies to files and
//! directories; an excluded directory is fully opaque (never recursed into).

use std::collections::HashSet;

use crate::classify::extension_of;

/// Exact names that are never reported (OS metadata, VCS/editor directories).
const DENIED_NAMES: &[&str] = &[
    "Thumbs.db",
    ".DS_Store",
    "desktop.ini",
    ".git",
    ".svn",
    ".idea",
    ".vscode",
];

/// Extensions of temp/backup/log files that are never reported.
const DENIED_EXTENSIONS: &[&str] = &["tmp", "temp", "swp", "bak", "log", "~"];

/// Conventional dotfiles that stay visible despite the hidden-name rule.
const VISIBLE_DOTFILES: &[&str] = &[".gitignore", ".gitattributes", ".editorconfig"];

/// Prefix marking macOS resource-fork metadata files.
const RESOURCE_FORK_PREFIX: &str = "._";

/// Immutable denylist configuration for a scan.
#[derive(Debug, Clone)]
pub struct ExclusionRules {
    denied_names: HashSet<&'static str>,
    denied_extensions: HashSet<&'static str>,
    visible_dotfiles: HashSet<&'static str>,
}

impl Default for ExclusionRules {
    fn default() -> Self {
        Self {
            denied_names: DENIED_NAMES.iter().copied().collect(),
            denied_extensions: DENIED_EXTENSIONS.iter().copied().collect(),
            visible_dotfiles: VISIBLE_DOTFILES.iter().copied().collect(),
        }
    }
}

impl ExclusionRules {
    /// Decide whether a file or directory name is excluded.
    ///
    /// Tested in order: exact denied names, the resource-fork prefix, the
    /// hidden-name rule (with its allow-list), then denied extensions.
    pub fn is_excluded(&self, name: &str) -> bool {
        if self.denied_names.contains(name) {
            return true;
        }
        if name.starts_with(RESOURCE_FORK_PREFIX) {
            return true;
        }
        if name.starts_with('.') && !self.visible_dotfiles.contains(name) {
            return true;
        }
        let extension = extension_of(name);
        !extension.is_empty() && self.denied_extensions.contains(extension.as_str())
    }
}
