//! Data model for scan results.
//!
//! Re-exports the entry row type, its category enum, and size formatting.

pub mod entry;
pub mod size;

pub use entry::{Category, Entry};
pub use size::{format_count, format_size};
