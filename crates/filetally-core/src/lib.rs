//! filetally core — scanning, classification, and data model.
//!
//! This crate contains all business logic with zero front-end dependencies.
//! It is designed to be reusable across different frontends (CLI, TUI, GUI).
//!
//! # Modules
//!
//! - [`model`] — Entry rows, categories, and size formatting.
//! - [`classify`] — Content-type probing and extension-based classification.
//! - [`scanner`] — Depth-bounded tree scanner with folder size aggregation.
//! - [`error`] — Scan error taxonomy.

pub mod classify;
pub mod error;
pub mod model;
pub mod scanner;
