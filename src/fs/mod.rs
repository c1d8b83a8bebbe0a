//! Filesystem module.
//!
//! Provides:
//! - Output filename generation

pub mod naming;

pub use naming::{build_filename, sanitize_component, DEFAULT_NAME, MAX_NAME_CHARS};
