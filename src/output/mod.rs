//! Output module for console output and progress.
//!
//! Provides:
//! - Pure formatting functions with an explicit color flag
//! - A stderr console
//! - Spinner and progress line

pub mod console;
pub mod format;
pub mod progress;

pub use self::console::Console;
pub use progress::{create_spinner, TerminalProgress};
