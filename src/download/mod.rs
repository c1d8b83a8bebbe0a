//! Download module.
//!
//! This module provides:
//! - The post pipeline (fetch, extract, pick, download)
//! - Streaming video download through a temporary file
//! - Progress tracking with pluggable sinks

pub mod post;
pub mod progress;
pub mod video;

pub use post::download_post;
pub use progress::{NoProgress, Progress, ProgressSink, ProgressTracker};
pub use video::{download_video, write_atomically};
