//! Media module for finding the video behind a post.
//!
//! Provides:
//! - Matcher strategies over raw and unescaped page text
//! - Candidate URL normalization
//! - Best-candidate selection

pub mod extract;
pub mod normalize;
pub mod select;
pub mod strategy;

pub use extract::Extractor;
pub use normalize::{clean_url, Unescaper};
pub use select::{pick_best_video, VIDEO_EXTENSION};
pub use strategy::{PageText, Strategy};
