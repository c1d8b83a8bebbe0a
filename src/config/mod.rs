//! Configuration module for linkedin-video-dl.
//!
//! This module handles:
//! - Runtime settings and their defaults
//! - Input validation

pub mod settings;
pub mod validation;

pub use settings::{Config, DEFAULT_DOMAIN, DEFAULT_REFERER, DEFAULT_USER_AGENT};
pub use validation::validate_post_url;
