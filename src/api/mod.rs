//! HTTP layer.
//!
//! One client serves both requests the tool makes:
//! - The post page, with browser-like headers
//! - The video file, with a referer and a longer timeout

pub mod client;

pub use client::PostClient;
