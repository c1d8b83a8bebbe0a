//! linkedin-video-dl - download the video of a public LinkedIn post.
//!
//! The pipeline is a straight line:
//!
//! - Fetch the post page with browser-like headers
//! - Extract candidate video URLs with an ordered list of matcher strategies
//! - Pick the most likely full-quality URL
//! - Stream it through `<name>.tmp` into `<post-slug>.mp4`
//!
//! # Example
//!
//! ```no_run
//! use linkedin_video_dl::{download_post, Config, Console, Extractor, PostClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let client = PostClient::new(&config)?;
//!     let extractor = Extractor::new()?;
//!     let console = Console::new(false);
//!
//!     let path = download_post(
//!         &client,
//!         &extractor,
//!         &config,
//!         &console,
//!         "https://www.linkedin.com/posts/jane-doe_my-post-activity-123456",
//!     )
//!     .await?;
//!     println!("saved {}", path.display());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;

// Re-exports for convenience
pub use api::PostClient;
pub use config::Config;
pub use download::{download_post, download_video, Progress, ProgressSink};
pub use error::{Error, Result};
pub use media::{pick_best_video, Extractor};
pub use output::Console;
