//! Runtime settings.

use std::path::PathBuf;
use std::time::Duration;

/// Desktop Chrome user agent sent on every request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Referer sent with the video request.
pub const DEFAULT_REFERER: &str = "https://www.linkedin.com/";

/// Substring a post URL must contain.
pub const DEFAULT_DOMAIN: &str = "linkedin.com";

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Browser user agent string.
    pub user_agent: String,

    /// Referer header for the video request.
    pub referer: String,

    /// Domain substring required in the post URL.
    pub expected_domain: String,

    /// Timeout for the post page request.
    pub page_timeout: Duration,

    /// Timeout for the whole video transfer.
    pub download_timeout: Duration,

    /// Minimum delay between two progress redraws.
    pub progress_interval: Duration,

    /// Directory the video is written into.
    pub output_dir: PathBuf,

    /// Whether console output is colored.
    pub color: bool,

    /// Whether to show the spinner and progress bar.
    pub show_progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            expected_domain: DEFAULT_DOMAIN.to_string(),
            page_timeout: Duration::from_secs(30),
            download_timeout: Duration::from_secs(10 * 60),
            progress_interval: Duration::from_millis(100),
            output_dir: PathBuf::from("."),
            color: console::colors_enabled_stderr(),
            show_progress: true,
        }
    }
}

impl Config {
    /// Full path of a file inside the output directory.
    pub fn output_path(&self, filename: &str) -> PathBuf {
        self.output_dir.join(filename)
    }
}
