//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// LinkedIn video downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "linkedin-video-dl",
    version,
    about = "Download the video from a public LinkedIn post",
    long_about = "Fetches a public LinkedIn post, finds the video URL embedded in the page \
                  and saves the video next to you as <post-slug>.mp4."
)]
pub struct Args {
    /// LinkedIn post URL, e.g. https://www.linkedin.com/posts/user_slug-activity-123
    pub url: Option<String>,

    /// Directory to save the video in.
    #[arg(short, long = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// Browser user agent string.
    #[arg(long = "user-agent")]
    pub user_agent: Option<String>,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Hide the spinner and progress bar.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable info logging.
    #[arg(long, short)]
    pub verbose: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Log filter used when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else if self.verbose {
            "info"
        } else {
            "warn"
        }
    }

    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }

        if let Some(user_agent) = &self.user_agent {
            config.user_agent = user_agent.clone();
        }

        // Boolean flags (only override if set to non-default)
        if self.no_color {
            config.color = false;
        }

        if self.quiet {
            config.show_progress = false;
        }
    }
}
