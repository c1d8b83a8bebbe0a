//! Console output utilities. Everything goes to stderr.

use crate::output::format;

/// Likely reasons a public post yields no video URL.
const NO_VIDEO_REASONS: [&str; 3] = [
    "The post does not contain a video",
    "The post is private or requires authentication",
    "LinkedIn blocked the request",
];

/// Prints formatted messages to stderr with a fixed color setting.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    color: bool,
}

impl Console {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Whether output is colored.
    pub fn color(&self) -> bool {
        self.color
    }

    /// Print the application banner.
    pub fn banner(&self) {
        eprintln!("{}", format::banner(self.color));
    }

    /// Print usage help.
    pub fn usage(&self) {
        eprintln!("{}", format::usage(self.color));
    }

    /// Print a numbered step.
    pub fn step(&self, current: usize, total: usize, message: &str) {
        eprintln!("{}", format::step(current, total, message, self.color));
    }

    /// Print an info message.
    pub fn info(&self, message: &str) {
        eprintln!("{}", format::info(message, self.color));
    }

    /// Print a success message.
    pub fn success(&self, message: &str) {
        eprintln!("{}", format::success(message, self.color));
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        eprintln!("{}", format::error(message, self.color));
    }

    /// Print why a post may have no video.
    pub fn no_video_reasons(&self) {
        eprintln!(
            "{}",
            format::bullet_list("Possible reasons:", &NO_VIDEO_REASONS, self.color)
        );
    }

    /// Highlight a filename for use inside a message.
    pub fn filename(&self, name: &str) -> String {
        format::filename(name, self.color)
    }
}
