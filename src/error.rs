//! Error types for the linkedin-video-dl application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Input errors
    #[error("No post URL given")]
    MissingUrl,

    #[error("The URL does not appear to be from LinkedIn: {0}")]
    InvalidUrl(String),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to fetch page: HTTP {0}")]
    PageStatus(u16),

    #[error("HTTP {0} while downloading video")]
    DownloadStatus(u16),

    #[error("Response does not appear to be a video (Content-Type: {0})")]
    UnexpectedContentType(String),

    // Extraction errors
    #[error("No videos found in this post")]
    NoVideosFound,

    #[error("Invalid extraction pattern: {0}")]
    Pattern(#[from] regex::Error),

    // File system errors
    #[error("File {} already exists", .0.display())]
    FileExists(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Message followed by each underlying cause not already part of it.
    pub fn report(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            let text = cause.to_string();
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = std::error::Error::source(cause);
        }
        message
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: u8 = 0;
    pub const FAILURE: u8 = 1;
}

#[cfg(test)]
mod tests {
    use std::fmt;
    use std::io;

    use super::*;

    #[derive(Debug)]
    struct Outer(Inner);

    #[derive(Debug)]
    struct Inner;

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "client error")
        }
    }

    impl fmt::Display for Inner {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "connection refused")
        }
    }

    impl std::error::Error for Outer {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.0)
        }
    }

    impl std::error::Error for Inner {}

    #[test]
    fn test_report_appends_causes() {
        let err = Error::from(io::Error::new(io::ErrorKind::Other, Outer(Inner)));
        assert_eq!(err.to_string(), "IO error: client error");
        assert_eq!(err.report(), "IO error: client error: connection refused");
    }

    #[test]
    fn test_report_without_causes() {
        assert_eq!(Error::NoVideosFound.report(), "No videos found in this post");
        assert_eq!(Error::PageStatus(404).report(), "Failed to fetch page: HTTP 404");
    }
}
