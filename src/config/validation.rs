//! Input validation logic.

use crate::error::{Error, Result};

/// Validate the post URL given on the command line.
///
/// Only checks that the URL mentions the expected domain; anything else is
/// left for the page request to reject.
pub fn validate_post_url(url: &str, expected_domain: &str) -> Result<()> {
    let url = url.trim();

    if url.is_empty() {
        return Err(Error::MissingUrl);
    }

    if !url.contains(expected_domain) {
        return Err(Error::InvalidUrl(url.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_post_url() {
        assert!(validate_post_url(
            "https://www.linkedin.com/posts/jane-doe_my-post-activity-123456",
            "linkedin.com"
        )
        .is_ok());
    }

    #[test]
    fn test_empty_url() {
        assert!(matches!(
            validate_post_url("   ", "linkedin.com"),
            Err(Error::MissingUrl)
        ));
    }

    #[test]
    fn test_foreign_domain() {
        assert!(matches!(
            validate_post_url("https://example.com/posts/abc", "linkedin.com"),
            Err(Error::InvalidUrl(_))
        ));
    }
}
