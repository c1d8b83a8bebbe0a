//! Output filename generation.

use crate::media::VIDEO_EXTENSION;

/// Path segment that precedes the slug in a post URL.
const SLUG_MARKER: &str = "posts";

/// Name used when the post URL carries no slug.
pub const DEFAULT_NAME: &str = "linkedin_video";

/// Maximum slug length, in characters.
pub const MAX_NAME_CHARS: usize = 80;

/// Derive the output filename from a post URL.
///
/// `https://www.linkedin.com/posts/jane-doe_my-post-activity-123456?utm=1`
/// becomes `jane-doe_my-post-activity-123456.mp4`.
pub fn build_filename(post_url: &str) -> String {
    let name = extract_slug(post_url).unwrap_or(DEFAULT_NAME);
    let truncated: String = name.chars().take(MAX_NAME_CHARS).collect();

    format!("{}{}", sanitize_component(&truncated), VIDEO_EXTENSION)
}

/// The segment after `/posts/`, without query string or fragment.
fn extract_slug(post_url: &str) -> Option<&str> {
    let mut segments = post_url.split('/');
    segments.by_ref().find(|segment| *segment == SLUG_MARKER)?;

    let slug = segments.next()?;
    let slug = slug.split(['?', '#']).next().unwrap_or("");

    (!slug.is_empty()).then_some(slug)
}

/// Replace characters that are unsafe in a filename with underscores.
pub fn sanitize_component(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}
