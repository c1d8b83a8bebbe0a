//! Matcher strategies used by the extractor.

use std::fmt;

use regex::Regex;

use crate::error::Result;
use crate::media::normalize::percent_decode;

/// Known CDN video URL shapes.
pub const CDN_SHAPES: [&str; 3] = [
    r#"https?://dms\.licdn\.com/playlist/[^\s"'\\]+\.mp4[^\s"'\\]*"#,
    r#"https?://dms\.licdn\.com/playlist/vid/[^\s"'\\]+"#,
    r#"https?://[a-z0-9-]+\.licdn\.com/[^\s"'\\]*video[^\s"'\\]*\.mp4[^\s"'\\]*"#,
];

/// Percent-encoded CDN URLs, e.g. inside `?url=` parameters.
///
/// An encoded URL carries its own `&` as `%26`, so a literal `&` ends the run.
pub const PERCENT_ENCODED_CDN: &str = r#"(?i)https?(?::|%3A)%2F%2Fdms\.licdn\.com%2F[^\s"'\\&]+"#;

/// Page text handed to every strategy.
#[derive(Debug, Clone, Copy)]
pub struct PageText<'a> {
    /// HTML exactly as served.
    pub raw: &'a str,
    /// HTML with `\uXXXX`, `\/` and entity escapes decoded.
    pub unescaped: &'a str,
}

/// One extraction technique, tagged by how it finds candidates.
#[derive(Debug, Clone)]
pub enum Strategy {
    /// CDN shapes matched against the raw page.
    Shapes,
    /// Percent-encoded runs, decoded and then matched against the CDN shapes.
    PercentEncoded(Regex),
    /// CDN shapes matched against the unescaped page.
    Unescaped,
    /// First capture group of a `"key": "value"` pattern in the raw page.
    JsonField { key: &'static str, pattern: Regex },
}

impl Strategy {
    /// Percent-encoded strategy for the LinkedIn CDN.
    pub fn percent_encoded() -> Result<Self> {
        Ok(Strategy::PercentEncoded(Regex::new(PERCENT_ENCODED_CDN)?))
    }

    /// Match `"key": "<value>"` where the value matches `value_pattern`.
    pub fn json_field(key: &'static str, value_pattern: &str) -> Result<Self> {
        let pattern = Regex::new(&format!(
            r#""{}"\s*:\s*"({})""#,
            regex::escape(key),
            value_pattern
        ))?;
        Ok(Strategy::JsonField { key, pattern })
    }

    /// Raw candidates found by this strategy, in page order.
    ///
    /// Candidates are not yet normalized.
    pub fn candidates(&self, page: PageText<'_>, shapes: &[Regex]) -> Vec<String> {
        match self {
            Strategy::Shapes => match_shapes(shapes, page.raw),
            Strategy::Unescaped => match_shapes(shapes, page.unescaped),
            Strategy::PercentEncoded(pattern) => pattern
                .find_iter(page.raw)
                .filter_map(|m| percent_decode(m.as_str()))
                .flat_map(|decoded| match_shapes(shapes, &decoded))
                .collect(),
            Strategy::JsonField { pattern, .. } => pattern
                .captures_iter(page.raw)
                .filter_map(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
                .collect(),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Shapes => write!(f, "shapes"),
            Strategy::PercentEncoded(_) => write!(f, "percent-encoded"),
            Strategy::Unescaped => write!(f, "unescaped"),
            Strategy::JsonField { key, .. } => write!(f, "json field \"{}\"", key),
        }
    }
}

/// All matches of every shape, shape by shape.
fn match_shapes(shapes: &[Regex], text: &str) -> Vec<String> {
    shapes
        .iter()
        .flat_map(|shape| shape.find_iter(text).map(|m| m.as_str().to_string()))
        .collect()
}
