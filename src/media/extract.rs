//! Video URL extraction from post HTML.

use std::collections::HashSet;

use regex::Regex;

use crate::error::Result;
use crate::media::normalize::{clean_url, Unescaper};
use crate::media::strategy::{PageText, Strategy, CDN_SHAPES};

/// Applies an ordered list of strategies to a page and collects the
/// normalized, deduplicated candidate URLs.
#[derive(Debug, Clone)]
pub struct Extractor {
    shapes: Vec<Regex>,
    strategies: Vec<Strategy>,
    unescaper: Unescaper,
}

impl Extractor {
    /// Extractor for LinkedIn post pages.
    pub fn new() -> Result<Self> {
        let shapes = CDN_SHAPES
            .iter()
            .map(|shape| Regex::new(shape))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let strategies = vec![
            Strategy::Shapes,
            Strategy::percent_encoded()?,
            Strategy::Unescaped,
            Strategy::json_field("src", r#"https?://[^"]*licdn\.com[^"]*"#)?,
            Strategy::json_field("contentUrl", r#"https?://[^"]+"#)?,
        ];

        Ok(Self {
            shapes,
            strategies,
            unescaper: Unescaper::new()?,
        })
    }

    /// Strategies in the order they are applied.
    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// Every distinct video URL found in `html`, in discovery order.
    ///
    /// An empty result means nothing matched.
    pub fn extract(&self, html: &str) -> Vec<String> {
        let unescaped = self.unescaper.unescape(html);
        let page = PageText {
            raw: html,
            unescaped: &unescaped,
        };

        let mut seen = HashSet::new();
        let mut urls = Vec::new();

        for strategy in &self.strategies {
            let mut added = 0usize;
            for candidate in strategy.candidates(page, &self.shapes) {
                if let Some(url) = clean_url(&candidate) {
                    if seen.insert(url.clone()) {
                        urls.push(url);
                        added += 1;
                    }
                }
            }
            tracing::debug!("Strategy {}: {} new URL(s)", strategy, added);
        }

        urls
    }
}
