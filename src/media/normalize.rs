//! Candidate URL cleanup and page text unescaping.

use std::borrow::Cow;

use regex::{Captures, Regex};
use url::Url;

use crate::error::Result;

/// Characters stripped from the end of a raw match.
const TRAILING_JUNK: &[char] = &['"', '\'', '\\', ';', ',', ')', '>', ']', '}'];

/// HTML-escaped double quotes. A match runs past these when the URL sits in
/// an entity-encoded attribute.
const ESCAPED_QUOTES: [&str; 3] = ["&quot;", "&#34;", "&#x22;"];

/// Normalize a raw match into a URL string, or `None` if it isn't one.
pub fn clean_url(raw: &str) -> Option<String> {
    let end = ESCAPED_QUOTES
        .iter()
        .filter_map(|quote| raw.find(quote))
        .min()
        .unwrap_or(raw.len());

    let cleaned = raw[..end]
        .trim_end_matches(TRAILING_JUNK)
        .replace("&amp;", "&")
        .replace("\\u002F", "/")
        .replace("\\/", "/");

    match Url::parse(&cleaned) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Some(cleaned),
        _ => None,
    }
}

/// Percent-decode a run such as `https%3A%2F%2F...`.
///
/// Returns `None` if the decoded bytes are not UTF-8.
pub fn percent_decode(raw: &str) -> Option<String> {
    urlencoding::decode(raw).ok().map(Cow::into_owned)
}

/// Decodes the escape forms LinkedIn uses when embedding URLs in markup and
/// inline JSON: `\uXXXX`, `\/` and HTML character references.
#[derive(Debug, Clone)]
pub struct Unescaper {
    unicode: Regex,
    entity: Regex,
}

impl Unescaper {
    pub fn new() -> Result<Self> {
        Ok(Self {
            unicode: Regex::new(r"\\u([0-9a-fA-F]{4})")?,
            entity: Regex::new(r"&(#[xX][0-9a-fA-F]{1,6}|#[0-9]{1,7}|[a-zA-Z]+);")?,
        })
    }

    /// Return a copy of `text` with all known escapes decoded.
    ///
    /// Unknown entities and lone surrogates are left as written.
    pub fn unescape(&self, text: &str) -> String {
        let text = self.unicode.replace_all(text, |caps: &Captures| {
            u32::from_str_radix(&caps[1], 16)
                .ok()
                .and_then(char::from_u32)
                .map(String::from)
                .unwrap_or_else(|| caps[0].to_string())
        });

        let text = text.replace("\\/", "/");

        self.entity
            .replace_all(&text, |caps: &Captures| {
                decode_entity(&caps[1])
                    .map(String::from)
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}

/// Decode the body of an HTML character reference (between `&` and `;`).
fn decode_entity(name: &str) -> Option<char> {
    if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
        return u32::from_str_radix(hex, 16).ok().and_then(char::from_u32);
    }

    if let Some(dec) = name.strip_prefix('#') {
        return dec.parse().ok().and_then(char::from_u32);
    }

    match name {
        "amp" => Some('&'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "lt" => Some('<'),
        "gt" => Some('>'),
        _ => None,
    }
}
