//! # Content Extractor
//!
//! Locates the article text inside a scraping service response. The response
//! shape is not stable across service versions and configurations, so the text
//! is looked up through an ordered table of [`ExtractionRule`]s rather than a
//! fixed schema. The first non-blank string wins.

use std::{fmt, ops::Deref};

use serde_json::{Map, Value};

/// Field names that may carry the page text, in lookup order.
pub const TEXT_FIELDS: [&str; 4] = ["markdown", "content", "text", "pageContent"];

/// Locations probed for [`TEXT_FIELDS`], in priority order.
pub const EXTRACTION_RULES: &[ExtractionRule] = &[
    ExtractionRule::TopLevel,
    ExtractionRule::Record("data"),
    ExtractionRule::List("data"),
    ExtractionRule::Record("document"),
    ExtractionRule::List("documents"),
];

/// A single place in a scrape response where page text may live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionRule {
    /// The text fields sit directly on the response object.
    TopLevel,
    /// The text fields sit on an object under `key`.
    Record(&'static str),
    /// `key` holds a list of objects; the first one carrying text wins.
    List(&'static str),
}

impl ExtractionRule {
    /// Applies this rule to a response object.
    pub fn apply<'a>(&self, doc: &'a Map<String, Value>) -> Option<&'a str> {
        match *self {
            ExtractionRule::TopLevel => text_field(doc),
            ExtractionRule::Record(key) => doc.get(key)?.as_object().and_then(text_field),
            ExtractionRule::List(key) => doc
                .get(key)?
                .as_array()?
                .iter()
                .filter_map(Value::as_object)
                .find_map(text_field),
        }
    }
}

impl fmt::Display for ExtractionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionRule::TopLevel => write!(f, "top-level"),
            ExtractionRule::Record(key) => write!(f, "{key}"),
            ExtractionRule::List(key) => write!(f, "{key}[]"),
        }
    }
}

fn text_field(record: &Map<String, Value>) -> Option<&str> {
    TEXT_FIELDS
        .iter()
        .filter_map(|field| record.get(*field)?.as_str())
        .find(|text| !text.trim().is_empty())
}

/// Finds the page text in `doc` along with the rule that matched.
///
/// Returns `None` when `doc` is not an object or when none of the
/// [`EXTRACTION_RULES`] yields a non-blank string.
pub fn locate_text(doc: &Value) -> Option<(&str, ExtractionRule)> {
    let doc = doc.as_object()?;

    EXTRACTION_RULES
        .iter()
        .find_map(|rule| rule.apply(doc).map(|text| (text, *rule)))
}

/// Finds the page text in `doc`. See [`locate_text`].
pub fn extract_text(doc: &Value) -> Option<&str> {
    locate_text(doc).map(|(text, _)| text)
}

/// Raw response returned by a [`crate::scrape::PageScraper`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapeResponse(Value);

impl Deref for ScrapeResponse {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Value> for ScrapeResponse {
    fn from(value: Value) -> Self {
        ScrapeResponse(value)
    }
}

impl ScrapeResponse {
    pub fn new(value: Value) -> Self {
        ScrapeResponse(value)
    }

    /// Consumes the response and produces the blog content.
    ///
    /// When no text can be located the whole response is stringified instead,
    /// and the result is marked as [`ContentSource::RawFallback`].
    pub fn into_blog_content(self) -> BlogContent {
        match locate_text(&self.0) {
            Some((text, rule)) => BlogContent {
                text: text.to_string(),
                source: ContentSource::Extracted(rule),
            },
            None => BlogContent {
                text: self.0.to_string(),
                source: ContentSource::RawFallback,
            },
        }
    }
}

/// Where the blog content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    Extracted(ExtractionRule),
    /// Stringified raw response; usable but noisy input for summarization.
    RawFallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogContent {
    text: String,
    source: ContentSource,
}

impl BlogContent {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source(&self) -> ContentSource {
        self.source
    }

    pub fn is_degraded(&self) -> bool {
        self.source == ContentSource::RawFallback
    }
}

impl Deref for BlogContent {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.text
    }
}
