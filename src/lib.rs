pub mod annotator;
pub mod cli;
pub mod client;
pub mod config;
pub mod session;
pub mod stats;

pub use annotator::{annotate, AnnotatedDocument, MarkerId};
pub use client::{ClientError, GrammarClient, GrammarService};
pub use config::Config;
pub use session::Session;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category the service assigns to a flagged span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    Correctness,
    Clarity,
    Engagement,
    Delivery,
    #[serde(other)]
    Other,
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpanKind::Correctness => "correctness",
            SpanKind::Clarity => "clarity",
            SpanKind::Engagement => "engagement",
            SpanKind::Delivery => "delivery",
            SpanKind::Other => "other",
        };
        f.write_str(name)
    }
}

/// One issue detected by the analysis service.
///
/// `start` and `end` are a half-open range of character offsets into the
/// exact text the analysis ran against.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ErrorSpan {
    pub start: usize,
    pub end: usize,
    pub word: String,
    #[serde(rename = "type")]
    pub kind: SpanKind,
    pub color: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub message: String,
}

impl ErrorSpan {
    pub fn new(word: &str, start: usize, end: usize, kind: SpanKind) -> Self {
        Self {
            start,
            end,
            word: word.to_string(),
            kind,
            color: default_color(kind).to_string(),
            suggestions: Vec::new(),
            message: String::new(),
        }
    }

    pub fn with_suggestions<I, S>(mut self, suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suggestions = suggestions.into_iter().map(Into::into).collect();
        self
    }
}

/// Color token the service uses for each category.
pub fn default_color(kind: SpanKind) -> &'static str {
    match kind {
        SpanKind::Correctness => "red",
        SpanKind::Clarity => "green",
        SpanKind::Engagement => "blue",
        SpanKind::Delivery => "orange",
        SpanKind::Other => "gray",
    }
}
