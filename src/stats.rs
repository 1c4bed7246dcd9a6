//! Display-only figures. None of this feeds back into the analysis.

use crate::client::types::{CategorizedSuggestions, DocumentInsights};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

lazy_static! {
    static ref SENTENCE_END: Regex = Regex::new(r"[.!?]+").unwrap();
}

/// Words as counted under the editor: whitespace-separated tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn average_word_length(insights: &DocumentInsights) -> f64 {
    ratio(insights.character_count, insights.word_count)
}

pub fn average_sentence_length(insights: &DocumentInsights) -> f64 {
    ratio(insights.word_count, insights.sentence_count)
}

fn ratio(total: usize, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

pub fn score_label(score: u32) -> &'static str {
    if score >= 90 {
        "Excellent"
    } else if score >= 70 {
        "Good"
    } else {
        "Needs Improvement"
    }
}

/// Terminal color name for a score.
pub fn score_color(score: u32) -> &'static str {
    if score >= 90 {
        "green"
    } else if score >= 70 {
        "yellow"
    } else {
        "red"
    }
}

pub fn total_suggestions(categorized: &CategorizedSuggestions) -> usize {
    categorized
        .categories()
        .iter()
        .map(|(_, items)| items.len())
        .sum()
}

/// Figures computed locally, without the service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStats {
    pub words: usize,
    pub characters: usize,
    pub sentences: usize,
    pub average_word_length: f64,
    pub reading_minutes: usize,
}

impl TextStats {
    pub fn from_text(text: &str) -> Self {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let graphemes: usize = tokens.iter().map(|t| t.graphemes(true).count()).sum();
        let sentences = if tokens.is_empty() {
            0
        } else {
            SENTENCE_END.find_iter(text).count().max(1)
        };

        Self {
            words: tokens.len(),
            characters: text.chars().count(),
            sentences,
            average_word_length: ratio(graphemes, tokens.len()),
            reading_minutes: if tokens.is_empty() {
                0
            } else {
                (tokens.len() / 200).max(1)
            },
        }
    }
}
