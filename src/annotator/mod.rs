pub mod html;
pub mod popup;
pub mod replace;

pub use popup::{locate, Rect, SuggestionPopup, Viewport};
pub use replace::{apply_replacement, replace_whole_word, Replacement};

use crate::ErrorSpan;
use std::collections::BTreeMap;
use std::fmt;

/// Attribute carried by every rendered marker; its value is a `MarkerId`.
pub const MARKER_ATTRIBUTE: &str = "data-marker";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkerId(pub usize);

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Marker(MarkerId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// `start >= end`
    Empty,
    /// `end` lies past the last character of the text
    OutOfBounds,
    /// The text at the offsets is not the flagged word
    WordMismatch,
    /// Intersects a span that was already placed
    Overlap,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            RejectReason::Empty => "empty range",
            RejectReason::OutOfBounds => "out of bounds",
            RejectReason::WordMismatch => "word does not match text",
            RejectReason::Overlap => "overlaps another span",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedSpan {
    pub span: ErrorSpan,
    pub reason: RejectReason,
}

/// Text split into plain runs and markers, plus the side-table that maps
/// each marker back to the span it was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotatedDocument {
    segments: Vec<Segment>,
    markers: BTreeMap<MarkerId, ErrorSpan>,
    rejected: Vec<RejectedSpan>,
}

impl AnnotatedDocument {
    /// Document without any markers.
    pub fn plain(text: &str) -> Self {
        let segments = if text.is_empty() {
            Vec::new()
        } else {
            vec![Segment::Text(text.to_string())]
        };

        Self {
            segments,
            markers: BTreeMap::new(),
            rejected: Vec::new(),
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn marker(&self, id: MarkerId) -> Option<&ErrorSpan> {
        self.markers.get(&id)
    }

    /// Markers in document order.
    pub fn markers(&self) -> impl Iterator<Item = (MarkerId, &ErrorSpan)> {
        self.markers.iter().map(|(id, span)| (*id, span))
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn rejected(&self) -> &[RejectedSpan] {
        &self.rejected
    }

    /// Resolve the raw value of a `data-marker` attribute, as read by a
    /// delegated click listener on the rendered container.
    pub fn marker_for_attribute(&self, value: &str) -> Option<(MarkerId, &ErrorSpan)> {
        let id = MarkerId(value.trim().parse().ok()?);
        self.marker(id).map(|span| (id, span))
    }

    /// Visible content with every marker reduced to its word.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Marker(id) => {
                    if let Some(span) = self.markers.get(id) {
                        out.push_str(&span.word);
                    }
                }
            }
        }
        out
    }

    pub fn to_html(&self) -> String {
        html::render(self)
    }
}

/// Byte position of every character boundary, including the end of the text.
struct CharOffsets {
    bytes: Vec<usize>,
}

impl CharOffsets {
    fn new(text: &str) -> Self {
        let bytes = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        Self { bytes }
    }

    fn char_len(&self) -> usize {
        self.bytes.len() - 1
    }

    fn byte(&self, char_offset: usize) -> usize {
        self.bytes[char_offset]
    }
}

enum Piece<'a> {
    Text(&'a str),
    Marker(&'a ErrorSpan),
}

/// Build the annotated form of `text`.
///
/// Spans are placed from the highest `start` down to the lowest, so every
/// cut is made at offsets that are still valid for the original text.
/// Malformed spans are dropped and reported through
/// [`AnnotatedDocument::rejected`]; the text itself is never altered.
pub fn annotate(text: &str, spans: &[ErrorSpan]) -> AnnotatedDocument {
    if spans.is_empty() {
        return AnnotatedDocument::plain(text);
    }

    let offsets = CharOffsets::new(text);
    let mut ordered: Vec<&ErrorSpan> = spans.iter().collect();
    ordered.sort_by(|a, b| b.cmp(a));

    let mut pieces = Vec::new();
    let mut rejected = Vec::new();
    let mut cursor = text.len();
    let mut boundary = offsets.char_len();

    for span in ordered {
        let reason = if span.start >= span.end {
            Some(RejectReason::Empty)
        } else if span.end > offsets.char_len() {
            Some(RejectReason::OutOfBounds)
        } else if span.end > boundary {
            Some(RejectReason::Overlap)
        } else if text[offsets.byte(span.start)..offsets.byte(span.end)] != *span.word {
            Some(RejectReason::WordMismatch)
        } else {
            None
        };

        if let Some(reason) = reason {
            log::warn!(
                "Dropping span '{}' at {}..{}: {}",
                span.word,
                span.start,
                span.end,
                reason
            );
            rejected.push(RejectedSpan {
                span: span.clone(),
                reason,
            });
            continue;
        }

        let start = offsets.byte(span.start);
        let end = offsets.byte(span.end);
        if end < cursor {
            pieces.push(Piece::Text(&text[end..cursor]));
        }
        pieces.push(Piece::Marker(span));
        cursor = start;
        boundary = span.start;
    }

    if cursor > 0 {
        pieces.push(Piece::Text(&text[..cursor]));
    }
    pieces.reverse();

    let mut segments = Vec::with_capacity(pieces.len());
    let mut markers = BTreeMap::new();
    for piece in pieces {
        match piece {
            Piece::Text(run) => segments.push(Segment::Text(run.to_string())),
            Piece::Marker(span) => {
                let id = MarkerId(markers.len());
                markers.insert(id, span.clone());
                segments.push(Segment::Marker(id));
            }
        }
    }

    AnnotatedDocument {
        segments,
        markers,
        rejected,
    }
}

/// 1-indexed line and column of a character offset.
pub fn line_column(text: &str, char_offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;
    for ch in text.chars().take(char_offset) {
        if ch == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    (line, column)
}
