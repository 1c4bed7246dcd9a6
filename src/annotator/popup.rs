use super::{AnnotatedDocument, MarkerId};
use crate::SpanKind;

/// Gap between the bottom of a marker and the top of its popup.
pub const POPUP_GAP: f64 = 5.0;

pub const DEFAULT_POPUP_WIDTH: f64 = 240.0;

/// Bounding box of a rendered marker, relative to the visible viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scroll_x: 0.0,
            scroll_y: 0.0,
        }
    }

    pub fn scrolled(mut self, scroll_x: f64, scroll_y: f64) -> Self {
        self.scroll_x = scroll_x;
        self.scroll_y = scroll_y;
        self
    }
}

/// Suggestion list opened on one marker.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionPopup {
    pub marker: MarkerId,
    pub x: f64,
    pub y: f64,
    pub word: String,
    pub suggestions: Vec<String>,
    pub kind: SpanKind,
}

/// Build the popup for an activated marker.
///
/// The popup is anchored below the marker. Horizontally it is shifted left
/// as needed to stay inside the viewport, and never past its left edge.
pub fn locate(
    document: &AnnotatedDocument,
    marker: MarkerId,
    anchor: Rect,
    viewport: Viewport,
    popup_width: f64,
) -> Option<SuggestionPopup> {
    let span = document.marker(marker)?;

    let max_x = viewport.scroll_x + viewport.width - popup_width;
    let x = (anchor.left + viewport.scroll_x)
        .min(max_x)
        .max(viewport.scroll_x);
    let y = anchor.bottom() + viewport.scroll_y + POPUP_GAP;

    Some(SuggestionPopup {
        marker,
        x,
        y,
        word: span.word.clone(),
        suggestions: span.suggestions.clone(),
        kind: span.kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotator::annotate;
    use crate::ErrorSpan;

    fn document() -> AnnotatedDocument {
        let spans = vec![
            ErrorSpan::new("teh", 0, 3, SpanKind::Correctness).with_suggestions(["the"]),
            ErrorSpan::new("very", 4, 8, SpanKind::Engagement)
                .with_suggestions(["extremely", "incredibly"]),
        ];
        annotate("teh very", &spans)
    }

    #[test]
    fn test_anchors_below_marker() {
        let doc = document();
        let anchor = Rect::new(100.0, 40.0, 30.0, 18.0);
        let popup = locate(&doc, MarkerId(0), anchor, Viewport::new(1024.0, 768.0), 240.0)
            .unwrap();

        assert_eq!(popup.x, 100.0);
        assert_eq!(popup.y, 63.0);
        assert_eq!(popup.word, "teh");
        assert_eq!(popup.suggestions, vec!["the"]);
        assert_eq!(popup.kind, SpanKind::Correctness);
    }

    #[test]
    fn test_scroll_offsets_are_added() {
        let doc = document();
        let anchor = Rect::new(10.0, 10.0, 30.0, 10.0);
        let viewport = Viewport::new(800.0, 600.0).scrolled(0.0, 200.0);
        let popup = locate(&doc, MarkerId(1), anchor, viewport, 240.0).unwrap();

        assert_eq!(popup.y, 225.0);
    }

    #[test]
    fn test_clamped_to_right_edge() {
        let doc = document();
        let anchor = Rect::new(700.0, 10.0, 40.0, 10.0);
        let popup = locate(&doc, MarkerId(1), anchor, Viewport::new(800.0, 600.0), 240.0)
            .unwrap();

        assert_eq!(popup.x, 560.0);
        assert!(popup.y > anchor.bottom());
    }

    #[test]
    fn test_narrow_viewport_pins_left_edge() {
        let doc = document();
        let anchor = Rect::new(50.0, 0.0, 20.0, 10.0);
        let popup = locate(&doc, MarkerId(0), anchor, Viewport::new(100.0, 100.0), 240.0)
            .unwrap();

        assert_eq!(popup.x, 0.0);
    }

    #[test]
    fn test_unknown_marker() {
        let doc = document();
        let popup = locate(&doc, MarkerId(9), Rect::default(), Viewport::new(10.0, 10.0), 5.0);
        assert!(popup.is_none());
    }
}
