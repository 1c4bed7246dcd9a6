use super::{AnnotatedDocument, Segment, MARKER_ATTRIBUTE};

/// Render the document as HTML. Markers carry only their id; a single
/// listener on the container resolves clicks through
/// [`AnnotatedDocument::marker_for_attribute`].
pub fn render(document: &AnnotatedDocument) -> String {
    let mut out = String::new();

    for segment in document.segments() {
        match segment {
            Segment::Text(text) => out.push_str(&escape(text)),
            Segment::Marker(id) => {
                let Some(span) = document.marker(*id) else {
                    continue;
                };
                out.push_str(&format!(
                    "<span class=\"error-highlight\" {}=\"{}\" data-type=\"{}\" \
                     style=\"text-decoration: underline; text-decoration-color: {}; \
                     text-decoration-thickness: 2px; cursor: pointer;\">{}</span>",
                    MARKER_ATTRIBUTE,
                    id,
                    span.kind,
                    escape(&span.color),
                    escape(&span.word)
                ));
            }
        }
    }

    out
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use crate::annotator::annotate;
    use crate::{ErrorSpan, SpanKind};

    #[test]
    fn test_marker_markup() {
        let span = ErrorSpan::new("teh", 0, 3, SpanKind::Correctness);
        let html = annotate("teh end", &[span]).to_html();

        assert!(html.starts_with("<span class=\"error-highlight\" data-marker=\"0\""));
        assert!(html.contains("data-type=\"correctness\""));
        assert!(html.contains("text-decoration-color: red;"));
        assert!(html.ends_with(">teh</span> end"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let text = "<b>tom & jerry</b> \"its\"";
        let span = ErrorSpan::new("its", 20, 23, SpanKind::Correctness);
        let html = annotate(text, &[span]).to_html();

        assert!(html.starts_with("&lt;b&gt;tom &amp; jerry&lt;/b&gt; &quot;"));
        assert!(html.ends_with(">its</span>&quot;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_color_token_cannot_break_out_of_attribute() {
        let mut span = ErrorSpan::new("x", 0, 1, SpanKind::Other);
        span.color = "red\" onclick=\"alert(1)".to_string();
        let html = annotate("x", &[span]).to_html();

        assert!(!html.contains("onclick=\""));
    }
}
