//! The host's single current-document state.
//!
//! Every completed operation replaces the state it owns wholesale. Check and
//! auto-fix results are tagged with the text revision they were requested
//! for and dropped if the text changed in the meantime.

use crate::annotator::{self, AnnotatedDocument, MarkerId, Rect, SuggestionPopup, Viewport};
use crate::client::types::*;
use crate::client::{ClientError, GrammarService};
use crate::ErrorSpan;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Panel {
    Insights,
    Paraphrase,
    Citations,
    AiDetector,
    EssayHelper,
    AiRewrite,
    ToneAdjust,
    EmailGenerator,
}

/// Result of the last completed check.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Analysis {
    pub score: u32,
    pub suggestions: BTreeMap<String, Vec<String>>,
    pub categorized: CategorizedSuggestions,
    pub insights: Option<DocumentInsights>,
    pub advanced: Option<AdvancedFeatures>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to send; no request was made
    Skipped,
    Applied,
    /// The text changed while the request was in flight
    Stale,
}

/// Ticket for a request issued against one text revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRequest {
    revision: u64,
}

#[derive(Debug, Clone, Default)]
pub struct PremiumResults {
    pub auto_fix: Option<AutoFixResponse>,
    pub paraphrase: Option<ParaphraseResponse>,
    pub citations: Option<CitationsResponse>,
    pub ai_detection: Option<AiDetectionResponse>,
    pub essay_help: Option<EssayHelpResponse>,
    pub rewrite: Option<RewriteResponse>,
    pub tone: Option<ToneAdjustResponse>,
    pub email: Option<EmailResponse>,
}

#[derive(Debug, Clone)]
pub struct Session {
    text: String,
    revision: u64,
    analysis: Option<Analysis>,
    spans: Vec<ErrorSpan>,
    document: AnnotatedDocument,
    popup: Option<SuggestionPopup>,
    results: PremiumResults,
    panels: BTreeSet<Panel>,
    popup_width: f64,
}

impl Session {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            revision: 0,
            analysis: None,
            spans: Vec::new(),
            document: AnnotatedDocument::plain(text),
            popup: None,
            results: PremiumResults::default(),
            panels: BTreeSet::new(),
            popup_width: annotator::popup::DEFAULT_POPUP_WIDTH,
        }
    }

    pub fn with_popup_width(mut self, width: f64) -> Self {
        self.popup_width = width;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn analysis(&self) -> Option<&Analysis> {
        self.analysis.as_ref()
    }

    pub fn spans(&self) -> &[ErrorSpan] {
        &self.spans
    }

    pub fn document(&self) -> &AnnotatedDocument {
        &self.document
    }

    pub fn popup(&self) -> Option<&SuggestionPopup> {
        self.popup.as_ref()
    }

    pub fn results(&self) -> &PremiumResults {
        &self.results
    }

    pub fn is_panel_open(&self, panel: Panel) -> bool {
        self.panels.contains(&panel)
    }

    pub fn open_panel(&mut self, panel: Panel) {
        self.panels.insert(panel);
    }

    pub fn close_panel(&mut self, panel: Panel) {
        self.panels.remove(&panel);
    }

    /// Replace the text. Spans from earlier analyses no longer apply.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.revision += 1;
        self.spans.clear();
        self.document = AnnotatedDocument::plain(text);
        self.popup = None;
    }

    /// Start a request for the current text, or `None` when there is
    /// nothing to send.
    pub fn begin(&self) -> Option<PendingRequest> {
        if self.text.trim().is_empty() {
            return None;
        }
        Some(PendingRequest {
            revision: self.revision,
        })
    }

    fn is_current(&self, pending: PendingRequest, operation: &str) -> bool {
        if pending.revision == self.revision {
            return true;
        }
        log::warn!(
            "Discarding {} result for revision {} (text is now at revision {})",
            operation,
            pending.revision,
            self.revision
        );
        false
    }

    /// Run a premium request against the current text.
    ///
    /// The session stays mutably borrowed for the whole call, so the text
    /// cannot change underneath it. Only `check` and `auto_fix` have split
    /// `finish_*` halves that can come back stale.
    fn request<T>(
        &mut self,
        operation: &str,
        call: impl FnOnce(&str) -> Result<T, ClientError>,
        apply: impl FnOnce(&mut Self, T),
    ) -> Result<Outcome, ClientError> {
        if self.begin().is_none() {
            log::debug!("Skipping {}: no text", operation);
            return Ok(Outcome::Skipped);
        }

        let value = call(&self.text).map_err(|e| {
            log::warn!("{} failed: {}", operation, e);
            e
        })?;

        apply(self, value);
        Ok(Outcome::Applied)
    }

    pub fn check(&mut self, service: &dyn GrammarService) -> Result<Outcome, ClientError> {
        let Some(pending) = self.begin() else {
            log::debug!("Skipping check: no text");
            return Ok(Outcome::Skipped);
        };

        let response = service.check(&self.text).map_err(|e| {
            log::warn!("check failed: {}", e);
            e
        })?;
        Ok(self.finish_check(pending, response))
    }

    /// Publish a check result. The span set, document and suggestion map are
    /// replaced, never merged.
    pub fn finish_check(&mut self, pending: PendingRequest, response: CheckResponse) -> Outcome {
        if !self.is_current(pending, "check") {
            return Outcome::Stale;
        }

        self.document = annotator::annotate(&self.text, &response.errors);
        self.spans = response.errors;
        self.popup = None;
        self.analysis = Some(Analysis {
            score: response.score,
            suggestions: response.suggestions,
            categorized: response.categorized_suggestions,
            insights: response.document_insights,
            advanced: response.advanced_features,
        });
        Outcome::Applied
    }

    pub fn auto_fix(&mut self, service: &dyn GrammarService) -> Result<Outcome, ClientError> {
        let Some(pending) = self.begin() else {
            log::debug!("Skipping auto_fix: no text");
            return Ok(Outcome::Skipped);
        };

        let response = service.auto_fix(&self.text).map_err(|e| {
            log::warn!("auto_fix failed: {}", e);
            e
        })?;
        Ok(self.finish_auto_fix(pending, response))
    }

    pub fn finish_auto_fix(&mut self, pending: PendingRequest, response: AutoFixResponse) -> Outcome {
        if !self.is_current(pending, "auto_fix") {
            return Outcome::Stale;
        }

        self.text = response.fixed.clone();
        self.revision += 1;
        self.spans.clear();
        self.document = AnnotatedDocument::plain(&self.text);
        self.popup = None;
        if let Some(analysis) = &mut self.analysis {
            analysis.suggestions.clear();
        }
        self.results.auto_fix = Some(response);
        Outcome::Applied
    }

    pub fn clear_analysis(&mut self) {
        self.analysis = None;
        self.close_panel(Panel::Insights);
        self.spans.clear();
        self.document = AnnotatedDocument::plain(&self.text);
        self.popup = None;
    }

    /// Open the popup for a marker, replacing any popup already open.
    pub fn activate_marker(&mut self, marker: MarkerId, anchor: Rect, viewport: Viewport) -> bool {
        match annotator::locate(&self.document, marker, anchor, viewport, self.popup_width) {
            Some(popup) => {
                self.popup = Some(popup);
                true
            }
            None => false,
        }
    }

    /// Entry point for a delegated click: `value` is the `data-marker`
    /// attribute of the element that was activated.
    pub fn activate_attribute(&mut self, value: &str, anchor: Rect, viewport: Viewport) -> bool {
        match self.document.marker_for_attribute(value) {
            Some((id, _)) => self.activate_marker(id, anchor, viewport),
            None => false,
        }
    }

    pub fn close_popup(&mut self) {
        self.popup = None;
    }

    /// Replace `word` everywhere and re-annotate. Returns how many
    /// occurrences were replaced.
    pub fn apply_suggestion(&mut self, word: &str, replacement: &str) -> usize {
        let result = annotator::apply_replacement(&self.text, &self.spans, word, replacement);

        self.text = result.text;
        self.revision += 1;
        self.spans = result.spans;
        self.document = annotator::annotate(&self.text, &self.spans);
        self.popup = None;
        if let Some(analysis) = &mut self.analysis {
            analysis.suggestions.remove(word);
        }
        result.occurrences
    }

    /// Apply the suggestion at `index` of the open popup.
    pub fn apply_popup_suggestion(&mut self, index: usize) -> Option<usize> {
        let popup = self.popup.as_ref()?;
        let replacement = popup.suggestions.get(index)?.clone();
        let word = popup.word.clone();
        Some(self.apply_suggestion(&word, &replacement))
    }

    /// Fetch the PDF report for the current text and analysis.
    pub fn pdf_report(&self, service: &dyn GrammarService) -> Result<Option<Vec<u8>>, ClientError> {
        if self.begin().is_none() {
            return Ok(None);
        }

        let empty = BTreeMap::new();
        let (insights, suggestions) = match &self.analysis {
            Some(analysis) => (analysis.insights.as_ref(), &analysis.suggestions),
            None => (None, &empty),
        };

        service
            .pdf_report(&self.text, insights, suggestions)
            .map(Some)
            .map_err(|e| {
                log::warn!("pdf_report failed: {}", e);
                e
            })
    }

    pub fn paraphrase(
        &mut self,
        service: &dyn GrammarService,
        style: ParaphraseStyle,
    ) -> Result<Outcome, ClientError> {
        self.request(
            "paraphrase",
            |text| service.paraphrase(text, style),
            |session, result| {
                session.results.paraphrase = Some(result);
                session.open_panel(Panel::Paraphrase);
            },
        )
    }

    pub fn citations(
        &mut self,
        service: &dyn GrammarService,
        style: CitationStyle,
    ) -> Result<Outcome, ClientError> {
        self.request(
            "citations",
            |text| service.citations(text, style),
            |session, result| {
                session.results.citations = Some(result);
                session.open_panel(Panel::Citations);
            },
        )
    }

    pub fn detect_ai(&mut self, service: &dyn GrammarService) -> Result<Outcome, ClientError> {
        self.request(
            "ai_detector",
            |text| service.detect_ai(text),
            |session, result| {
                session.results.ai_detection = Some(result);
                session.open_panel(Panel::AiDetector);
            },
        )
    }

    pub fn essay_help(
        &mut self,
        service: &dyn GrammarService,
        kind: EssayHelpType,
    ) -> Result<Outcome, ClientError> {
        self.request(
            "essay_helper",
            |text| service.essay_help(text, kind),
            |session, result| {
                session.results.essay_help = Some(result);
                session.open_panel(Panel::EssayHelper);
            },
        )
    }

    pub fn ai_rewrite(
        &mut self,
        service: &dyn GrammarService,
        style: RewriteStyle,
    ) -> Result<Outcome, ClientError> {
        self.request(
            "ai_rewrite",
            |text| service.ai_rewrite(text, style),
            |session, result| {
                session.results.rewrite = Some(result);
                session.open_panel(Panel::AiRewrite);
            },
        )
    }

    pub fn adjust_tone(
        &mut self,
        service: &dyn GrammarService,
        tone: Tone,
    ) -> Result<Outcome, ClientError> {
        self.request(
            "tone_adjust",
            |text| service.adjust_tone(text, tone),
            |session, result| {
                session.results.tone = Some(result);
                session.open_panel(Panel::ToneAdjust);
            },
        )
    }

    /// Email drafts work from a prompt, not from the document text.
    pub fn generate_email(
        &mut self,
        service: &dyn GrammarService,
        prompt: &str,
        kind: EmailType,
    ) -> Result<Outcome, ClientError> {
        if prompt.trim().is_empty() {
            return Ok(Outcome::Skipped);
        }

        let email = service.generate_email(prompt, kind).map_err(|e| {
            log::warn!("email_generate failed: {}", e);
            e
        })?;
        self.results.email = Some(email);
        self.open_panel(Panel::EmailGenerator);
        Ok(Outcome::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SpanKind;
    use std::cell::Cell;

    /// In-memory service: `check` flags every "teh" and "very".
    #[derive(Default)]
    struct FakeService {
        calls: Cell<usize>,
        fail: bool,
    }

    impl FakeService {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        fn hit(&self) -> Result<(), ClientError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                Err(ClientError::Status {
                    endpoint: "fake".to_string(),
                    status: 500,
                })
            } else {
                Ok(())
            }
        }
    }

    fn flag(text: &str, word: &str, kind: SpanKind, suggestions: &[&str]) -> Vec<ErrorSpan> {
        let chars: Vec<char> = text.chars().collect();
        let needle: Vec<char> = word.chars().collect();
        let mut spans = Vec::new();
        let mut i = 0;
        while i + needle.len() <= chars.len() {
            if chars[i..i + needle.len()] == needle[..] {
                spans.push(
                    ErrorSpan::new(word, i, i + needle.len(), kind)
                        .with_suggestions(suggestions.iter().copied()),
                );
                i += needle.len();
            } else {
                i += 1;
            }
        }
        spans
    }

    impl GrammarService for FakeService {
        fn check(&self, text: &str) -> Result<CheckResponse, ClientError> {
            self.hit()?;
            let mut errors = flag(text, "teh", SpanKind::Correctness, &["the"]);
            errors.extend(flag(text, "very", SpanKind::Engagement, &["extremely", "truly"]));

            let mut suggestions = BTreeMap::new();
            for span in &errors {
                suggestions.insert(span.word.clone(), span.suggestions.clone());
            }

            Ok(CheckResponse {
                score: 100u32.saturating_sub(errors.len() as u32 * 10),
                suggestions,
                errors,
                ..Default::default()
            })
        }

        fn auto_fix(&self, text: &str) -> Result<AutoFixResponse, ClientError> {
            self.hit()?;
            let (fixed, total_fixes) = annotator::replace_whole_word(text, "teh", "the");
            Ok(AutoFixResponse {
                fixed,
                total_fixes,
                changes: Vec::new(),
            })
        }

        fn pdf_report(
            &self,
            text: &str,
            _insights: Option<&DocumentInsights>,
            suggestions: &BTreeMap<String, Vec<String>>,
        ) -> Result<Vec<u8>, ClientError> {
            self.hit()?;
            Ok(format!("%PDF {} {}", text.len(), suggestions.len()).into_bytes())
        }

        fn paraphrase(
            &self,
            text: &str,
            style: ParaphraseStyle,
        ) -> Result<ParaphraseResponse, ClientError> {
            self.hit()?;
            Ok(ParaphraseResponse {
                style: style.to_string(),
                paraphrased: text.to_uppercase(),
                confidence: 90,
            })
        }

        fn citations(
            &self,
            _text: &str,
            style: CitationStyle,
        ) -> Result<CitationsResponse, ClientError> {
            self.hit()?;
            Ok(CitationsResponse {
                style: style.to_string(),
                ..Default::default()
            })
        }

        fn detect_ai(&self, _text: &str) -> Result<AiDetectionResponse, ClientError> {
            self.hit()?;
            Ok(AiDetectionResponse {
                ai_probability: 20,
                recommendation: "Human-written".to_string(),
                confidence: "Low".to_string(),
                indicators: vec![None],
            })
        }

        fn essay_help(
            &self,
            text: &str,
            _kind: EssayHelpType,
        ) -> Result<EssayHelpResponse, ClientError> {
            self.hit()?;
            Ok(EssayHelpResponse {
                word_count: text.split_whitespace().count(),
                estimated_grade: "C".to_string(),
                ..Default::default()
            })
        }

        fn ai_rewrite(
            &self,
            _text: &str,
            style: RewriteStyle,
        ) -> Result<RewriteResponse, ClientError> {
            self.hit()?;
            Ok(RewriteResponse {
                title: style.to_string(),
                rewrite: String::new(),
            })
        }

        fn adjust_tone(&self, text: &str, tone: Tone) -> Result<ToneAdjustResponse, ClientError> {
            self.hit()?;
            Ok(ToneAdjustResponse {
                original: text.to_string(),
                adjusted: text.to_string(),
                tone: tone.to_string(),
            })
        }

        fn generate_email(
            &self,
            prompt: &str,
            kind: EmailType,
        ) -> Result<EmailResponse, ClientError> {
            self.hit()?;
            Ok(EmailResponse {
                prompt: prompt.to_string(),
                email: format!("Hi,\n{}", prompt),
                kind: kind.to_string(),
            })
        }
    }

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0)
    }

    #[test]
    fn test_empty_text_makes_no_request() {
        let service = FakeService::default();
        let mut session = Session::new("   \n\t ");

        assert_eq!(session.check(&service).unwrap(), Outcome::Skipped);
        assert_eq!(service.calls.get(), 0);
        assert!(session.analysis().is_none());
        assert_eq!(session.revision(), 0);
        assert_eq!(session.text(), "   \n\t ");
    }

    #[test]
    fn test_check_publishes_annotated_document() {
        let service = FakeService::default();
        let mut session = Session::new("teh cat is very teh");

        assert_eq!(session.check(&service).unwrap(), Outcome::Applied);
        assert_eq!(service.calls.get(), 1);
        assert_eq!(session.spans().len(), 3);
        assert_eq!(session.document().marker_count(), 3);
        assert_eq!(session.document().plain_text(), "teh cat is very teh");
        assert_eq!(session.analysis().unwrap().score, 70);
    }

    #[test]
    fn test_check_replaces_previous_result() {
        let service = FakeService::default();
        let mut session = Session::new("teh very");
        session.check(&service).unwrap();
        assert_eq!(session.spans().len(), 2);

        session.set_text("very fine");
        session.check(&service).unwrap();
        assert_eq!(session.spans().len(), 1);
        assert_eq!(session.spans()[0].word, "very");
        assert!(!session.analysis().unwrap().suggestions.contains_key("teh"));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let service = FakeService::default();
        let mut session = Session::new("teh first draft");

        let pending = session.begin().unwrap();
        let response = service.check(session.text()).unwrap();
        session.set_text("a second draft");

        assert_eq!(session.finish_check(pending, response), Outcome::Stale);
        assert!(session.analysis().is_none());
        assert!(session.spans().is_empty());
        assert_eq!(session.document().plain_text(), "a second draft");
    }

    #[test]
    fn test_failure_keeps_prior_state() {
        let mut session = Session::new("teh text");
        session.check(&FakeService::default()).unwrap();
        let before = session.analysis().cloned();

        let err = session.check(&FakeService::failing()).unwrap_err();
        assert!(matches!(err, ClientError::Status { status: 500, .. }));
        assert_eq!(session.analysis().cloned(), before);
        assert_eq!(session.spans().len(), 1);
    }

    #[test]
    fn test_popup_is_single_instance() {
        let mut session = Session::new("teh cat is very");
        session.check(&FakeService::default()).unwrap();

        assert!(session.activate_marker(MarkerId(0), Rect::new(0.0, 0.0, 30.0, 10.0), viewport()));
        assert_eq!(session.popup().unwrap().word, "teh");

        assert!(session.activate_attribute("1", Rect::new(90.0, 0.0, 40.0, 10.0), viewport()));
        let popup = session.popup().unwrap();
        assert_eq!(popup.word, "very");
        assert_eq!(popup.marker, MarkerId(1));
        assert_eq!(popup.suggestions, vec!["extremely", "truly"]);
        assert_eq!(popup.kind, SpanKind::Engagement);
    }

    #[test]
    fn test_unknown_marker_keeps_popup() {
        let mut session = Session::new("teh cat");
        session.check(&FakeService::default()).unwrap();
        session.activate_marker(MarkerId(0), Rect::default(), viewport());

        assert!(!session.activate_attribute("42", Rect::default(), viewport()));
        assert_eq!(session.popup().unwrap().word, "teh");
    }

    #[test]
    fn test_apply_popup_suggestion() {
        let mut session = Session::new("teh cat saw teh very big dog");
        session.check(&FakeService::default()).unwrap();
        session.activate_marker(MarkerId(0), Rect::default(), viewport());

        assert_eq!(session.apply_popup_suggestion(0), Some(2));
        assert_eq!(session.text(), "the cat saw the very big dog");
        assert!(session.popup().is_none());
        assert!(session.spans().iter().all(|s| s.word != "teh"));
        assert!(!session.analysis().unwrap().suggestions.contains_key("teh"));
        // Same-length replacement leaves the remaining offsets valid.
        assert_eq!(session.document().marker_count(), 1);
        assert_eq!(session.document().plain_text(), session.text());
    }

    #[test]
    fn test_length_change_drops_stale_markers() {
        let mut session = Session::new("teh very");
        session.check(&FakeService::default()).unwrap();

        session.apply_suggestion("teh", "these");
        assert_eq!(session.text(), "these very");
        assert_eq!(session.spans().len(), 1);
        assert_eq!(session.document().marker_count(), 0);
        assert_eq!(session.document().rejected().len(), 1);
        assert_eq!(session.document().plain_text(), "these very");
    }

    #[test]
    fn test_apply_invalidates_in_flight_check() {
        let service = FakeService::default();
        let mut session = Session::new("teh very");
        session.check(&service).unwrap();

        let pending = session.begin().unwrap();
        let response = service.check(session.text()).unwrap();
        session.apply_suggestion("very", "truly");

        assert_eq!(session.finish_check(pending, response), Outcome::Stale);
        assert!(session.spans().iter().all(|s| s.word != "very"));
    }

    #[test]
    fn test_auto_fix_replaces_text_and_clears_spans() {
        let service = FakeService::default();
        let mut session = Session::new("teh end");
        session.check(&service).unwrap();

        assert_eq!(session.auto_fix(&service).unwrap(), Outcome::Applied);
        assert_eq!(session.text(), "the end");
        assert!(session.spans().is_empty());
        assert_eq!(session.document().marker_count(), 0);
        assert_eq!(session.results().auto_fix.as_ref().unwrap().total_fixes, 1);
        assert!(session.analysis().unwrap().suggestions.is_empty());
    }

    #[test]
    fn test_clear_analysis() {
        let mut session = Session::new("teh end");
        session.check(&FakeService::default()).unwrap();
        session.activate_marker(MarkerId(0), Rect::default(), viewport());
        session.open_panel(Panel::Insights);

        session.clear_analysis();
        assert!(session.analysis().is_none());
        assert!(!session.is_panel_open(Panel::Insights));
        assert!(session.popup().is_none());
        assert_eq!(session.document().marker_count(), 0);
        assert_eq!(session.text(), "teh end");
    }

    #[test]
    fn test_premium_results_open_panels() {
        let service = FakeService::default();
        let mut session = Session::new("some essay text");

        session.paraphrase(&service, ParaphraseStyle::Formal).unwrap();
        session.citations(&service, CitationStyle::Harvard).unwrap();
        session.detect_ai(&service).unwrap();
        session.essay_help(&service, EssayHelpType::Thesis).unwrap();

        assert_eq!(session.results().paraphrase.as_ref().unwrap().style, "formal");
        assert_eq!(session.results().citations.as_ref().unwrap().style, "Harvard");
        assert_eq!(session.results().essay_help.as_ref().unwrap().word_count, 3);
        assert!(session.is_panel_open(Panel::AiDetector));
        session.close_panel(Panel::AiDetector);
        assert!(!session.is_panel_open(Panel::AiDetector));
    }

    #[test]
    fn test_premium_skips_empty_text() {
        let service = FakeService::default();
        let mut session = Session::new("");

        assert_eq!(session.detect_ai(&service).unwrap(), Outcome::Skipped);
        assert_eq!(session.pdf_report(&service).unwrap(), None);
        assert_eq!(
            session.generate_email(&service, " ", EmailType::Casual).unwrap(),
            Outcome::Skipped
        );
        assert_eq!(service.calls.get(), 0);
    }

    #[test]
    fn test_email_ignores_document_text() {
        let service = FakeService::default();
        let mut session = Session::new("");

        let outcome = session
            .generate_email(&service, "ask for the report", EmailType::FollowUp)
            .unwrap();
        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(session.results().email.as_ref().unwrap().kind, "follow-up");
    }

    #[test]
    fn test_pdf_report_sends_current_suggestions() {
        let service = FakeService::default();
        let mut session = Session::new("teh very");
        session.check(&service).unwrap();

        let bytes = session.pdf_report(&service).unwrap().unwrap();
        assert_eq!(bytes, b"%PDF 8 2".to_vec());
    }
}
