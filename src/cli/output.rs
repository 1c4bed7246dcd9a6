use crate::annotator::{AnnotatedDocument, Segment, SuggestionPopup};
use crate::client::types::*;
use crate::session::{Analysis, Session};
use crate::stats::{self, TextStats};
use crate::ErrorSpan;
use colored::*;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    file: String,
    score: u32,
    label: &'static str,
    tone: Option<&'a str>,
    total_suggestions: usize,
    errors: &'a [ErrorSpan],
    categorized_suggestions: &'a CategorizedSuggestions,
    document_insights: Option<&'a DocumentInsights>,
    dropped_spans: usize,
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: Failed to serialize output: {}", e),
    }
}

/// Terminal color for a service color token.
fn marker_color(token: &str) -> Color {
    match token.to_lowercase().as_str() {
        "red" => Color::Red,
        "green" => Color::Green,
        "blue" => Color::Blue,
        "orange" | "yellow" => Color::Yellow,
        "purple" | "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        _ => Color::White,
    }
}

/// Render the annotated text for a terminal: markers are underlined in
/// their category color, or bracketed when color is off.
pub fn render_document(document: &AnnotatedDocument, colored_output: bool) -> String {
    let mut out = String::new();
    for segment in document.segments() {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Marker(id) => {
                let Some(span) = document.marker(*id) else {
                    continue;
                };
                if colored_output {
                    let marked = span.word.color(marker_color(&span.color)).underline();
                    out.push_str(&marked.to_string());
                } else {
                    out.push_str(&format!("[{}]", span.word));
                }
            }
        }
    }
    out
}

pub fn print_check_report(
    file_path: &Path,
    session: &Session,
    colored_output: bool,
    format: &OutputFormat,
) {
    let Some(analysis) = session.analysis() else {
        return;
    };

    match format {
        OutputFormat::Text => print_text_report(file_path, session, analysis, colored_output),
        OutputFormat::Json => print_json(&JsonReport {
            file: file_path.display().to_string(),
            score: analysis.score,
            label: stats::score_label(analysis.score),
            tone: analysis.insights.as_ref().and_then(|i| i.tone.as_deref()),
            total_suggestions: stats::total_suggestions(&analysis.categorized),
            errors: session.spans(),
            categorized_suggestions: &analysis.categorized,
            document_insights: analysis.insights.as_ref(),
            dropped_spans: session.document().rejected().len(),
        }),
    }
}

fn print_text_report(file_path: &Path, session: &Session, analysis: &Analysis, colored_output: bool) {
    let file_name = file_path.display().to_string();
    let score = analysis.score;
    let label = stats::score_label(score);
    let tone = analysis
        .insights
        .as_ref()
        .and_then(|i| i.tone.as_deref())
        .unwrap_or("neutral");
    let total = stats::total_suggestions(&analysis.categorized);

    if colored_output {
        println!("\n{}", file_name.bold().underline());
        println!(
            "  Score: {} {}",
            format!("{}/100", score).color(stats::score_color(score)).bold(),
            label.color(stats::score_color(score))
        );
    } else {
        println!("\n{}", file_name);
        println!("  Score: {}/100 {}", score, label);
    }
    println!("  Tone: {}", tone);
    println!("  {} suggestions found.", total);

    if session.document().marker_count() > 0 {
        println!();
        for line in render_document(session.document(), colored_output).lines() {
            println!("  {}", line);
        }
    }

    let dropped = session.document().rejected().len();
    if dropped > 0 {
        let note = format!("  ({} flagged spans could not be placed in the text)", dropped);
        if colored_output {
            println!("{}", note.dimmed());
        } else {
            println!("{}", note);
        }
    }

    for (name, items) in analysis.categorized.categories() {
        for item in items {
            if colored_output {
                println!(
                    "  {} {} {}",
                    format!("• {}", name).color(category_color(name)).bold(),
                    item.word.bold(),
                    item.message.dimmed()
                );
            } else {
                println!("  • {} {} {}", name, item.word, item.message);
            }

            if !item.suggestions.is_empty() {
                let joined = item.suggestions.join(", ");
                if colored_output {
                    println!("    {} {}", "→".dimmed(), joined.green());
                } else {
                    println!("    → {}", joined);
                }
            }
        }
    }
}

fn category_color(name: &str) -> Color {
    match name {
        "Correctness" => Color::Red,
        "Clarity" => Color::Blue,
        "Engagement" => Color::Green,
        _ => Color::Yellow,
    }
}

pub fn print_insights(analysis: &Analysis, colored_output: bool) {
    let Some(insights) = &analysis.insights else {
        return;
    };

    let heading = |title: &str| {
        if colored_output {
            println!("\n{}", title.cyan().bold());
        } else {
            println!("\n{}", title);
        }
    };

    heading("Document Insights");
    println!(
        "  Overall score: {}/100 - {}",
        analysis.score,
        stats::score_label(analysis.score)
    );
    println!("  Characters: {}", insights.character_count);
    println!("  Words: {}", insights.word_count);
    println!("  Sentences: {}", insights.sentence_count);
    println!("  Reading time: ~{}m", insights.reading_time);
    println!("  Speaking time: ~{}m", insights.speaking_time);

    heading("Readability");
    println!(
        "  Word length (average): {:.1}",
        stats::average_word_length(insights)
    );
    println!(
        "  Sentence length (average): {:.1}",
        stats::average_sentence_length(insights)
    );

    heading("Suggestions Breakdown");
    println!("  Correctness: {}", insights.correctness_errors);
    println!("  Clarity: {}", insights.clarity_suggestions);
    println!("  Engagement: {}", insights.engagement_suggestions);
    println!("  Delivery: {}", insights.delivery_suggestions);

    if let Some(advanced) = &analysis.advanced {
        if let Some(variety) = advanced.sentence_variety_score {
            println!("  Sentence variety: {}", variety);
        }
        if !advanced.ai_rewrites.is_empty() {
            heading("Rewrite Ideas");
            for rewrite in &advanced.ai_rewrites {
                println!("  {}: {}", rewrite.title, rewrite.suggestion);
            }
        }
    }
}

pub fn print_popup(popup: &SuggestionPopup, colored_output: bool) {
    let indent = " ".repeat(popup.x.max(0.0) as usize);
    let header = format!("Suggestions for \"{}\" ({}):", popup.word, popup.kind);
    if colored_output {
        println!("{}{}", indent, header.yellow().bold());
    } else {
        println!("{}{}", indent, header);
    }
}

pub fn print_error(message: &str, colored_output: bool) {
    if colored_output {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    } else {
        eprintln!("✗ {}", message);
    }
}

pub fn print_skipped(file_path: &Path, colored_output: bool) {
    let message = format!("{}: nothing to analyze", file_path.display());
    if colored_output {
        println!("{}", message.dimmed());
    } else {
        println!("{}", message);
    }
}

pub fn print_stats(file_path: &Path, stats: &TextStats, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(stats),
        OutputFormat::Text => {
            println!("{}", file_path.display());
            println!("  Words: {}", stats.words);
            println!("  Characters: {}", stats.characters);
            println!("  Sentences: {}", stats.sentences);
            println!("  Word length (average): {:.1}", stats.average_word_length);
            println!("  Reading time: ~{}m", stats.reading_minutes);
        }
    }
}

pub fn print_paraphrase(result: &ParaphraseResponse, format: &OutputFormat, colored_output: bool) {
    if let OutputFormat::Json = format {
        return print_json(result);
    }
    let title = format!("Paraphrased Text ({}):", result.style);
    if colored_output {
        println!("{}", title.bold());
        println!("  {}", result.paraphrased.italic());
    } else {
        println!("{}", title);
        println!("  {}", result.paraphrased);
    }
    println!("  Confidence: {}%", result.confidence);
}

pub fn print_citations(result: &CitationsResponse, format: &OutputFormat, colored_output: bool) {
    if let OutputFormat::Json = format {
        return print_json(result);
    }
    let title = format!("Generated Citations ({}):", result.style);
    if colored_output {
        println!("{}", title.bold());
    } else {
        println!("{}", title);
    }
    for citation in &result.citations {
        println!("  For: \"{}\"", citation.text);
        println!("    {}", citation.citation);
    }
    println!("  Total citations found: {}", result.total_found);
}

pub fn print_ai_detection(result: &AiDetectionResponse, format: &OutputFormat, colored_output: bool) {
    if let OutputFormat::Json = format {
        return print_json(result);
    }
    let probability = format!("{}%", result.ai_probability);
    if colored_output {
        let colored_probability = if result.ai_probability < 50 {
            probability.green().bold()
        } else {
            probability.red().bold()
        };
        println!("AI probability: {}", colored_probability);
    } else {
        println!("AI probability: {}", probability);
    }
    println!("  {}", result.recommendation);
    println!("  Confidence: {}", result.confidence);
    let indicators: Vec<_> = result.indicators().collect();
    if !indicators.is_empty() {
        println!("  Indicators:");
        for indicator in indicators {
            println!("    • {}", indicator);
        }
    }
}

pub fn print_essay_help(result: &EssayHelpResponse, format: &OutputFormat, colored_output: bool) {
    if let OutputFormat::Json = format {
        return print_json(result);
    }
    println!("Word Count: {}", result.word_count);
    println!("Estimated Grade: {}", result.estimated_grade);
    for suggestion in &result.suggestions {
        if colored_output {
            println!("  {} {}", format!("[{}]", suggestion.kind).cyan(), suggestion.suggestion);
            println!("    {}", suggestion.example.dimmed());
        } else {
            println!("  [{}] {}", suggestion.kind, suggestion.suggestion);
            println!("    {}", suggestion.example);
        }
    }
    let areas: Vec<_> = result.improvement_areas().collect();
    if !areas.is_empty() {
        println!("  Areas to improve:");
        for area in areas {
            println!("    • {}", area);
        }
    }
}

pub fn print_rewrite(result: &RewriteResponse, format: &OutputFormat, colored_output: bool) {
    if let OutputFormat::Json = format {
        return print_json(result);
    }
    if colored_output {
        println!("{}", result.title.bold());
    } else {
        println!("{}", result.title);
    }
    println!("  {}", result.rewrite);
}

pub fn print_tone(result: &ToneAdjustResponse, format: &OutputFormat, colored_output: bool) {
    if let OutputFormat::Json = format {
        return print_json(result);
    }
    let title = format!("Adjusted tone ({}):", result.tone);
    if colored_output {
        println!("{}", title.bold());
    } else {
        println!("{}", title);
    }
    println!("  {}", result.adjusted);
}

pub fn print_email(result: &EmailResponse, format: &OutputFormat) {
    if let OutputFormat::Json = format {
        return print_json(result);
    }
    println!("{}", result.email);
}

/// List the service's corrections for one file, one line per change.
pub fn print_fix_changes(file_path: &Path, result: &AutoFixResponse, colored_output: bool) {
    if result.changes.is_empty() {
        return;
    }
    if colored_output {
        println!("{}", file_path.display().to_string().bold());
    } else {
        println!("{}", file_path.display());
    }
    for change in &result.changes {
        println!("  {}", fix_change_line(change));
    }
}

fn fix_change_line(change: &FixChange) -> String {
    // Negative positions mean the service could not place the change.
    if change.position < 0 {
        format!("{} → {} ({})", change.original, change.fixed, change.kind)
    } else {
        format!(
            "at {}: {} → {} ({})",
            change.position, change.original, change.fixed, change.kind
        )
    }
}

/// `1 file`, `2 files`.
fn counted(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

fn check_summary(total_issues: usize, files: usize) -> String {
    if total_issues == 0 {
        "✓ No issues found!".to_string()
    } else {
        format!(
            "✗ {} found in {}",
            counted(total_issues, "issue"),
            counted(files, "file")
        )
    }
}

fn fix_summary(total_fixed: usize, files: usize) -> String {
    if total_fixed == 0 {
        "No corrections needed!".to_string()
    } else {
        format!(
            "✓ {} applied to {}",
            counted(total_fixed, "correction"),
            counted(files, "file")
        )
    }
}

fn print_summary(line: &str, clean: bool, colored_output: bool) {
    println!();
    if !colored_output {
        println!("{}", line);
    } else if clean {
        println!("{}", line.green().bold());
    } else {
        println!("{}", line.red().bold());
    }
}

pub fn print_check_summary(total_issues: usize, files: &[impl AsRef<Path>], colored: bool) {
    print_summary(
        &check_summary(total_issues, files.len()),
        total_issues == 0,
        colored,
    );
}

pub fn print_fix_summary(total_fixed: usize, files: &[impl AsRef<Path>], colored: bool) {
    print_summary(&fix_summary(total_fixed, files.len()), true, colored);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotator::annotate;
    use crate::SpanKind;

    #[test]
    fn test_plain_rendering_brackets_markers() {
        let spans = vec![
            ErrorSpan::new("Teh", 0, 3, SpanKind::Correctness),
            ErrorSpan::new("very", 4, 8, SpanKind::Engagement),
        ];
        let doc = annotate("Teh very end", &spans);
        assert_eq!(render_document(&doc, false), "[Teh] [very] end");
    }

    #[test]
    fn test_format_parsing() {
        assert!(matches!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json)));
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_marker_colors() {
        assert_eq!(marker_color("orange"), Color::Yellow);
        assert_eq!(marker_color("Blue"), Color::Blue);
        assert_eq!(marker_color("chartreuse"), Color::White);
    }

    #[test]
    fn test_summaries_count_nouns() {
        assert_eq!(check_summary(0, 3), "✓ No issues found!");
        assert_eq!(check_summary(1, 1), "✗ 1 issue found in 1 file");
        assert_eq!(check_summary(4, 2), "✗ 4 issues found in 2 files");
        assert_eq!(fix_summary(0, 1), "No corrections needed!");
        assert_eq!(fix_summary(1, 2), "✓ 1 correction applied to 2 files");
    }

    #[test]
    fn test_fix_change_lines() {
        let placed = FixChange {
            original: "teh".to_string(),
            fixed: "the".to_string(),
            kind: "spelling".to_string(),
            position: 4,
        };
        assert_eq!(fix_change_line(&placed), "at 4: teh → the (spelling)");

        let unplaced = FixChange {
            position: -1,
            ..placed
        };
        assert_eq!(fix_change_line(&unplaced), "teh → the (spelling)");
    }
}
