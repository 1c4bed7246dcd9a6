use crate::annotator::{line_column, MarkerId, Rect, Viewport};
use crate::cli::output::{print_error, print_popup, render_document};
use crate::client::GrammarService;
use crate::session::Session;
use anyhow::Result;
use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Popup width in terminal cells.
pub const TERMINAL_POPUP_WIDTH: f64 = 40.0;

/// Anchor of a marker in terminal cells, from its character offset.
fn marker_anchor(text: &str, start: usize, word: &str) -> Rect {
    let (line, column) = line_column(text, start);
    let width = word.graphemes(true).count() as f64;
    Rect::new((column - 1) as f64, (line - 1) as f64, width, 1.0)
}

fn terminal_viewport() -> Viewport {
    let (rows, cols) = Term::stdout().size();
    Viewport::new(f64::from(cols), f64::from(rows))
}

/// Walk the user through the flagged spans. Each accepted suggestion is
/// applied to every occurrence of the word, and the text is re-analyzed so
/// the remaining markers line up with the edited text.
///
/// Returns the number of replaced occurrences.
pub fn run(session: &mut Session, service: &dyn GrammarService, colored: bool) -> Result<usize> {
    let theme = ColorfulTheme::default();
    let mut skipped: HashSet<String> = HashSet::new();
    let mut fixed = 0;

    loop {
        let markers: Vec<(MarkerId, String)> = session
            .document()
            .markers()
            .filter(|(_, span)| !skipped.contains(&span.word))
            .map(|(id, span)| {
                let (line, column) = line_column(session.text(), span.start);
                (id, format!("{}:{} {} ({})", line, column, span.word, span.kind))
            })
            .collect();

        if markers.is_empty() {
            break;
        }

        println!();
        println!("{}", render_document(session.document(), colored));
        println!();

        let mut labels: Vec<&str> = markers.iter().map(|(_, label)| label.as_str()).collect();
        labels.push("Done");

        let Some(choice) = Select::with_theme(&theme)
            .with_prompt("Select an issue")
            .items(&labels)
            .default(0)
            .interact_opt()?
        else {
            break;
        };
        let Some((marker, _)) = markers.get(choice) else {
            break;
        };

        let anchor = match session.document().marker(*marker) {
            Some(span) => marker_anchor(session.text(), span.start, &span.word),
            None => continue,
        };
        if !session.activate_marker(*marker, anchor, terminal_viewport()) {
            continue;
        }
        let Some(popup) = session.popup().cloned() else {
            continue;
        };

        print_popup(&popup, colored);
        let mut options: Vec<&str> = popup.suggestions.iter().map(String::as_str).collect();
        options.push("Skip this word");
        options.push("Close");

        let picked = Select::with_theme(&theme)
            .items(&options)
            .default(0)
            .interact_opt()?;

        match picked {
            Some(i) if i < popup.suggestions.len() => {
                fixed += session.apply_popup_suggestion(i).unwrap_or(0);
                if let Err(e) = session.check(service) {
                    print_error(&format!("Re-check failed, markers may be stale: {}", e), colored);
                }
            }
            Some(i) if i == popup.suggestions.len() => {
                skipped.insert(popup.word.clone());
                session.close_popup();
            }
            _ => session.close_popup(),
        }
    }

    Ok(fixed)
}
