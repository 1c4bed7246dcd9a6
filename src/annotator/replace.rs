use crate::ErrorSpan;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub text: String,
    pub spans: Vec<ErrorSpan>,
    pub occurrences: usize,
}

/// Replace every whole-word occurrence of `word` and drop every span
/// flagging that word.
///
/// Offsets of the remaining spans are left as they were. When the
/// replacement changes the text length, spans to its right go stale until
/// the next analysis; `annotate` drops them rather than misplacing them.
pub fn apply_replacement(
    text: &str,
    spans: &[ErrorSpan],
    word: &str,
    replacement: &str,
) -> Replacement {
    let (text, occurrences) = replace_whole_word(text, word, replacement);
    let spans = spans.iter().filter(|s| s.word != word).cloned().collect();

    Replacement {
        text,
        spans,
        occurrences,
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Literal replace of `word` wherever it is not glued to another word
/// character on either side.
pub fn replace_whole_word(text: &str, word: &str, replacement: &str) -> (String, usize) {
    if word.is_empty() {
        return (text.to_string(), 0);
    }

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut pos = 0;
    let mut count = 0;

    while let Some(rel) = text[pos..].find(word) {
        let idx = pos + rel;
        let end = idx + word.len();
        let before = text[..idx].chars().next_back();
        let after = text[end..].chars().next();

        if before.is_some_and(is_word_char) || after.is_some_and(is_word_char) {
            // A whole-word match may still start inside this candidate.
            pos = idx + text[idx..].chars().next().map_or(1, char::len_utf8);
            continue;
        }

        out.push_str(&text[last..idx]);
        out.push_str(replacement);
        last = end;
        pos = end;
        count += 1;
    }

    out.push_str(&text[last..]);
    (out, count)
}
