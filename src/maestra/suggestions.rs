//! Suggestion extraction from advisor answers
//!
//! The advisor returns free text; rewrite candidates are recovered from it
//! by line-prefix matching. The rules are deliberately frozen here because
//! existing transcripts depend on them:
//!
//! - only non-blank lines are considered;
//! - a line is a suggestion when its trimmed form starts with an ASCII
//!   digit, `-`, or `*`, or when the line contains the word `Option`;
//! - at most [`MAX_SUGGESTIONS`] lines are taken, in order;
//! - exactly one leading marker character (digit, `-`, `*`, `.`, `)`) and
//!   the whitespace after it are stripped, then the line is trimmed.

/// Maximum number of suggestions recovered from one answer
pub const MAX_SUGGESTIONS: usize = 3;

/// Extract rewrite suggestion texts from an advisor answer
pub fn extract_suggestions(answer: &str) -> Vec<String> {
    answer
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter(|line| is_suggestion_line(line))
        .take(MAX_SUGGESTIONS)
        .map(strip_marker)
        .collect()
}

fn is_suggestion_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '-' || c == '*')
        || line.contains("Option")
}

/// Strip one leading marker character and the whitespace following it
///
/// Operates on the raw line: an indented marker is left alone, matching
/// the historical behavior.
fn strip_marker(line: &str) -> String {
    let rest = match line.chars().next() {
        Some(c) if c.is_ascii_digit() || matches!(c, '-' | '*' | '.' | ')') => {
            line[c.len_utf8()..].trim_start()
        }
        _ => line,
    };
    rest.trim().to_string()
}
