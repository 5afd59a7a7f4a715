//! Mock advisor replies
//!
//! When the Maestra backend is not configured, chat turns are answered
//! locally with deterministic canned replies. With a text selection in
//! play, two rewrite drafts are synthesized from the selection itself.

use crate::session::Suggestion;

/// Reply used when the user sent a selection along with their message
const REPLY_WITH_SELECTION: &str =
    "I've analyzed your selection and prepared rewrite suggestions. Choose one that fits your needs.";

/// Reply used for a plain chat message
const REPLY_PLAIN: &str =
    "I'm here to help edit your PDF. Select text to get rewrite suggestions, or ask me anything.";

/// Produce a mock chat reply, with suggestions when context is present
///
/// The message itself is not inspected; only the presence of selected
/// text changes the outcome.
pub fn mock_reply(_message: &str, context: Option<&str>) -> (String, Option<Vec<Suggestion>>) {
    match context {
        Some(context) => {
            let words: Vec<&str> = context.split(' ').collect();

            // First ~70% of the selection, closed with a period
            let take = (words.len() as f64 * 0.7).ceil() as usize;
            let condensed = format!("{}.", words[..take.min(words.len())].join(" "));

            let lead_in = format!(
                "Regarding: {}...",
                words.iter().take(8).copied().collect::<Vec<_>>().join(" ")
            );

            let suggestions = vec![Suggestion::new(condensed), Suggestion::new(lead_in)];
            (REPLY_WITH_SELECTION.to_string(), Some(suggestions))
        }
        None => (REPLY_PLAIN.to_string(), None),
    }
}
