//! Error types and typo suggestions for template evaluation.

use strsim::levenshtein;
use thiserror::Error;

use crate::parser::ParseError;

/// An error that occurred during template evaluation.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The pattern itself failed to parse.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A filter name with no catalog entry.
    #[error("unknown filter '{name}'{}", render_suggestions(suggestions))]
    UnknownFilter {
        name: String,
        /// Close catalog names, best match first.
        suggestions: Vec<String>,
    },

    /// Wrong number of arguments passed to a filter.
    #[error("filter '{filter}' expects {expected} argument(s), got {got}")]
    ArgumentCount {
        filter: String,
        expected: String,
        got: usize,
    },

    /// An argument of the wrong type passed to a filter.
    #[error("filter '{filter}' expects {expected} for argument {index}, got '{got}'")]
    ArgumentType {
        filter: String,
        index: usize,
        expected: &'static str,
        got: String,
    },
}

/// Render a "did you mean" suffix for an error message.
fn render_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean {}?)", suggestions.join(" or "))
    }
}

/// Compute typo suggestions for an unknown filter name:
/// - distance <= 1 for names <= 3 chars
/// - distance <= 2 for longer names
/// - limited to 3 suggestions, sorted by distance
pub fn compute_suggestions<'a>(
    name: &str,
    available: impl IntoIterator<Item = &'a str>,
) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .into_iter()
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            if dist > 0 && dist <= max_distance {
                Some((dist, candidate.to_string()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}
