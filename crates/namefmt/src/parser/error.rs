//! Parse error types for filename templates.

use thiserror::Error;

/// An error raised while parsing a pattern.
///
/// Callers branch on the variant, never on message text. Offsets are byte
/// positions of the offending `{...}` group within the pattern.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Pattern exceeds the length ceiling.
    #[error("template is {length} characters long, maximum is {max}")]
    TooLong {
        /// Length of the rejected pattern, in characters.
        length: usize,
        /// The enforced ceiling.
        max: usize,
    },

    /// A `{...}` group names a variable that is not a valid identifier.
    #[error("invalid variable name '{name}' at offset {offset}")]
    InvalidVariableName { name: String, offset: usize },

    /// A filter segment inside a `{...}` group is malformed.
    #[error("invalid filter syntax at offset {offset}: {detail}")]
    InvalidFilterSyntax { detail: String, offset: usize },
}
