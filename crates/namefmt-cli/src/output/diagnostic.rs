//! Miette diagnostic wrapper for pattern parse errors.

use miette::{Diagnostic, NamedSource, SourceSpan};
use namefmt::ParseError;
use thiserror::Error;

/// A miette-compatible diagnostic for pattern parse errors.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid pattern: {message}")]
#[diagnostic(code(namefmt::pattern))]
pub struct PatternDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl PatternDiagnostic {
    /// Create a diagnostic from a ParseError with the pattern as source.
    pub fn from_parse_error(pattern: &str, err: &ParseError) -> Self {
        let (offset, len) = match err {
            ParseError::TooLong { .. } => (0, pattern.len()),
            ParseError::InvalidVariableName { name, offset } => (*offset, name.len().max(1)),
            ParseError::InvalidFilterSyntax { offset, .. } => (*offset, 1),
        };

        let help = match err {
            ParseError::TooLong { max, .. } => {
                Some(format!("keep patterns under {} characters", max))
            }
            ParseError::InvalidVariableName { .. } => Some(
                "variable names start with a letter or '_' and contain only letters, digits, and '_'"
                    .to_string(),
            ),
            ParseError::InvalidFilterSyntax { .. } => {
                Some("filters look like 'name' or 'name(\"arg\", 2)'".to_string())
            }
        };

        Self {
            src: NamedSource::new("pattern", pattern.to_string()),
            span: (offset, len).into(),
            message: err.to_string(),
            help,
        }
    }
}
