//! Public AST types for filename-template patterns.

use serde::Serialize;

/// A parsed unit of a pattern.
///
/// A parsed pattern is an ordered token sequence; concatenating the literal
/// text and the rendered variables reproduces the document order of the
/// source pattern exactly, including whitespace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Token {
    /// Literal text emitted verbatim.
    Literal(String),
    /// A `{name | filter | filter(args)}` placeholder.
    Variable {
        /// Variable name looked up in the context at evaluation time.
        name: String,
        /// Filter chain applied left to right to the resolved value.
        filters: Vec<FilterInvocation>,
    },
}

/// A single filter application within a variable's pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterInvocation {
    /// Filter name (e.g., "truncate").
    pub name: String,
    /// Positional literal arguments.
    pub args: Vec<FilterArg>,
}

/// A literal filter argument: a quoted string or a bare integer.
///
/// Arguments are literals only. There are no nested expressions and no
/// variable references in argument position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FilterArg {
    /// A quoted string argument, unescaped.
    Str(String),
    /// A bare integer argument.
    Int(i64),
}

impl FilterArg {
    /// The argument as text. Integers stringify; text is valid anywhere.
    pub fn to_text(&self) -> String {
        match self {
            FilterArg::Str(s) => s.clone(),
            FilterArg::Int(n) => n.to_string(),
        }
    }

    /// The argument as an integer, if it is one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FilterArg::Int(n) => Some(*n),
            FilterArg::Str(_) => None,
        }
    }
}
