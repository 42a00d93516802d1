//! Pattern parser using winnow.
//!
//! Scans `{variable | filter | filter(args)}` groups out of a pattern
//! string. Handles:
//! - Literal text outside groups (preserved byte-for-byte)
//! - Pipe-chained filter invocations with quoted-string and integer args
//! - Graceful degradation: an opening `{` with no matching `}` is literal
//!   text, never an error
//!
//! Everything inside a matched group is held to the grammar and fails loud:
//! a bad variable name or filter segment is a parse error, because letting
//! it through could produce an unsafe filename downstream.

use serde::Serialize;
use winnow::combinator::{alt, delimited, opt, preceded, repeat, separated};
use winnow::prelude::*;
use winnow::token::{any, none_of, one_of, take_while};

use super::ast::{FilterArg, FilterInvocation, Token};
use super::error::ParseError;

/// Maximum accepted pattern length, in characters.
///
/// Bounds worst-case parse cost and rejects pathological input before any
/// scanning work happens.
pub const MAX_TEMPLATE_LEN: usize = 1000;

/// Parse a pattern string into tokens.
///
/// # Errors
///
/// Returns an error if the pattern exceeds [`MAX_TEMPLATE_LEN`], if a
/// variable name is not a valid identifier, or if a filter segment is
/// malformed. An unmatched `{` is not an error: it and everything after it
/// are kept as literal text.
pub fn parse_template(pattern: &str) -> Result<Vec<Token>, ParseError> {
    let length = pattern.chars().count();
    if length > MAX_TEMPLATE_LEN {
        return Err(ParseError::TooLong {
            length,
            max: MAX_TEMPLATE_LEN,
        });
    }

    let mut tokens = Vec::new();
    let mut rest = pattern;
    let mut consumed = 0;

    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}').map(|i| open + i) else {
            // No closing brace ahead: the rest is literal text.
            break;
        };
        if open > 0 {
            tokens.push(Token::Literal(rest[..open].to_string()));
        }
        tokens.push(parse_group(&rest[open + 1..close], consumed + open)?);
        rest = &rest[close + 1..];
        consumed += close + 1;
    }

    if !rest.is_empty() {
        tokens.push(Token::Literal(rest.to_string()));
    }

    Ok(tokens)
}

/// Result of a non-throwing validity check, for UI-adjacent callers that
/// want to preview a pattern without handling errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateValidation {
    /// Whether the pattern parses.
    pub valid: bool,
    /// Human-readable description of the first problem found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Check a pattern for validity without raising.
pub fn validate_template(pattern: &str) -> TemplateValidation {
    match parse_template(pattern) {
        Ok(_) => TemplateValidation {
            valid: true,
            error: None,
        },
        Err(e) => TemplateValidation {
            valid: false,
            error: Some(e.to_string()),
        },
    }
}

/// Parse the interior of a `{...}` group into a Variable token.
///
/// `offset` is the byte position of the group's `{` in the pattern, carried
/// into errors for diagnostics.
fn parse_group(interior: &str, offset: usize) -> Result<Token, ParseError> {
    let segments = split_pipes(interior);

    let name = segments[0].trim();
    if !is_identifier(name) {
        return Err(ParseError::InvalidVariableName {
            name: name.to_string(),
            offset,
        });
    }

    let mut filters = Vec::with_capacity(segments.len() - 1);
    for segment in &segments[1..] {
        filters.push(parse_filter(segment.trim(), offset)?);
    }

    Ok(Token::Variable {
        name: name.to_string(),
        filters,
    })
}

/// Split a group interior on `|`, ignoring pipes inside quoted arguments.
fn split_pipes(interior: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (i, c) in interior.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, c) {
            (Some(_), '\\') => escaped = true,
            (Some(q), _) if c == q => quote = None,
            (None, '"' | '\'') => quote = Some(c),
            (None, '|') => {
                segments.push(&interior[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    segments.push(&interior[start..]);
    segments
}

/// Parse one filter segment: `name` or `name(arg, ...)`.
fn parse_filter(segment: &str, offset: usize) -> Result<FilterInvocation, ParseError> {
    if segment.is_empty() {
        return Err(ParseError::InvalidFilterSyntax {
            detail: "empty filter segment".to_string(),
            offset,
        });
    }

    let mut remaining = segment;
    match filter_invocation(&mut remaining) {
        Ok(filter) if remaining.is_empty() => Ok(filter),
        Ok(_) => Err(ParseError::InvalidFilterSyntax {
            detail: format!("unexpected trailing input in '{segment}'"),
            offset,
        }),
        Err(_) => Err(ParseError::InvalidFilterSyntax {
            detail: format!("cannot parse filter '{segment}'"),
            offset,
        }),
    }
}

/// Parse a complete filter invocation: identifier plus optional argument list.
fn filter_invocation(input: &mut &str) -> ModalResult<FilterInvocation> {
    let name = identifier.parse_next(input)?;
    let _ = ws(input)?;
    let args: Option<Vec<FilterArg>> = opt(delimited(
        ('(', ws),
        separated(0.., filter_arg, (ws, ',', ws)),
        (ws, ')'),
    ))
    .parse_next(input)?;

    Ok(FilterInvocation {
        name,
        args: args.unwrap_or_default(),
    })
}

/// Parse optional whitespace.
fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_ascii_whitespace())
        .void()
        .parse_next(input)
}

/// Parse an identifier: `[a-zA-Z_][a-zA-Z0-9_]*`.
fn identifier(input: &mut &str) -> ModalResult<String> {
    let first = any.parse_next(input)?;
    if !is_ident_start(first) {
        return Err(winnow::error::ErrMode::Backtrack(
            winnow::error::ContextError::new(),
        ));
    }

    let rest: &str = take_while(0.., is_ident_cont).parse_next(input)?;
    let mut name = String::with_capacity(1 + rest.len());
    name.push(first);
    name.push_str(rest);
    Ok(name)
}

/// Parse one literal argument: quoted string or bare integer.
fn filter_arg(input: &mut &str) -> ModalResult<FilterArg> {
    alt((
        quoted_string.map(FilterArg::Str),
        integer.map(FilterArg::Int),
    ))
    .parse_next(input)
}

/// Parse a quoted string with backslash escapes: `"a \" b"` or `'it'`.
///
/// A backslash escapes the character after it, so `\"`, `\'`, and `\\` all
/// round-trip into the literal character.
fn quoted_string(input: &mut &str) -> ModalResult<String> {
    let quote = one_of(['"', '\'']).parse_next(input)?;
    let content: String = repeat(
        0..,
        alt((
            preceded('\\', any),
            none_of(move |c: char| c == quote || c == '\\'),
        )),
    )
    .parse_next(input)?;
    let _ = one_of(move |c: char| c == quote).parse_next(input)?;
    Ok(content)
}

/// Parse a bare integer: digits with optional leading `-`.
fn integer(input: &mut &str) -> ModalResult<i64> {
    let sign: Option<char> = opt('-').parse_next(input)?;
    let digits: &str = take_while(1.., |c: char| c.is_ascii_digit()).parse_next(input)?;

    let mut text = String::with_capacity(1 + digits.len());
    if sign.is_some() {
        text.push('-');
    }
    text.push_str(digits);
    text.parse::<i64>().map_err(|_| {
        winnow::error::ErrMode::Backtrack(winnow::error::ContextError::new())
    })
}

/// Identifier rules shared by variable and filter names.
///
/// Rejects dotted, bracketed, and hyphenated names outright, which keeps
/// known code-injection tokens out of a CSP-restricted host.
fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if is_ident_start(c) => chars.all(is_ident_cont),
        _ => false,
    }
}

/// Check if a character can start an identifier.
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier.
fn is_ident_cont(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
