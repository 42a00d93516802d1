//! The filter catalog: named, pure string transformations.
//!
//! Filters run on the stringified value of a resolved variable, threaded
//! left to right through the pipeline. The catalog is closed: an unknown
//! name is a hard error at evaluation time, never skipped, since a silently
//! dropped filter could produce an unsafe filename.

use std::collections::HashMap;

use unicode_segmentation::UnicodeSegmentation;

use crate::evaluator::EvalError;
use crate::filename::is_illegal_char;
use crate::parser::FilterArg;

/// A built-in filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Unicode lowercase folding.
    Lowercase,
    /// Unicode uppercase folding.
    Uppercase,
    /// Uppercase the first grapheme only, rest unchanged.
    Capitalize,
    /// Strip leading and trailing whitespace.
    Trim,
    /// `truncate(maxLength, suffix?)`: cut to `maxLength` characters,
    /// appending `suffix` only when a cut actually happened.
    Truncate,
    /// `substring(start, end)`: character range with clamp-and-swap bounds.
    Substring,
    /// `replace(from, to)`: replace all occurrences of a literal substring.
    Replace,
    /// `remove(substring)`: delete all occurrences of a literal substring.
    Remove,
    /// Lowercase and join alphanumeric runs with single dashes.
    Slugify,
    /// Strip filesystem-illegal characters.
    Sanitize,
    /// Strip `(...)`, `[...]`, and `【...】` groups.
    RemoveParens,
    /// `default(fallback)`: substitute when the value is empty or missing.
    Default,
    /// `ifEquals(compare, then, else?)`: string-equality branch.
    IfEquals,
    /// `ifContains(substring, then, else?)`: substring-test branch.
    IfContains,
    /// `ifEmpty(fallback)`: same emptiness test as `default`.
    IfEmpty,
}

/// A catalog row: surface name, kind, human-readable signature, summary.
pub struct CatalogEntry {
    pub name: &'static str,
    pub kind: FilterKind,
    pub signature: &'static str,
    pub summary: &'static str,
}

/// The built-in filter catalog, in display order.
pub const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "lowercase",
        kind: FilterKind::Lowercase,
        signature: "lowercase",
        summary: "Convert to lowercase",
    },
    CatalogEntry {
        name: "uppercase",
        kind: FilterKind::Uppercase,
        signature: "uppercase",
        summary: "Convert to uppercase",
    },
    CatalogEntry {
        name: "capitalize",
        kind: FilterKind::Capitalize,
        signature: "capitalize",
        summary: "Uppercase the first character only",
    },
    CatalogEntry {
        name: "trim",
        kind: FilterKind::Trim,
        signature: "trim",
        summary: "Strip surrounding whitespace",
    },
    CatalogEntry {
        name: "truncate",
        kind: FilterKind::Truncate,
        signature: "truncate(maxLength, suffix?)",
        summary: "Cut to maxLength characters, appending suffix if cut",
    },
    CatalogEntry {
        name: "substring",
        kind: FilterKind::Substring,
        signature: "substring(start, end)",
        summary: "Take a character range",
    },
    CatalogEntry {
        name: "replace",
        kind: FilterKind::Replace,
        signature: "replace(from, to)",
        summary: "Replace all occurrences of a substring",
    },
    CatalogEntry {
        name: "remove",
        kind: FilterKind::Remove,
        signature: "remove(substring)",
        summary: "Delete all occurrences of a substring",
    },
    CatalogEntry {
        name: "slugify",
        kind: FilterKind::Slugify,
        signature: "slugify",
        summary: "Lowercase and dash-join alphanumeric runs",
    },
    CatalogEntry {
        name: "sanitize",
        kind: FilterKind::Sanitize,
        signature: "sanitize",
        summary: "Strip filesystem-illegal characters",
    },
    CatalogEntry {
        name: "removeParens",
        kind: FilterKind::RemoveParens,
        signature: "removeParens",
        summary: "Strip (...), [...], and 【...】 groups",
    },
    CatalogEntry {
        name: "default",
        kind: FilterKind::Default,
        signature: "default(fallback)",
        summary: "Substitute fallback when the value is empty or missing",
    },
    CatalogEntry {
        name: "ifEquals",
        kind: FilterKind::IfEquals,
        signature: "ifEquals(compare, then, else?)",
        summary: "Pick a branch by string equality",
    },
    CatalogEntry {
        name: "ifContains",
        kind: FilterKind::IfContains,
        signature: "ifContains(substring, then, else?)",
        summary: "Pick a branch by substring test",
    },
    CatalogEntry {
        name: "ifEmpty",
        kind: FilterKind::IfEmpty,
        signature: "ifEmpty(fallback)",
        summary: "Substitute fallback when the value is empty or missing",
    },
];

/// Registry for filter lookup by surface name.
///
/// The mapping is built once and never mutated; lookups are the only
/// operation the evaluator performs per filter invocation.
pub struct FilterRegistry {
    by_name: HashMap<&'static str, FilterKind>,
}

impl FilterRegistry {
    /// Create a registry holding the built-in catalog.
    pub fn new() -> Self {
        let mut by_name = HashMap::with_capacity(CATALOG.len());
        for entry in CATALOG {
            by_name.insert(entry.name, entry.kind);
        }
        Self { by_name }
    }

    /// Get a filter by name.
    pub fn get(&self, name: &str) -> Option<FilterKind> {
        self.by_name.get(name).copied()
    }

    /// Check if a filter exists.
    pub fn has_filter(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// All filter names in catalog order (for suggestions and listings).
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        CATALOG.iter().map(|entry| entry.name)
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterKind {
    /// The surface name of this filter, as written in patterns.
    pub fn name(self) -> &'static str {
        match self {
            FilterKind::Lowercase => "lowercase",
            FilterKind::Uppercase => "uppercase",
            FilterKind::Capitalize => "capitalize",
            FilterKind::Trim => "trim",
            FilterKind::Truncate => "truncate",
            FilterKind::Substring => "substring",
            FilterKind::Replace => "replace",
            FilterKind::Remove => "remove",
            FilterKind::Slugify => "slugify",
            FilterKind::Sanitize => "sanitize",
            FilterKind::RemoveParens => "removeParens",
            FilterKind::Default => "default",
            FilterKind::IfEquals => "ifEquals",
            FilterKind::IfContains => "ifContains",
            FilterKind::IfEmpty => "ifEmpty",
        }
    }

    /// Apply this filter to `value` with the parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns an error when the argument count or an argument type does
    /// not match the filter's contract. Types are never coerced silently:
    /// a string where an integer is required fails.
    pub fn apply(self, value: &str, args: &[FilterArg]) -> Result<String, EvalError> {
        match self {
            FilterKind::Lowercase => {
                check_arity(self, args, 0, 0)?;
                Ok(value.to_lowercase())
            }
            FilterKind::Uppercase => {
                check_arity(self, args, 0, 0)?;
                Ok(value.to_uppercase())
            }
            FilterKind::Capitalize => {
                check_arity(self, args, 0, 0)?;
                Ok(capitalize(value))
            }
            FilterKind::Trim => {
                check_arity(self, args, 0, 0)?;
                Ok(value.trim().to_string())
            }
            FilterKind::Truncate => {
                check_arity(self, args, 1, 2)?;
                let max = length_arg(self, args, 0)?;
                let suffix = args.get(1).map(FilterArg::to_text);
                Ok(truncate(value, max, suffix.as_deref()))
            }
            FilterKind::Substring => {
                check_arity(self, args, 2, 2)?;
                let start = int_arg(self, args, 0)?;
                let end = int_arg(self, args, 1)?;
                Ok(substring(value, start, end))
            }
            FilterKind::Replace => {
                check_arity(self, args, 2, 2)?;
                Ok(value.replace(&args[0].to_text(), &args[1].to_text()))
            }
            FilterKind::Remove => {
                check_arity(self, args, 1, 1)?;
                Ok(value.replace(&args[0].to_text(), ""))
            }
            FilterKind::Slugify => {
                check_arity(self, args, 0, 0)?;
                Ok(slugify(value))
            }
            FilterKind::Sanitize => {
                check_arity(self, args, 0, 0)?;
                Ok(value.chars().filter(|c| !is_illegal_char(*c)).collect())
            }
            FilterKind::RemoveParens => {
                check_arity(self, args, 0, 0)?;
                Ok(remove_parens(value))
            }
            FilterKind::Default | FilterKind::IfEmpty => {
                check_arity(self, args, 1, 1)?;
                if is_missing(value) {
                    Ok(args[0].to_text())
                } else {
                    Ok(value.to_string())
                }
            }
            FilterKind::IfEquals => {
                check_arity(self, args, 2, 3)?;
                if value == args[0].to_text() {
                    Ok(args[1].to_text())
                } else {
                    Ok(args.get(2).map(FilterArg::to_text).unwrap_or_default())
                }
            }
            FilterKind::IfContains => {
                check_arity(self, args, 2, 3)?;
                if value.contains(&args[0].to_text()) {
                    Ok(args[1].to_text())
                } else {
                    Ok(args.get(2).map(FilterArg::to_text).unwrap_or_default())
                }
            }
        }
    }
}

/// The emptiness test shared by `default` and `ifEmpty`.
///
/// `"undefined"` is the evaluator's stringification of a missing variable;
/// matching it here is what lets these filters intercept a missing value.
fn is_missing(value: &str) -> bool {
    value.is_empty() || value == "undefined"
}

/// Uppercase the first grapheme, leaving the rest unchanged.
fn capitalize(value: &str) -> String {
    let mut graphemes = value.graphemes(true);
    match graphemes.next() {
        None => String::new(),
        Some(first) => {
            let mut out = first.to_uppercase();
            out.push_str(graphemes.as_str());
            out
        }
    }
}

/// Cut to `max` characters; append `suffix` only when a cut happened.
fn truncate(value: &str, max: usize, suffix: Option<&str>) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    let mut out: String = value.chars().take(max).collect();
    if let Some(suffix) = suffix {
        out.push_str(suffix);
    }
    out
}

/// Character-range extraction with clamp-and-swap bounds.
///
/// Negative indices clamp to zero, overlong indices clamp to the length,
/// and a start past the end swaps with it.
fn substring(value: &str, start: i64, end: i64) -> String {
    let total = value.chars().count();
    let clamp = |n: i64| -> usize {
        if n < 0 {
            0
        } else {
            usize::try_from(n).map_or(total, |n| n.min(total))
        }
    };
    let mut start = clamp(start);
    let mut end = clamp(end);
    if start > end {
        std::mem::swap(&mut start, &mut end);
    }
    value.chars().skip(start).take(end - start).collect()
}

/// Lowercase, join alphanumeric runs with single dashes, trim dashes.
fn slugify(value: &str) -> String {
    let lowered = value.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut pending_dash = false;
    for c in lowered.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c);
        } else {
            pending_dash = true;
        }
    }
    out
}

/// Strip bracketed groups, collapse leftover double spaces, trim.
fn remove_parens(value: &str) -> String {
    let mut out = value.to_string();
    for (open, close) in [('(', ')'), ('[', ']'), ('【', '】')] {
        out = strip_delimited(&out, open, close);
    }
    collapse_spaces(&out).trim().to_string()
}

/// Remove every non-nested `open`..`close` span, delimiters included.
/// An unmatched opener is left in place.
fn strip_delimited(text: &str, open: char, close: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    loop {
        let Some(start) = rest.find(open) else { break };
        let Some(end) = rest[start + open.len_utf8()..]
            .find(close)
            .map(|i| start + open.len_utf8() + i)
        else {
            break;
        };
        out.push_str(&rest[..start]);
        rest = &rest[end + close.len_utf8()..];
    }
    out.push_str(rest);
    out
}

/// Collapse runs of spaces into a single space.
fn collapse_spaces(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if c == ' ' {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// Validate the argument count against a filter's arity range.
fn check_arity(
    filter: FilterKind,
    args: &[FilterArg],
    min: usize,
    max: usize,
) -> Result<(), EvalError> {
    if args.len() < min || args.len() > max {
        let expected = if min == max {
            min.to_string()
        } else {
            format!("{min} to {max}")
        };
        return Err(EvalError::ArgumentCount {
            filter: filter.name().to_string(),
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

/// Require an integer argument at `index`.
fn int_arg(filter: FilterKind, args: &[FilterArg], index: usize) -> Result<i64, EvalError> {
    args[index].as_int().ok_or_else(|| EvalError::ArgumentType {
        filter: filter.name().to_string(),
        index,
        expected: "an integer",
        got: args[index].to_text(),
    })
}

/// Require a non-negative integer argument at `index`, as a length.
fn length_arg(filter: FilterKind, args: &[FilterArg], index: usize) -> Result<usize, EvalError> {
    let n = int_arg(filter, args, index)?;
    usize::try_from(n).map_err(|_| EvalError::ArgumentType {
        filter: filter.name().to_string(),
        index,
        expected: "a non-negative integer",
        got: n.to_string(),
    })
}
