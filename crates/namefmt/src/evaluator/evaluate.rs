//! Token-walking evaluation core.

use std::sync::LazyLock;

use crate::filters::FilterRegistry;
use crate::parser::{Token, parse_template};
use crate::types::TemplateContext;

use super::error::{EvalError, compute_suggestions};

/// Text a missing variable stringifies to before filters run.
///
/// A variable absent from the context resolves to this literal text, not
/// an empty string. `default` and `ifEmpty` test for it, so a template can
/// intercept a missing value: `{title | default("capture")}`.
pub const MISSING_VALUE: &str = "undefined";

/// Shared catalog for the stateless entry points.
static FILTERS: LazyLock<FilterRegistry> = LazyLock::new(FilterRegistry::new);

/// Evaluate a pattern against a context, producing the output string.
///
/// Literal text passes through unchanged; each variable resolves to its
/// context value (or [`MISSING_VALUE`]) and is threaded through its filter
/// chain strictly in parse order.
///
/// # Errors
///
/// Returns an error if the pattern fails to parse, names an unknown
/// filter, or passes a filter arguments violating its contract.
pub fn evaluate_template(
    pattern: &str,
    context: &TemplateContext,
) -> Result<String, EvalError> {
    let tokens = parse_template(pattern)?;
    eval_tokens(&tokens, context, &FILTERS)
}

/// Evaluate a pattern, returning `fallback` (or empty string) on any
/// failure.
///
/// This is the path production filename generation always uses: a
/// malformed user template must never block an export.
pub fn safe_evaluate_template(
    pattern: &str,
    context: &TemplateContext,
    fallback: Option<&str>,
) -> String {
    evaluate_template(pattern, context)
        .unwrap_or_else(|_| fallback.unwrap_or_default().to_string())
}

/// Walk parsed tokens, resolving variables and applying filter chains.
pub(crate) fn eval_tokens(
    tokens: &[Token],
    context: &TemplateContext,
    filters: &FilterRegistry,
) -> Result<String, EvalError> {
    let mut output = String::new();
    for token in tokens {
        match token {
            Token::Literal(text) => output.push_str(text),
            Token::Variable { name, filters: chain } => {
                let mut current = match context.get(name) {
                    Some(value) => value.to_string(),
                    None => MISSING_VALUE.to_string(),
                };
                for invocation in chain {
                    let Some(kind) = filters.get(&invocation.name) else {
                        return Err(EvalError::UnknownFilter {
                            name: invocation.name.clone(),
                            suggestions: compute_suggestions(&invocation.name, filters.names()),
                        });
                    };
                    current = kind.apply(&current, &invocation.args)?;
                }
                output.push_str(&current);
            }
        }
    }
    Ok(output)
}
