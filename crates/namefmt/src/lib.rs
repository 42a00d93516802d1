//! Filename template engine for captured-request exports.
//!
//! Turns a pattern string like `{videoTitle | slugify | truncate(20)}_{date}.{ext}`
//! plus per-request metadata into a sanitized, filesystem-safe filename.
//!
//! The engine has three parts:
//! - [`parser`] tokenizes a pattern into literal text and
//!   `{variable | filter(args)}` placeholders.
//! - [`filters`] is the closed catalog of string transformations a
//!   placeholder can pipe its value through.
//! - [`evaluator`] resolves placeholders against a [`TemplateContext`] and
//!   applies each filter chain left to right.
//!
//! Strict entry points ([`evaluate_template`]) raise on malformed patterns so
//! a settings UI can surface the problem; the safe entry points
//! ([`safe_evaluate_template`], [`TemplateEngine::filename`]) convert every
//! failure into a fallback so an export is never blocked by a bad template.

pub mod evaluator;
pub mod filename;
pub mod filters;
pub mod parser;
pub mod types;

pub use evaluator::{
    EvalError, TemplateCache, TemplateEngine, TemplateId, compute_suggestions, evaluate_template,
    safe_evaluate_template,
};
pub use filename::sanitize_filename;
pub use filters::{FilterKind, FilterRegistry};
pub use parser::{
    FilterArg, FilterInvocation, ParseError, TemplateValidation, Token, parse_template,
    validate_template,
};
pub use types::{TemplateContext, Value};

/// Creates a [`TemplateContext`] from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, or strings directly.
///
/// # Example
///
/// ```
/// use namefmt::context;
///
/// let ctx = context! { "videoTitle" => "My Video", "size" => 1024 };
/// assert_eq!(ctx.len(), 2);
/// assert_eq!(ctx["size"].as_number(), Some(1024));
/// assert_eq!(ctx["videoTitle"].as_string(), Some("My Video"));
/// ```
#[macro_export]
macro_rules! context {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
