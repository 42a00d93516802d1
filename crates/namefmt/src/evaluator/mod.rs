//! Template evaluation: variable resolution, filter application, caching.
//!
//! This module walks parsed tokens, resolves each variable against the
//! caller's context, and applies filter chains. Strict functions raise;
//! [`safe_evaluate_template`] and [`TemplateEngine::filename`] never do.

mod cache;
mod engine;
mod error;
mod evaluate;

pub use cache::{DEFAULT_CACHE_CAPACITY, TemplateCache, TemplateId};
pub use engine::TemplateEngine;
pub use error::{EvalError, compute_suggestions};
pub use evaluate::{MISSING_VALUE, evaluate_template, safe_evaluate_template};
