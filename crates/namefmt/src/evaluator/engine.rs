//! A caching template engine owning the filter catalog and parse cache.

use bon::Builder;

use crate::filename::sanitize_filename;
use crate::filters::FilterRegistry;
use crate::parser::{TemplateValidation, parse_template, validate_template};
use crate::types::TemplateContext;

use super::cache::TemplateCache;
use super::error::EvalError;
use super::evaluate::eval_tokens;

/// A template engine that reuses parsed patterns across calls.
///
/// The stateless functions re-parse on every call, which is fine for a
/// one-off export. The popup regenerates filenames for every logged
/// request each time the user edits the pattern, so the engine keeps
/// parsed tokens keyed by pattern hash and reuses them.
///
/// All cached values are immutable after creation. The engine itself is a
/// plain owned value with no interior mutability, matching the synchronous
/// single-threaded contract of the library.
///
/// # Example
///
/// ```
/// use namefmt::{TemplateEngine, context};
///
/// let mut engine = TemplateEngine::builder().fallback("capture").build();
/// let name = engine.filename(
///     "{title | slugify}.{ext}",
///     &context! { "title" => "My Awesome Video", "ext" => "mp4" },
/// );
/// assert_eq!(name, "my-awesome-video.mp4");
/// ```
#[derive(Builder, Default)]
pub struct TemplateEngine {
    /// Filter catalog used for lookups.
    #[builder(default)]
    filters: FilterRegistry,

    /// Parse cache; bounded, cleared generationally when full.
    #[builder(default)]
    cache: TemplateCache,

    /// Fallback returned by [`TemplateEngine::evaluate_safe`] when
    /// evaluation fails. Empty string when unset.
    #[builder(into)]
    fallback: Option<String>,
}

impl TemplateEngine {
    /// Create an engine with the built-in catalog and default cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate a pattern, parsing through the cache.
    ///
    /// # Errors
    ///
    /// Same contract as [`crate::evaluate_template`].
    pub fn evaluate(
        &mut self,
        pattern: &str,
        context: &TemplateContext,
    ) -> Result<String, EvalError> {
        if let Some(tokens) = self.cache.get(pattern) {
            return eval_tokens(tokens, context, &self.filters);
        }

        let tokens = parse_template(pattern)?;
        let result = eval_tokens(&tokens, context, &self.filters);
        self.cache.insert(pattern, tokens);
        result
    }

    /// Evaluate a pattern, substituting the engine's fallback on any
    /// failure.
    pub fn evaluate_safe(&mut self, pattern: &str, context: &TemplateContext) -> String {
        match self.evaluate(pattern, context) {
            Ok(result) => result,
            Err(_) => self.fallback.clone().unwrap_or_default(),
        }
    }

    /// Produce a filesystem-safe filename from a pattern.
    ///
    /// Never fails: evaluation falls back, and the result passes through
    /// [`sanitize_filename`], so the output is always a usable name (a
    /// fully-empty result becomes `unnamed`).
    pub fn filename(&mut self, pattern: &str, context: &TemplateContext) -> String {
        sanitize_filename(&self.evaluate_safe(pattern, context))
    }

    /// Non-throwing validity check for a pattern.
    pub fn validate(&self, pattern: &str) -> TemplateValidation {
        validate_template(pattern)
    }

    /// Drop all cached parse results.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Number of patterns currently cached.
    pub fn cached_patterns(&self) -> usize {
        self.cache.len()
    }
}
