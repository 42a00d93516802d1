//! Parse-result cache keyed by pattern hash.

use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use const_fnv1a_hash::fnv1a_hash_str_64;
use serde::{Deserialize, Serialize};

use crate::parser::Token;

/// A compact, serializable identifier for a pattern string.
///
/// `TemplateId` wraps a 64-bit FNV-1a hash of the raw pattern text:
/// - **Stability**: the same pattern always produces the same hash
/// - **Compactness**: 8 bytes, `Copy`, stack-allocated
/// - **Const construction**: `from_pattern()` is a `const fn`
///
/// # Example
///
/// ```
/// use namefmt::TemplateId;
///
/// const DEFAULT_PATTERN: TemplateId = TemplateId::from_pattern("{host}_{date}.{ext}");
///
/// let same = TemplateId::from_pattern("{host}_{date}.{ext}");
/// assert_eq!(DEFAULT_PATTERN, same);
/// ```
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct TemplateId(u64);

impl TemplateId {
    /// Create a `TemplateId` from a pattern at compile time or runtime.
    pub const fn from_pattern(pattern: &str) -> Self {
        Self(fnv1a_hash_str_64(pattern))
    }

    /// Get the raw hash value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Display for TemplateId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "TemplateId({:016x})", self.0)
    }
}

/// Default number of parsed patterns kept by a cache.
pub const DEFAULT_CACHE_CAPACITY: usize = 128;

struct CacheEntry {
    pattern: String,
    tokens: Vec<Token>,
}

/// A size-bounded, read-through cache of parsed patterns.
///
/// Entries are immutable once inserted. A lookup verifies the stored
/// pattern text, so an FNV-1a collision degrades to a miss instead of
/// returning another pattern's tokens. When full, the cache clears before
/// the next insert; parsed patterns are cheap to rebuild.
pub struct TemplateCache {
    entries: HashMap<u64, CacheEntry>,
    capacity: usize,
}

impl TemplateCache {
    /// Create a cache with [`DEFAULT_CACHE_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Create a cache bounded to `capacity` patterns. A capacity of zero
    /// disables caching entirely.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity,
        }
    }

    /// Look up the parsed tokens for a pattern.
    pub fn get(&self, pattern: &str) -> Option<&[Token]> {
        let id = TemplateId::from_pattern(pattern);
        self.entries
            .get(&id.as_u64())
            .filter(|entry| entry.pattern == pattern)
            .map(|entry| entry.tokens.as_slice())
    }

    /// Store the parsed tokens for a pattern.
    pub fn insert(&mut self, pattern: &str, tokens: Vec<Token>) {
        if self.capacity == 0 {
            return;
        }
        let id = TemplateId::from_pattern(pattern);
        if !self.entries.contains_key(&id.as_u64()) && self.entries.len() >= self.capacity {
            self.entries.clear();
        }
        self.entries.insert(
            id.as_u64(),
            CacheEntry {
                pattern: pattern.to_string(),
                tokens,
            },
        );
    }

    /// Drop all cached entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of patterns currently cached.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TemplateCache {
    fn default() -> Self {
        Self::new()
    }
}
