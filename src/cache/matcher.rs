//! Key Matcher Module
//!
//! Pattern matching used by bulk invalidation. The regex-backed matcher is
//! the default; the `KeyMatcher` trait keeps the strategy pluggable so a
//! cheap prefix matcher can stand in where full regex is overkill.

use regex::Regex;

use crate::error::{CacheError, Result};

// == Key Matcher Trait ==
/// Decides whether a cache key belongs to the family being invalidated.
pub trait KeyMatcher: Send + Sync {
    /// Returns true if `key` matches.
    fn matches(&self, key: &str) -> bool;
}

// == Regex Matcher ==
/// Regex-backed key matcher.
///
/// Patterns are unanchored: `"user:"` matches every key containing that
/// substring, while `"^tasks:count"` only matches keys starting with it.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
}

impl RegexMatcher {
    // == Constructor ==
    /// Compiles `pattern` into a matcher, failing on invalid regex syntax.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| CacheError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }
}

impl KeyMatcher for RegexMatcher {
    fn matches(&self, key: &str) -> bool {
        self.regex.is_match(key)
    }
}

// == Prefix Matcher ==
/// Plain prefix matcher for callers that don't need regex syntax.
#[derive(Debug, Clone)]
pub struct PrefixMatcher {
    prefix: String,
}

impl PrefixMatcher {
    // == Constructor ==
    /// Creates a matcher accepting every key that starts with `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl KeyMatcher for PrefixMatcher {
    fn matches(&self, key: &str) -> bool {
        key.starts_with(&self.prefix)
    }
}
