use super::{PatternError, PatternResult};
use hashbrown::HashMap as FastHashMap;
use parking_lot::RwLock;
use regex::Regex;
use std::sync::OnceLock;

const DEFAULT_CAPACITY: usize = 1024;

/// Compiled regexes keyed by source text. `Regex` clones share the compiled
/// program, so a hit costs one refcount bump.
///
/// Holds at most `capacity` programs; inserting past that drops every cached
/// entry first.
#[derive(Debug)]
pub struct RegexCache {
    inner: RwLock<FastHashMap<Box<str>, Regex>>,
    capacity: usize,
}

impl Default for RegexCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl RegexCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(FastHashMap::new()),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn global() -> &'static RegexCache {
        static CACHE: OnceLock<RegexCache> = OnceLock::new();
        CACHE.get_or_init(RegexCache::new)
    }

    #[inline]
    pub fn compile(&self, source: &str) -> PatternResult<Regex> {
        if let Some(regex) = self.inner.read().get(source) {
            return Ok(regex.clone());
        }

        let mut inner = self.inner.write();
        if let Some(regex) = inner.get(source) {
            return Ok(regex.clone());
        }

        let regex = Regex::new(source).map_err(|error| PatternError::InvalidRegex {
            pattern: source.to_string(),
            error,
        })?;
        if inner.len() >= self.capacity {
            tracing::trace!(entries = inner.len(), "regex cache full; evicting all entries");
            inner.clear();
        }
        inner.insert(source.into(), regex.clone());
        Ok(regex)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn clear(&self) {
        let mut inner = self.inner.write();
        inner.clear();
        inner.shrink_to_fit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_reuses_cached_program() {
        let cache = RegexCache::new();
        let first = cache.compile(r"\d+").expect("valid regex");
        let second = cache.compile(r"\d+").expect("valid regex");

        assert_eq!(cache.len(), 1);
        assert_eq!(first.as_str(), second.as_str());
    }

    #[test]
    fn compile_past_capacity_evicts_old_entries() {
        let cache = RegexCache::with_capacity(2);
        cache.compile("a").expect("valid regex");
        cache.compile("b").expect("valid regex");
        assert_eq!(cache.len(), 2);

        cache.compile("c").expect("valid regex");
        assert_eq!(cache.len(), 1);

        for source in ["d", "e", "f", "g"] {
            cache.compile(source).expect("valid regex");
            assert!(cache.len() <= cache.capacity());
        }
    }

    #[test]
    fn compile_reports_invalid_syntax() {
        let cache = RegexCache::new();
        match cache.compile("([") {
            Err(PatternError::InvalidRegex { pattern, .. }) => assert_eq!(pattern, "(["),
            other => panic!("expected invalid regex error, got {other:?}"),
        }
        assert!(cache.is_empty());
    }
}
