//! Directive caching.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Mutex, PoisonError};

use crate::directive::FormatDirective;

/// Global cache for parsed directive strings.
static CACHE: Mutex<Option<LruCache<String, FormatDirective>>> = Mutex::new(None);

const CACHE_SIZE: NonZeroUsize = match NonZeroUsize::new(128) {
    Some(n) => n,
    None => NonZeroUsize::MIN,
};

/// Get or parse a directive string, using the cache.
pub fn get_or_parse(format_string: &str) -> FormatDirective {
    // Entries are only ever inserted whole, so a poisoned lock is still consistent.
    let mut cache_guard = CACHE.lock().unwrap_or_else(PoisonError::into_inner);

    let cache = cache_guard.get_or_insert_with(|| LruCache::new(CACHE_SIZE));

    if let Some(directive) = cache.get(format_string) {
        return directive.clone();
    }

    let directive = crate::parser::parse(format_string);
    cache.put(format_string.to_string(), directive.clone());
    directive
}
