use std::collections::HashSet;

use crate::types::{Dataset, SearchResult};

/// Match dataset rows against a query, one code point at a time.
///
/// Each code point contributes its exact headword first, then every
/// headword containing it, walking rows in dataset order. A headword is
/// inserted the first time it matches and never again, so the result is
/// duplicate-free and its order is stable across repeated code points.
pub fn search(dataset: &Dataset, query: &str) -> SearchResult {
    let mut result = SearchResult::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for ch in query.chars() {
        let mut buf = [0u8; 4];
        let needle: &str = ch.encode_utf8(&mut buf);

        if let Some(entry) = dataset.get(needle) {
            if seen.insert(entry.headword.as_str()) {
                result.push(entry.clone());
            }
        }

        for entry in dataset.entries() {
            if entry.headword != needle
                && entry.headword.contains(ch)
                && seen.insert(entry.headword.as_str())
            {
                result.push(entry.clone());
            }
        }
    }

    result
}
