//! Property analysis for submitted strings
//!
//! Every function here is pure. [`analyze`] additionally stamps the record
//! with the current time.

use crate::strings::types::{StringProperties, StringRecord};
use chrono::Utc;
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, HashSet};

/// Lowercase hex SHA-256 of the string's UTF-8 bytes.
///
/// Used both as the storage key and as the public record id.
pub fn content_hash(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Case- and punctuation-insensitive palindrome test.
///
/// Only ASCII letters and digits survive the projection, so a string with
/// none of them is trivially a palindrome.
pub fn is_palindrome(value: &str) -> bool {
    let cleaned: Vec<char> = value
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    cleaned.iter().eq(cleaned.iter().rev())
}

/// Distinct characters of the unmodified string
pub fn unique_characters(value: &str) -> usize {
    value.chars().collect::<HashSet<_>>().len()
}

/// Whitespace-delimited, non-empty tokens
pub fn word_count(value: &str) -> usize {
    value.split_whitespace().count()
}

/// Occurrences of every literal character, case-sensitive
pub fn character_frequency_map(value: &str) -> BTreeMap<char, usize> {
    let mut map = BTreeMap::new();
    for c in value.chars() {
        *map.entry(c).or_insert(0) += 1;
    }
    map
}

/// Compute all properties of `value` without stamping a record
pub fn properties(value: &str) -> StringProperties {
    StringProperties {
        length: value.chars().count(),
        is_palindrome: is_palindrome(value),
        unique_characters: unique_characters(value),
        word_count: word_count(value),
        sha256_hash: content_hash(value),
        character_frequency_map: character_frequency_map(value),
    }
}

/// Analyze a string into a new record
pub fn analyze(value: &str) -> StringRecord {
    let properties = properties(value);
    StringRecord {
        id: properties.sha256_hash.clone(),
        value: value.to_string(),
        properties,
        created_at: Utc::now(),
    }
}
