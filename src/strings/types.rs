//! Wire types for the Strings API
//!
//! Field names are snake_case on the wire, matching the query parameters
//! accepted by the filter endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::filter::FilterSet;

/// An analyzed string as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringRecord {
    /// SHA-256 hex digest of `value`
    pub id: String,
    /// Original string, verbatim
    pub value: String,
    pub properties: StringProperties,
    pub created_at: DateTime<Utc>,
}

/// Properties computed once when a string is analyzed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringProperties {
    pub length: usize,
    pub is_palindrome: bool,
    pub unique_characters: usize,
    pub word_count: usize,
    pub sha256_hash: String,
    pub character_frequency_map: BTreeMap<char, usize>,
}

/// Response for `GET /strings`
#[derive(Debug, Serialize)]
pub struct ListStringsResponse {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub filters_applied: FilterSet,
}

/// Response for `GET /strings/filter-by-natural-language`
#[derive(Debug, Serialize)]
pub struct NaturalLanguageResponse {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

/// How a free-text query was understood
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: FilterSet,
}

/// Payload for `GET /`
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub endpoints: Vec<String>,
    pub stored: usize,
}
