//! Filter set and predicate model

use crate::strings::types::StringRecord;
use serde::{Deserialize, Serialize};

/// Typed filters over stored records.
///
/// Every key is optional; present keys are ANDed. Serializes with absent
/// keys omitted, which is the form echoed back to clients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

/// A single constraint on a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    IsPalindrome(bool),
    /// Inclusive lower bound on length
    MinLength(i64),
    /// Inclusive upper bound on length
    MaxLength(i64),
    WordCount(i64),
    /// Literal substring test on the raw value
    ContainsCharacter(char),
}

impl Predicate {
    /// Whether `record` satisfies this predicate
    pub fn matches(&self, record: &StringRecord) -> bool {
        let props = &record.properties;
        match *self {
            Self::IsPalindrome(expected) => props.is_palindrome == expected,
            Self::MinLength(min) => as_i64(props.length) >= min,
            Self::MaxLength(max) => as_i64(props.length) <= max,
            Self::WordCount(count) => as_i64(props.word_count) == count,
            Self::ContainsCharacter(c) => record.value.contains(c),
        }
    }
}

fn as_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

impl FilterSet {
    /// True when no key is set
    pub fn is_empty(&self) -> bool {
        self.predicates().is_empty()
    }

    /// One predicate per present key
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut predicates = Vec::new();
        if let Some(v) = self.is_palindrome {
            predicates.push(Predicate::IsPalindrome(v));
        }
        if let Some(v) = self.min_length {
            predicates.push(Predicate::MinLength(v));
        }
        if let Some(v) = self.max_length {
            predicates.push(Predicate::MaxLength(v));
        }
        if let Some(v) = self.word_count {
            predicates.push(Predicate::WordCount(v));
        }
        if let Some(v) = self.contains_character {
            predicates.push(Predicate::ContainsCharacter(v));
        }
        predicates
    }

    /// The `(min_length, max_length)` pair when the range is empty
    pub fn conflict(&self) -> Option<(i64, i64)> {
        match (self.min_length, self.max_length) {
            (Some(min), Some(max)) if min > max => Some((min, max)),
            _ => None,
        }
    }

    /// Whether `record` satisfies every present key
    pub fn matches(&self, record: &StringRecord) -> bool {
        self.predicates().iter().all(|p| p.matches(record))
    }
}
