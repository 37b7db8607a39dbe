//! Rule table for natural-language queries
//!
//! Each rule looks at the lowercased query text and may set keys on a
//! shared [`FilterSet`]. Rules do not know about each other; the only
//! coupling is that a rule may read what earlier rules already set.

use crate::error::{Error, Result};
use crate::filter::FilterSet;
use regex::Regex;

/// A single query-interpretation rule
pub trait QueryRule: Send + Sync {
    /// Rule name, used in logs and error details
    fn name(&self) -> &str;

    /// Inspect lowercased `text` and update `filters` on a match
    fn apply(&self, text: &str, filters: &mut FilterSet) -> Result<()>;
}

fn compile(name: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::InvalidRule {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

// =============================================================================
// Word count
// =============================================================================

/// Phrase groups mapped to exact word counts; the first group hit wins
pub struct WordCountRule {
    phrases: Vec<(Vec<&'static str>, i64)>,
}

impl Default for WordCountRule {
    fn default() -> Self {
        Self {
            phrases: vec![
                (vec!["single word"], 1),
                (vec!["two word", "2 word"], 2),
            ],
        }
    }
}

impl QueryRule for WordCountRule {
    fn name(&self) -> &str {
        "word_count"
    }

    fn apply(&self, text: &str, filters: &mut FilterSet) -> Result<()> {
        if let Some((_, count)) = self
            .phrases
            .iter()
            .find(|(group, _)| group.iter().any(|phrase| text.contains(phrase)))
        {
            filters.word_count = Some(*count);
        }
        Ok(())
    }
}

// =============================================================================
// Palindrome
// =============================================================================

/// "palindrome", "palindromic", "palindromes" all share this stem
pub struct PalindromeRule;

impl QueryRule for PalindromeRule {
    fn name(&self) -> &str {
        "is_palindrome"
    }

    fn apply(&self, text: &str, filters: &mut FilterSet) -> Result<()> {
        if text.contains("palindrom") {
            filters.is_palindrome = Some(true);
        }
        Ok(())
    }
}

// =============================================================================
// Length bounds
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    /// "longer than N" → min_length = N + 1
    Lower,
    /// "shorter than N" → max_length = N - 1
    Upper,
}

/// Strict comparison phrase translated to an inclusive length bound
pub struct LengthBoundRule {
    name: &'static str,
    pattern: Regex,
    bound: Bound,
}

impl LengthBoundRule {
    pub fn longer_than() -> Result<Self> {
        Ok(Self {
            name: "min_length",
            pattern: compile("min_length", r"longer than (\d+)")?,
            bound: Bound::Lower,
        })
    }

    pub fn shorter_than() -> Result<Self> {
        Ok(Self {
            name: "max_length",
            pattern: compile("max_length", r"shorter than (\d+)")?,
            bound: Bound::Upper,
        })
    }
}

impl QueryRule for LengthBoundRule {
    fn name(&self) -> &str {
        self.name
    }

    fn apply(&self, text: &str, filters: &mut FilterSet) -> Result<()> {
        let Some(caps) = self.pattern.captures(text) else {
            return Ok(());
        };
        let digits = &caps[1];
        let out_of_range =
            || Error::UnparseableQuery(format!("length {} is out of range", digits));

        let n: i64 = digits.parse().map_err(|_| out_of_range())?;
        match self.bound {
            Bound::Lower => {
                filters.min_length = Some(n.checked_add(1).ok_or_else(out_of_range)?);
            }
            Bound::Upper => {
                filters.max_length = Some(n - 1);
            }
        }
        Ok(())
    }
}

// =============================================================================
// Character containment
// =============================================================================

/// "contains z", "containing the letter z", "contain the character z"
///
/// The captured letter must stand alone as a word, so "containing the
/// first vowel" does not capture the `t` of "the".
pub struct ContainsCharacterRule {
    pattern: Regex,
}

impl ContainsCharacterRule {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: compile(
                "contains_character",
                r"contain(?:s|ing)? (?:the letter |the character )?([a-z])\b",
            )?,
        })
    }
}

impl QueryRule for ContainsCharacterRule {
    fn name(&self) -> &str {
        "contains_character"
    }

    fn apply(&self, text: &str, filters: &mut FilterSet) -> Result<()> {
        if let Some(c) = self
            .pattern
            .captures(text)
            .and_then(|caps| caps[1].chars().next())
        {
            filters.contains_character = Some(c);
        }
        Ok(())
    }
}

/// "first vowel" means `a`, unless a letter was already named
pub struct FirstVowelRule;

impl QueryRule for FirstVowelRule {
    fn name(&self) -> &str {
        "first_vowel"
    }

    fn apply(&self, text: &str, filters: &mut FilterSet) -> Result<()> {
        if filters.contains_character.is_none() && text.contains("first vowel") {
            filters.contains_character = Some('a');
        }
        Ok(())
    }
}

/// The built-in rule table, in evaluation order
pub fn default_rules() -> Result<Vec<Box<dyn QueryRule>>> {
    Ok(vec![
        Box::new(WordCountRule::default()),
        Box::new(PalindromeRule),
        Box::new(LengthBoundRule::longer_than()?),
        Box::new(LengthBoundRule::shorter_than()?),
        Box::new(ContainsCharacterRule::new()?),
        Box::new(FirstVowelRule),
    ])
}
