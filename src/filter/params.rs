//! Query-string validation for `GET /strings`
//!
//! Raw parameters arrive as strings; [`FilterParams::into_filter_set`]
//! turns them into a typed [`FilterSet`] or rejects the request.

use crate::error::{Error, Result};
use crate::filter::types::FilterSet;
use serde::Deserialize;

/// Raw filter parameters as received on the query string
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    pub is_palindrome: Option<String>,
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub word_count: Option<String>,
    pub contains_character: Option<String>,
}

impl FilterParams {
    /// Validate every present parameter
    pub fn into_filter_set(self) -> Result<FilterSet> {
        Ok(FilterSet {
            is_palindrome: self.is_palindrome.as_deref().map(parse_bool).transpose()?,
            min_length: self
                .min_length
                .as_deref()
                .map(|v| parse_integer("min_length", v))
                .transpose()?,
            max_length: self
                .max_length
                .as_deref()
                .map(|v| parse_integer("max_length", v))
                .transpose()?,
            word_count: self
                .word_count
                .as_deref()
                .map(|v| parse_integer("word_count", v))
                .transpose()?,
            contains_character: self
                .contains_character
                .as_deref()
                .map(parse_single_char)
                .transpose()?,
        })
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(invalid("is_palindrome", "true or false")),
    }
}

fn parse_integer(name: &str, raw: &str) -> Result<i64> {
    raw.trim().parse().map_err(|_| invalid(name, "integer"))
}

fn parse_single_char(raw: &str) -> Result<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(invalid("contains_character", "single character")),
    }
}

fn invalid(name: &str, expected: &str) -> Error {
    Error::InvalidParameter {
        name: name.to_string(),
        expected: expected.to_string(),
    }
}
